//! Admin catalog page hosting the product table.

use leptos::prelude::*;

use crate::components::admin_product_table::AdminProductTable;
use crate::types::Product;

/// Admin product listing. Edit / add / more-actions are handed to the host's
/// admin tooling; this page only records the request.
#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<Vec<Product>>>();

    let on_edit = Callback::new(|p: Product| leptos::logging::log!("edit product requested: {}", p.id));
    let on_more = Callback::new(|p: Product| leptos::logging::log!("more actions requested: {}", p.id));
    let on_add = Callback::new(|()| leptos::logging::log!("add product requested"));

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Products"</h1>
            <AdminProductTable
                products=catalog
                on_edit_product=on_edit
                on_product_actions=on_more
                on_add_product=on_add
            />
        </div>
    }
}
