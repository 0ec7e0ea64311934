//! Storefront landing page: a grid of product cards.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::types::Product;

/// Product grid over the catalog the host application provides in context.
#[component]
pub fn ShopPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<Vec<Product>>>();

    let open_detail = super::product_detail_opener();

    view! {
        <div class="shop-page">
            <h1 class="shop-page__title">"Shop"</h1>
            <div class="shop-page__grid">
                {move || {
                    catalog
                        .get()
                        .into_iter()
                        .map(|p| view! { <ProductCard product=p on_click=open_detail/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
