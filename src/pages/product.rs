//! Single product page with related items as compact rows.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::ProductCard;
use crate::types::Product;

/// Number of same-category items listed beside the main card.
const RELATED_LIMIT: usize = 4;

#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<Vec<Product>>>();
    let params = use_params_map();

    let open_detail = super::product_detail_opener();

    let current = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        catalog.with(|list| list.iter().find(|p| p.id == id).cloned())
    };

    let related = move |product: &Product| {
        catalog.with(|list| {
            list.iter()
                .filter(|p| p.id != product.id && p.category == product.category)
                .take(RELATED_LIMIT)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="product-page">
            {move || match current() {
                Some(product) => {
                    let related = related(&product);
                    view! {
                        <div class="product-page__main">
                            <ProductCard product=product on_click=open_detail/>
                        </div>
                        <aside class="product-page__related">
                            <h3>"More like this"</h3>
                            {related
                                .into_iter()
                                .map(|p| view! { <ProductCard product=p on_click=open_detail minimal=true show_actions=true/> })
                                .collect::<Vec<_>>()}
                        </aside>
                    }
                        .into_any()
                }
                None => view! { <p class="product-page__missing">"Product not found."</p> }.into_any(),
            }}
        </div>
    }
}
