pub mod account;
pub mod admin_products;
pub mod product;
pub mod shop;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::types::Product;

/// Callback that routes to a product's detail page.
///
/// Navigation runs in an effect so the callback itself stays `Send + Sync`.
/// Must be called inside a component.
pub(crate) fn product_detail_opener() -> Callback<Product> {
    let navigate = use_navigate();
    let target = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(path) = target.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    Callback::new(move |p: Product| target.set(Some(format!("/product/{}", p.id))))
}
