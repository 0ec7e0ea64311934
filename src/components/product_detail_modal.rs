//! Read-only detail modal for a product pinned from the admin table.

#[cfg(test)]
#[path = "product_detail_modal_test.rs"]
mod product_detail_modal_test;

use leptos::prelude::*;

use crate::config::StorefrontConfig;
use crate::state::admin_table::status_badge_class;
use crate::types::Product;
use crate::util::format::format_price;

/// Keys that dismiss the modal.
fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Modal showing every field of `product`. Closes on backdrop click,
/// the Close button, or Escape.
#[component]
pub fn ProductDetailModal(product: Product, on_close: Callback<()>) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let symbol = config.currency_symbol;

    // Focus the dialog on open so Escape reaches its keydown handler.
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let price = format_price(&symbol, product.price);
    let original = product.original_price.map(|p| format_price(&symbol, p));
    let rent = product.rent_price.map(|p| format_price(&symbol, p));
    let badge = status_badge_class(&product.status);
    let availability = if product.in_stock { "In stock" } else { "Out of stock" };
    let Product { id, name, image, stock, status, category, .. } = product;
    let heading = name.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                node_ref=dialog_ref
                class="dialog dialog--product"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{heading}</h2>
                <img class="dialog__product-image" src=image alt=name/>

                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Category"</span>
                    <span class="dialog__profile-value">{category}</span>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Price"</span>
                    <span class="dialog__profile-value">
                        {price}
                        {original.map(|o| view! { <span class="price-tag__original">{o}</span> })}
                    </span>
                </div>
                {rent
                    .map(|r| {
                        view! {
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Rent"</span>
                                <span class="dialog__profile-value">{r}</span>
                            </div>
                        }
                    })}
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Stock"</span>
                    <span class="dialog__profile-value">{stock}" \u{00B7} "{availability}</span>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Status"</span>
                    <span class=badge>{status}</span>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"ID"</span>
                    <span class="dialog__profile-value dialog__profile-value--mono">{id}</span>
                </div>

                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
