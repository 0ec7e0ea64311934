//! Admin product table with name search, filter toggle, and row actions.

use leptos::prelude::*;

use crate::components::product_detail_modal::ProductDetailModal;
use crate::config::StorefrontConfig;
use crate::state::admin_table::{
    AdminTableState, COLUMN_COUNT, COLUMN_HEADERS, TableBody, filter_by_name, status_badge_class,
};
use crate::types::Product;
use crate::util::format::format_price;

/// Product table for the admin area.
///
/// Rows are narrowed by a case-insensitive name search. View pins a row in a
/// detail modal; edit, more-actions and add are delegated to the parent.
#[component]
pub fn AdminProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_edit_product: Callback<Product>,
    on_product_actions: Callback<Product>,
    on_add_product: Callback<()>,
    #[prop(optional)] on_view_product: Option<Callback<Product>>,
) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let symbol = StoredValue::new(config.currency_symbol);
    let table = RwSignal::new(AdminTableState::default());

    let on_view = Callback::new(move |p: Product| {
        table.update(|t| t.view(p.clone()));
        if let Some(cb) = on_view_product {
            cb.run(p);
        }
    });
    let on_close_view = Callback::new(move |()| table.update(AdminTableState::close_view));

    let filter_open = move || table.with(|t| t.filter_open);

    let body = move || {
        let query = table.with(|t| t.search_text.clone());
        products.with(|list| match TableBody::from_filtered(filter_by_name(list, &query)) {
            TableBody::Empty => view! {
                <tr class="admin-table__empty">
                    <td colspan=COLUMN_COUNT.to_string()>"No products found."</td>
                </tr>
            }
            .into_any(),
            TableBody::Rows(rows) => rows
                .into_iter()
                .map(|p| {
                    view! {
                        <AdminProductRow
                            product=p.clone()
                            symbol=symbol.get_value()
                            on_view=on_view
                            on_edit=on_edit_product
                            on_more=on_product_actions
                        />
                    }
                })
                .collect::<Vec<_>>()
                .into_any(),
        })
    };

    view! {
        <div class="admin-table__toolbar">
            <div class="admin-table__search">
                <input
                    class="admin-table__search-input"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || table.with(|t| t.search_text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        table.update(|t| t.search_text = text);
                    }
                />
                <button
                    class="btn admin-table__filter"
                    class:admin-table__filter--active=filter_open
                    on:click=move |_| table.update(AdminTableState::toggle_filter)
                >
                    "\u{25BD} Filter"
                </button>
            </div>
            <button class="btn btn--primary admin-table__add" on:click=move |_| on_add_product.run(())>
                "+ Add Product"
            </button>
        </div>

        <div class="admin-table">
            <table class="admin-table__table">
                <thead>
                    <tr>
                        {COLUMN_HEADERS
                            .iter()
                            .map(|h| view! { <th class="admin-table__th">{*h}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>

        {move || {
            table
                .with(|t| t.viewing.clone())
                .map(|p| view! { <ProductDetailModal product=p on_close=on_close_view/> })
        }}
    }
}

/// One product row with view / edit / more buttons.
#[component]
fn AdminProductRow(
    product: Product,
    symbol: String,
    on_view: Callback<Product>,
    on_edit: Callback<Product>,
    on_more: Callback<Product>,
) -> impl IntoView {
    let price = format_price(&symbol, product.price);
    let badge = status_badge_class(&product.status);
    let row = StoredValue::new(product.clone());
    let Product { name, image, stock, status, category, .. } = product;
    let alt = name.clone();

    view! {
        <tr class="admin-table__row">
            <td class="admin-table__product">
                <img class="admin-table__thumb" src=image alt=alt loading="lazy"/>
                <span class="admin-table__name">{name}</span>
            </td>
            <td>{category}</td>
            <td>{price}</td>
            <td>{stock}</td>
            <td>
                <span class=badge>{status}</span>
            </td>
            <td>
                <div class="admin-table__actions">
                    <button class="admin-table__action" title="View product" on:click=move |_| on_view.run(row.get_value())>
                        "\u{1F441}"
                    </button>
                    <button class="admin-table__action" title="Edit product" on:click=move |_| on_edit.run(row.get_value())>
                        "\u{270E}"
                    </button>
                    <button class="admin-table__action" title="More actions" on:click=move |_| on_more.run(row.get_value())>
                        "\u{22EF}"
                    </button>
                </div>
            </td>
        </tr>
    }
}
