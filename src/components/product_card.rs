//! Product tile in a full card layout or a compact list row.

use leptos::prelude::*;

use crate::config::StorefrontConfig;
use crate::state::product_card::{CardAction, CardActions, CardEffect, PriceLine, ProductCardState};
use crate::types::Product;
use crate::util::format::format_price;

/// Product card with favorite, add-to-cart, buy and rent actions.
///
/// `minimal` renders the compact row used in sidebars and search results.
/// Every action except the local favorite/cart toggles is forwarded to the
/// caller; absent optional callbacks turn the action into a log line.
#[component]
pub fn ProductCard(
    product: Product,
    on_click: Callback<Product>,
    #[prop(optional)] minimal: bool,
    #[prop(optional)] show_actions: bool,
    #[prop(optional)] on_buy_now: Option<Callback<Product>>,
    #[prop(optional)] on_rent: Option<Callback<Product>>,
    #[prop(optional)] on_add_to_cart: Option<Callback<Product>>,
    #[prop(optional)] on_favorite_change: Option<Callback<(Product, bool)>>,
) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let reset_ms = config.add_to_cart_reset_ms;
    let price = PriceLine::for_product(&product, &config.currency_symbol);
    let card = RwSignal::new(ProductCardState::default());
    let product = StoredValue::new(product);

    let dispatch = move |action: CardAction| {
        let p = product.get_value();
        let Some(current) = card.try_get_untracked() else {
            return;
        };
        let mut next = current;
        let Some(effect) = next.apply(action, &p) else {
            return;
        };
        // Open / buy / rent leave the flags alone; skip the notify.
        if next != current {
            card.set(next);
        }
        match effect {
            CardEffect::OpenDetail => {
                leptos::logging::log!("open product detail: /product/{}", p.id);
                on_click.run(p);
            }
            CardEffect::Favorited | CardEffect::Unfavorited => {
                let favorited = effect == CardEffect::Favorited;
                leptos::logging::log!(
                    "{} wishlist: {}",
                    if favorited { "added to" } else { "removed from" },
                    p.name
                );
                if let Some(cb) = on_favorite_change {
                    cb.run((p, favorited));
                }
            }
            CardEffect::AddedToCart => {
                leptos::logging::log!("added to cart: {}", p.name);
                schedule_cart_reset(card, reset_ms);
                if let Some(cb) = on_add_to_cart {
                    cb.run(p);
                }
            }
            CardEffect::BuyNow => match on_buy_now {
                Some(cb) => cb.run(p),
                None => leptos::logging::log!("buy now: {}", p.name),
            },
            CardEffect::Rent => match on_rent {
                Some(cb) => cb.run(p),
                None => leptos::logging::log!("rent: {}", p.name),
            },
        }
    };

    // Button clicks must not bubble up to the card's open-detail handler.
    let button = move |action: CardAction| {
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            dispatch(action);
        }
    };

    let actions = move || product.with_value(|p| CardActions::for_product(p, &card.get()));
    let favorited = move || card.get().favorited;
    let adding = move || card.get().adding_to_cart;
    let name = product.with_value(|p| p.name.clone());
    let image = product.with_value(|p| p.image.clone());
    let alt = name.clone();
    let rent_label = product.with_value(|p| {
        p.rent_price
            .map(|r| format!("Rent for {}", format_price(&config.currency_symbol, r)))
    });
    let out_of_stock = product.with_value(|p| !p.in_stock);

    let heart = move || if favorited() { "\u{2665}" } else { "\u{2661}" };

    if minimal {
        return view! {
            <div class="product-row" on:click=move |_| dispatch(CardAction::Open)>
                <div class="product-row__thumb">
                    <img src=image.clone() alt=alt.clone() loading="lazy"/>
                    <Show when=move || out_of_stock>
                        <div class="product-row__out">
                            <span>"Out"</span>
                        </div>
                    </Show>
                </div>

                <div class="product-row__info">
                    <h4 class="product-row__name">{name.clone()}</h4>
                    <PriceTag price=price.clone() compact=true/>
                </div>

                <div class="product-row__actions" class:product-row__actions--visible=show_actions>
                    <button
                        class="product-row__btn"
                        class:product-row__btn--favorited=favorited
                        title="Add to Wishlist"
                        on:click=button(CardAction::ToggleFavorite)
                    >
                        {heart}
                    </button>
                    <Show when=move || actions().compact_cart_visible>
                        <button
                            class="product-row__btn"
                            class:product-row__btn--adding=adding
                            title="Add to Cart"
                            disabled=move || !actions().add_to_cart_enabled
                            on:click=button(CardAction::AddToCart)
                        >
                            "\u{1F6D2}"
                        </button>
                    </Show>
                </div>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="product-card" on:click=move |_| dispatch(CardAction::Open)>
            <div class="product-card__media">
                <img class="product-card__image" src=image alt=alt loading="lazy"/>
                <button
                    class="product-card__favorite"
                    class:product-card__favorite--active=favorited
                    title="Add to Wishlist"
                    on:click=button(CardAction::ToggleFavorite)
                >
                    {heart}
                </button>
                <Show when=move || out_of_stock>
                    <div class="product-card__out">
                        <span class="product-card__out-label">"Out of Stock"</span>
                    </div>
                </Show>
            </div>

            <div class="product-card__body">
                <h4 class="product-card__name">{name}</h4>
                <PriceTag price=price compact=false/>

                <div class="product-card__actions">
                    <div class="product-card__buy-row">
                        <button
                            class="btn btn--primary product-card__buy"
                            disabled=move || !actions().buy_now_enabled
                            on:click=button(CardAction::BuyNow)
                        >
                            "Buy Now"
                        </button>
                        <button
                            class="btn product-card__cart"
                            class:product-card__cart--adding=adding
                            title="Add to Cart"
                            disabled=move || !actions().add_to_cart_enabled
                            on:click=button(CardAction::AddToCart)
                        >
                            "\u{1F6D2}"
                        </button>
                    </div>
                    {rent_label
                        .map(|label| {
                            view! {
                                <button
                                    class="btn product-card__rent"
                                    disabled=move || !actions().rent_enabled
                                    on:click=button(CardAction::Rent)
                                >
                                    {label}
                                </button>
                            }
                        })}
                </div>
            </div>
        </div>
    }
    .into_any()
}

/// Current price with the original price struck through when discounted.
#[component]
fn PriceTag(price: PriceLine, compact: bool) -> impl IntoView {
    view! {
        <div class="price-tag" class:price-tag--compact=compact>
            <span class="price-tag__current">{price.current}</span>
            {price
                .original
                .map(|original| view! { <span class="price-tag__original">{original}</span> })}
        </div>
    }
}

/// Clear the adding-to-cart flag after `delay_ms`. Fire-and-forget; a card
/// disposed before the timer fires is left alone.
fn schedule_cart_reset(card: RwSignal<ProductCardState>, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            let _ = card.try_update(ProductCardState::finish_add_to_cart);
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (card, delay_ms);
    }
}
