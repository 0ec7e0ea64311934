//! Favorite / add-to-cart state for a single product card.
//!
//! DESIGN
//! ======
//! Clicks are reduced to a [`CardEffect`] by [`ProductCardState::apply`]; the
//! component then forwards the effect to whichever caller callback owns it.
//! A `None` effect means the click was swallowed (disabled button, pending
//! add-to-cart), so disabled-state rules are enforced here rather than relying
//! on the DOM `disabled` attribute alone.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use crate::types::Product;
use crate::util::format::format_price;

/// Toggle flags owned by one rendered card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductCardState {
    pub favorited: bool,
    /// Lit briefly after an add-to-cart click; cleared by a timer.
    pub adding_to_cart: bool,
}

/// A user interaction on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Click on the card body.
    Open,
    ToggleFavorite,
    AddToCart,
    BuyNow,
    Rent,
}

/// What the card asks its caller to do in response to an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    OpenDetail,
    Favorited,
    Unfavorited,
    /// Adding started; the caller should schedule [`ProductCardState::finish_add_to_cart`].
    AddedToCart,
    BuyNow,
    Rent,
}

impl ProductCardState {
    pub fn apply(&mut self, action: CardAction, product: &Product) -> Option<CardEffect> {
        match action {
            CardAction::Open => Some(CardEffect::OpenDetail),
            CardAction::ToggleFavorite => {
                self.favorited = !self.favorited;
                Some(if self.favorited { CardEffect::Favorited } else { CardEffect::Unfavorited })
            }
            CardAction::AddToCart => {
                if self.adding_to_cart || !product.in_stock {
                    return None;
                }
                self.adding_to_cart = true;
                Some(CardEffect::AddedToCart)
            }
            CardAction::BuyNow => product.in_stock.then_some(CardEffect::BuyNow),
            CardAction::Rent => {
                (product.in_stock && product.rent_price.is_some()).then_some(CardEffect::Rent)
            }
        }
    }

    pub fn finish_add_to_cart(&mut self) {
        self.adding_to_cart = false;
    }
}

/// Current price plus the optional struck-through original price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceLine {
    pub current: String,
    pub original: Option<String>,
}

impl PriceLine {
    pub fn for_product(product: &Product, currency_symbol: &str) -> Self {
        Self {
            current: format_price(currency_symbol, product.price),
            original: product
                .original_price
                .map(|p| format_price(currency_symbol, p)),
        }
    }
}

/// Visibility and enablement of the card's buttons and stock indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardActions {
    pub out_of_stock: bool,
    pub buy_now_enabled: bool,
    pub add_to_cart_enabled: bool,
    /// The compact row hides its cart button entirely when out of stock.
    pub compact_cart_visible: bool,
    pub rent_visible: bool,
    pub rent_enabled: bool,
}

impl CardActions {
    pub fn for_product(product: &Product, state: &ProductCardState) -> Self {
        let in_stock = product.in_stock;
        Self {
            out_of_stock: !in_stock,
            buy_now_enabled: in_stock,
            add_to_cart_enabled: in_stock && !state.adding_to_cart,
            compact_cart_visible: in_stock,
            rent_visible: product.rent_price.is_some(),
            rent_enabled: in_stock,
        }
    }
}
