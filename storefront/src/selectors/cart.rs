//! Shopping cart views.

use crate::app::AppState;
use crate::models::CartItem;

/// Cart lines, empty when no cart is loaded
#[must_use]
pub fn items(state: &AppState) -> &[CartItem] {
    state
        .cart
        .cart
        .as_ref()
        .map(|cart| cart.cart_items.as_slice())
        .unwrap_or_default()
}

/// Total number of copies in the cart
#[must_use]
pub fn items_count(state: &AppState) -> u64 {
    items(state).iter().map(|item| u64::from(item.quantity)).sum()
}

/// Cart subtotal, price times quantity summed over lines
#[must_use]
pub fn total(state: &AppState) -> u64 {
    items(state)
        .iter()
        .map(CartItem::line_total)
        .fold(0, u64::saturating_add)
}

/// The line holding `game_id`
#[must_use]
pub fn item_by_game_id(state: &AppState, game_id: u64) -> Option<&CartItem> {
    items(state).iter().find(|item| item.game_id == game_id)
}

/// Whether `game_id` is in the cart
#[must_use]
pub fn is_game_in_cart(state: &AppState, game_id: u64) -> bool {
    item_by_game_id(state, game_id).is_some()
}
