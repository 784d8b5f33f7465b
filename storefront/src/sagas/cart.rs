use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::slices::CartAction;
use junimo_core::Effect;
use std::sync::Arc;

pub(super) fn watch(action: &CartAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    let cart = Arc::clone(&env.services.cart);

    match *action {
        CartAction::GetCartRequest { user_id } => take_latest(action, AppAction::Cart, async move {
            settle(
                cart.get_cart(user_id).await,
                CartAction::GetCartSuccess,
                CartAction::GetCartFailure,
                "Failed to fetch cart",
            )
        }),
        CartAction::AddToCartRequest {
            user_id,
            game_id,
            quantity,
        } => take_latest(action, AppAction::Cart, async move {
            settle(
                cart.add_to_cart(user_id, game_id, quantity).await,
                CartAction::AddToCartSuccess,
                CartAction::AddToCartFailure,
                "Failed to add item to cart",
            )
        }),
        CartAction::RemoveFromCartRequest { user_id, game_id } => {
            take_latest(action, AppAction::Cart, async move {
                let refreshed = match cart.remove_from_cart(user_id, game_id).await {
                    Ok(()) => cart.get_cart(user_id).await,
                    Err(e) => Err(e),
                };
                settle(
                    refreshed,
                    CartAction::RemoveFromCartSuccess,
                    CartAction::RemoveFromCartFailure,
                    "Failed to remove item from cart",
                )
            })
        },
        CartAction::UpdateQuantityRequest {
            user_id,
            game_id,
            quantity,
        } => take_latest(action, AppAction::Cart, async move {
            settle(
                cart.update_quantity(user_id, game_id, quantity).await,
                CartAction::UpdateQuantitySuccess,
                CartAction::UpdateQuantityFailure,
                "Failed to update quantity",
            )
        }),
        CartAction::ClearCartRequest { user_id } => take_latest(action, AppAction::Cart, async move {
            settle(
                cart.clear_cart(user_id).await,
                |()| CartAction::ClearCartSuccess,
                CartAction::ClearCartFailure,
                "Failed to clear cart",
            )
        }),
        _ => Effect::None,
    }
}
