use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::slices::{CartAction, OrdersAction};
use junimo_core::{Effect, async_effect};
use std::sync::Arc;

pub(super) fn watch(action: &OrdersAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    let orders = Arc::clone(&env.services.orders);

    match *action {
        OrdersAction::CreateOrderRequest { user_id } => {
            take_latest(action, AppAction::Orders, async move {
                settle(
                    orders.create_order(user_id).await,
                    OrdersAction::CreateOrderSuccess,
                    OrdersAction::CreateOrderFailure,
                    "Failed to create order",
                )
            })
        },
        // A placed order empties the cart server-side.
        OrdersAction::CreateOrderSuccess(ref order) => {
            tracing::info!(order_id = order.id, total = order.total_cost, "Order placed");
            async_effect!(Some(AppAction::Cart(CartAction::ClearCartSuccess)))
        },
        OrdersAction::GetOrderByIdRequest { order_id } => {
            take_latest(action, AppAction::Orders, async move {
                settle(
                    orders.get_order_by_id(order_id).await,
                    OrdersAction::GetOrderByIdSuccess,
                    OrdersAction::GetOrderByIdFailure,
                    "Failed to fetch order details",
                )
            })
        },
        OrdersAction::GetUserOrdersRequest { user_id } => {
            take_latest(action, AppAction::Orders, async move {
                settle(
                    orders.get_user_orders(user_id).await,
                    OrdersAction::GetUserOrdersSuccess,
                    OrdersAction::GetUserOrdersFailure,
                    "Failed to fetch user orders",
                )
            })
        },
        _ => Effect::None,
    }
}
