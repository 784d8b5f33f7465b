//! Order history slice.

use crate::app::StorefrontEnvironment;
use crate::models::Order;
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;

/// Orders state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersState {
    /// Known orders
    pub orders: Vec<Order>,
    /// Loading/error flags
    pub status: RequestStatus,
}

/// Order actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "orders"]
pub enum OrdersAction {
    /// Check out the user's cart
    #[request]
    CreateOrderRequest {
        /// Buyer
        user_id: u64,
    },
    /// Order placed
    #[success]
    CreateOrderSuccess(Order),
    /// Checkout failed
    #[failure]
    CreateOrderFailure(String),

    /// Fetch one order
    #[request]
    GetOrderByIdRequest {
        /// Order to fetch
        order_id: u64,
    },
    /// Order fetched
    #[success]
    GetOrderByIdSuccess(Order),
    /// Fetch failed
    #[failure]
    GetOrderByIdFailure(String),

    /// Fetch a user's order history
    #[request]
    GetUserOrdersRequest {
        /// Buyer
        user_id: u64,
    },
    /// History fetched
    #[success]
    GetUserOrdersSuccess(Vec<Order>),
    /// Fetch failed
    #[failure]
    GetUserOrdersFailure(String),

    /// Forget every order locally
    ClearOrders,
}

/// Reducer for [`OrdersState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdersReducer;

impl Reducer for OrdersReducer {
    type State = OrdersState;
    type Action = OrdersAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut OrdersState,
        action: OrdersAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<OrdersAction>; 4]> {
        state.status.track(&action);

        match action {
            OrdersAction::CreateOrderSuccess(order) => state.orders.push(order),
            OrdersAction::GetOrderByIdSuccess(order) => {
                match state.orders.iter_mut().find(|o| o.id == order.id) {
                    Some(existing) => *existing = order,
                    None => state.orders.push(order),
                }
            },
            OrdersAction::GetUserOrdersSuccess(orders) => state.orders = orders,
            OrdersAction::ClearOrders => {
                state.orders.clear();
                state.status.error = None;
            },
            _ => {},
        }

        smallvec![Effect::None]
    }
}
