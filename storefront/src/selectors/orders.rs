//! Order history views.

use crate::app::AppState;
use crate::models::Order;

/// Status of a fulfilled order
pub const COMPLETED: &str = "completed";

/// Status of an order awaiting payment
pub const PENDING: &str = "pending";

/// A known order
#[must_use]
pub fn order_by_id(state: &AppState, id: u64) -> Option<&Order> {
    state.orders.orders.iter().find(|o| o.id == id)
}

/// Orders with `status`, compared case-insensitively
#[must_use]
pub fn orders_by_status<'a>(state: &'a AppState, status: &str) -> Vec<&'a Order> {
    state
        .orders
        .orders
        .iter()
        .filter(|o| o.status.eq_ignore_ascii_case(status))
        .collect()
}

/// Fulfilled orders
#[must_use]
pub fn completed_orders(state: &AppState) -> Vec<&Order> {
    orders_by_status(state, COMPLETED)
}

/// Orders awaiting payment
#[must_use]
pub fn pending_orders(state: &AppState) -> Vec<&Order> {
    orders_by_status(state, PENDING)
}

/// Money spent on fulfilled orders
#[must_use]
pub fn total_spent(state: &AppState) -> u64 {
    completed_orders(state)
        .iter()
        .map(|o| o.total_cost)
        .fold(0, u64::saturating_add)
}

/// Number of known orders
#[must_use]
pub fn orders_count(state: &AppState) -> usize {
    state.orders.orders.len()
}
