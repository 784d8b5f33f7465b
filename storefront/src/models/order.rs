use super::Game;
use serde::{Deserialize, Serialize};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id
    pub id: u64,
    /// Buyer
    #[serde(rename = "userID")]
    pub user_id: u64,
    /// Amount charged, whole currency units
    pub total_cost: u64,
    /// Backend status (`pending`, `completed`, ...)
    pub status: String,
    /// Backend creation timestamp, as sent
    pub created_at: String,
    /// Backend update timestamp, as sent
    pub updated_at: String,
    /// Purchased lines
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line id
    pub id: u64,
    /// Owning order
    #[serde(rename = "orderID")]
    pub order_id: u64,
    /// Id of [`OrderItem::game`]
    #[serde(rename = "gameID")]
    pub game_id: u64,
    /// Game snapshot
    pub game: Game,
    /// Unit price paid
    pub price: u64,
    /// Copies bought
    pub quantity: u32,
}
