use super::Game;
use serde::{Deserialize, Serialize};

/// A user's shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    /// Cart id
    pub id: u64,
    /// Owner
    #[serde(rename = "userID")]
    pub user_id: u64,
    /// Line items
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Line id
    pub id: u64,
    /// Owning cart
    #[serde(rename = "shoppingCartID")]
    pub shopping_cart_id: u64,
    /// Id of [`CartItem::game`]
    #[serde(rename = "gameID")]
    pub game_id: u64,
    /// Game snapshot taken when the cart was fetched
    pub game: Game,
    /// Copies in the cart
    pub quantity: u32,
}

impl CartItem {
    /// `price × quantity`, saturating at `u64::MAX`
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.game.price.saturating_mul(u64::from(self.quantity))
    }
}

/// A user's favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// List id
    pub id: u64,
    /// Owner
    #[serde(rename = "userID")]
    pub user_id: u64,
    /// Favorited games
    #[serde(default)]
    pub favorite_items: Vec<FavoriteItem>,
}

/// One favorited game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Entry id
    pub id: u64,
    /// Owning list
    #[serde(rename = "favoriteID")]
    pub favorite_id: u64,
    /// Id of [`FavoriteItem::game`]
    #[serde(rename = "gameID")]
    pub game_id: u64,
    /// Game snapshot
    pub game: Game,
}

/// Games a user owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    /// Library id
    pub id: u64,
    /// Owner
    #[serde(rename = "userID")]
    pub user_id: u64,
    /// Owned games
    #[serde(default)]
    pub library_items: Vec<LibraryItem>,
}

/// One owned game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    /// Entry id
    pub id: u64,
    /// Owning library
    #[serde(rename = "libraryID")]
    pub library_id: u64,
    /// Id of [`LibraryItem::game`]
    #[serde(rename = "gameID")]
    pub game_id: u64,
    /// Game snapshot
    pub game: Game,
}
