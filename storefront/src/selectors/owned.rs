//! Favorites and library views.

use crate::app::AppState;
use crate::models::{FavoriteItem, LibraryItem};

/// Favorite entries, empty when none are loaded
#[must_use]
pub fn favorite_items(state: &AppState) -> &[FavoriteItem] {
    state
        .favorites
        .favorites
        .as_ref()
        .map(|f| f.favorite_items.as_slice())
        .unwrap_or_default()
}

/// Number of favorites
#[must_use]
pub fn favorites_count(state: &AppState) -> usize {
    favorite_items(state).len()
}

/// Whether `game_id` is a favorite
#[must_use]
pub fn is_favorite(state: &AppState, game_id: u64) -> bool {
    favorite_items(state).iter().any(|item| item.game_id == game_id)
}

/// Ids of favorite games
#[must_use]
pub fn favorite_game_ids(state: &AppState) -> Vec<u64> {
    favorite_items(state).iter().map(|item| item.game_id).collect()
}

/// Owned games, empty when the library is not loaded
#[must_use]
pub fn library_items(state: &AppState) -> &[LibraryItem] {
    state
        .library
        .library
        .as_ref()
        .map(|l| l.library_items.as_slice())
        .unwrap_or_default()
}

/// Number of owned games
#[must_use]
pub fn library_count(state: &AppState) -> usize {
    library_items(state).len()
}

/// Whether `game_id` is owned
#[must_use]
pub fn is_in_library(state: &AppState, game_id: u64) -> bool {
    library_items(state).iter().any(|item| item.game_id == game_id)
}

/// Ids of owned games
#[must_use]
pub fn library_game_ids(state: &AppState) -> Vec<u64> {
    library_items(state).iter().map(|item| item.game_id).collect()
}
