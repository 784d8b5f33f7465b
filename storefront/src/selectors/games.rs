//! Catalog lookups.

use crate::app::AppState;
use crate::models::{Category, Developer, Game};

/// A game from the current list
#[must_use]
pub fn game_by_id(state: &AppState, id: u64) -> Option<&Game> {
    state.games.games.iter().find(|g| g.id == id)
}

/// Games of one category in the current list
#[must_use]
pub fn games_by_category(state: &AppState, category_id: u64) -> Vec<&Game> {
    state
        .games
        .games
        .iter()
        .filter(|g| g.category_id == category_id)
        .collect()
}

/// Games of one developer in the current list
#[must_use]
pub fn games_by_developer(state: &AppState, developer_id: u64) -> Vec<&Game> {
    state
        .games
        .games
        .iter()
        .filter(|g| g.developer_id == developer_id)
        .collect()
}

/// A known category
#[must_use]
pub fn category_by_id(state: &AppState, id: u64) -> Option<&Category> {
    state.games.categories.iter().find(|c| c.id == id)
}

/// A known developer
#[must_use]
pub fn developer_by_id(state: &AppState, id: u64) -> Option<&Developer> {
    state.games.developers.iter().find(|d| d.id == id)
}
