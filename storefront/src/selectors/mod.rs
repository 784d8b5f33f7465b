//! Read-only projections of [`AppState`].
//!
//! Most selectors are plain functions. [`CatalogView`] memoizes the filtered
//! catalog, recomputing only when the game list or the filter changes.

pub mod auth;
pub mod cart;
pub mod games;
pub mod news;
pub mod orders;
pub mod owned;

use crate::app::AppState;
use crate::catalog::{self, CatalogFilter};
use crate::models::Game;
use junimo_core::selector::{Identity, Memo};
use std::sync::Arc;

/// Memoized filtered and sorted catalog.
#[derive(Debug, Default)]
pub struct CatalogView {
    memo: Memo<(Identity<Vec<Game>>, CatalogFilter), Vec<Game>>,
}

impl CatalogView {
    /// Empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible catalog for `state`
    #[must_use]
    pub fn select(&self, state: &AppState) -> Arc<Vec<Game>> {
        let games = &state.games.games;
        let filter = &state.catalog.filter;
        self.memo
            .get_or_compute((Identity::of(games), filter.clone()), || {
                tracing::trace!(games = games.len(), "Recomputing catalog view");
                catalog::apply(games, filter)
            })
    }

    /// How many times the view was recomputed
    #[must_use]
    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortKey;
    use crate::services::fixtures;

    fn state_with_catalog() -> AppState {
        let mut state = AppState::default();
        state.games.games = Arc::new(fixtures::games());
        state
    }

    #[test]
    fn test_catalog_view_memoizes_on_identity() {
        let view = CatalogView::new();
        let mut state = state_with_catalog();

        let first = view.select(&state);
        let second = view.select(&state);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(view.recomputations(), 1);

        state.catalog.filter.sort = SortKey::PriceLow;
        let sorted = view.select(&state);
        assert_eq!(view.recomputations(), 2);
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));

        // Same contents, new allocation.
        state.games.games = Arc::new(fixtures::games());
        let _ = view.select(&state);
        assert_eq!(view.recomputations(), 3);
    }
}
