//! Catalog filter slice.

use crate::app::StorefrontEnvironment;
use crate::catalog::{CatalogFilter, PriceBound, PriceBounds, SortKey};
use crate::models::Game;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use std::sync::Arc;

/// Catalog filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    /// Active filter
    pub filter: CatalogFilter,
    /// Price span of the loaded games
    pub bounds: PriceBounds,
    /// Category kept selected across resets (the category page's id)
    pub pinned_category: Option<u64>,
    /// Text of the min/max price inputs, which may hold rejected input
    pub price_inputs: [String; 2],
}

impl Default for CatalogState {
    fn default() -> Self {
        let bounds = PriceBounds::default();
        let filter = CatalogFilter::new(bounds);
        let price_inputs = inputs_for(&filter);
        Self {
            filter,
            bounds,
            pinned_category: None,
            price_inputs,
        }
    }
}

fn inputs_for(filter: &CatalogFilter) -> [String; 2] {
    [filter.price.min.to_string(), filter.price.max.to_string()]
}

impl CatalogState {
    fn reset(&mut self) {
        self.filter.reset(self.bounds, self.pinned_category);
        self.price_inputs = inputs_for(&self.filter);
    }
}

/// Catalog filter actions
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogAction {
    /// Select or deselect a category
    ToggleCategory(u64),
    /// Select or deselect a developer
    ToggleDeveloper(u64),
    /// Change the ordering
    SetSort(SortKey),
    /// Typed price input
    SetPriceInput {
        /// Edited end
        bound: PriceBound,
        /// Input text
        raw: String,
    },
    /// Slider moved
    SetPriceSlider {
        /// Lower handle
        min: f64,
        /// Upper handle
        max: f64,
    },
    /// Enter (`Some`) or leave (`None`) a category page
    PinCategory(Option<u64>),
    /// Clear every filter
    Reset,
    /// A new game list arrived
    GamesLoaded(Arc<Vec<Game>>),
}

/// Reducer for [`CatalogState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut CatalogState,
        action: CatalogAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<CatalogAction>; 4]> {
        match action {
            CatalogAction::ToggleCategory(id) => state.filter.toggle_category(id),
            CatalogAction::ToggleDeveloper(id) => state.filter.toggle_developer(id),
            CatalogAction::SetSort(sort) => state.filter.sort = sort,
            CatalogAction::SetPriceInput { bound, raw } => {
                state.filter.set_price_input(bound, &raw);
                let slot = match bound {
                    PriceBound::Min => 0,
                    PriceBound::Max => 1,
                };
                state.price_inputs[slot] = raw;
            },
            CatalogAction::SetPriceSlider { min, max } => {
                state.filter.set_price_slider(min, max);
                state.price_inputs = inputs_for(&state.filter);
            },
            CatalogAction::PinCategory(category) => {
                state.pinned_category = category;
                state.reset();
            },
            CatalogAction::Reset => state.reset(),
            CatalogAction::GamesLoaded(games) => {
                if let Some(bounds) = PriceBounds::of(&games) {
                    state.bounds = bounds;
                }
                state.reset();
            },
        }

        smallvec![Effect::None]
    }
}
