//! Search-as-you-type slice.
//!
//! Keystrokes arrive as [`SearchAction::QueryChanged`]. The search saga
//! debounces them into [`SearchAction::SearchRequest`]s; this reducer only
//! tracks what the dropdown shows.

use crate::app::StorefrontEnvironment;
use crate::models::Game;
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;

/// Search dropdown state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Raw input text
    pub query: String,
    /// Matches of the last completed search
    pub results: Vec<Game>,
    /// Whether the dropdown is open
    pub visible: bool,
    /// Loading/error flags
    pub status: RequestStatus,
}

impl SearchState {
    /// Whether a search is in flight
    #[must_use]
    pub const fn searching(&self) -> bool {
        self.status.loading
    }
}

/// Number of characters in the trimmed query
#[must_use]
pub fn query_len(query: &str) -> usize {
    query.trim().chars().count()
}

/// Search actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "search"]
pub enum SearchAction {
    /// The input text changed
    QueryChanged(String),
    /// Debounce elapsed; search for `query`
    #[request]
    SearchRequest {
        /// Trimmed query
        query: String,
    },
    /// Matches for `query`
    #[success]
    SearchSuccess {
        /// Query the results belong to
        query: String,
        /// Matching games
        results: Vec<Game>,
    },
    /// Search failed
    #[failure]
    SearchFailure(String),
    /// Close the dropdown, keeping the results
    Dismiss,
    /// Empty the input
    Clear,
}

/// Reducer for [`SearchState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Action = SearchAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut SearchState,
        action: SearchAction,
        env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<SearchAction>; 4]> {
        state.status.track(&action);

        match action {
            SearchAction::QueryChanged(query) => {
                if query_len(&query) < env.search.min_chars {
                    state.results.clear();
                    state.visible = false;
                    state.status.reset();
                }
                state.query = query;
            },
            SearchAction::SearchSuccess { results, .. } => {
                state.results = results;
                state.visible = true;
            },
            SearchAction::Dismiss => state.visible = false,
            SearchAction::Clear => *state = SearchState::default(),
            SearchAction::SearchRequest { .. } | SearchAction::SearchFailure(_) => {},
        }

        smallvec![Effect::None]
    }
}
