//! Game catalog slice.

use crate::app::StorefrontEnvironment;
use crate::models::{Category, Developer, Game};
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;
use std::sync::Arc;

/// Games state
///
/// The game list is shared behind an `Arc` so selectors can key their
/// memoization on its identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamesState {
    /// Last fetched list
    pub games: Arc<Vec<Game>>,
    /// Game on the details page
    pub game: Option<Game>,
    /// Known categories
    pub categories: Vec<Category>,
    /// Known developers
    pub developers: Vec<Developer>,
    /// Loading/error flags
    pub status: RequestStatus,
}

/// Games actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "games"]
pub enum GamesAction {
    /// Fetch a page of the catalog
    #[request]
    GetAllGamesRequest {
        /// Page size, 10 when unset
        limit: Option<u32>,
        /// Page start, 0 when unset
        offset: Option<u32>,
    },
    /// Page fetched
    #[success]
    GetAllGamesSuccess(Arc<Vec<Game>>),
    /// Fetch failed
    #[failure]
    GetAllGamesFailure(String),

    /// Fetch one game
    #[request]
    GetGameByIdRequest(u64),
    /// Game fetched
    #[success]
    GetGameByIdSuccess(Game),
    /// Fetch failed
    #[failure]
    GetGameByIdFailure(String),

    /// Search by title
    #[request]
    SearchGamesRequest(String),
    /// Matches fetched
    #[success]
    SearchGamesSuccess(Arc<Vec<Game>>),
    /// Search failed
    #[failure]
    SearchGamesFailure(String),

    /// Fetch one category
    #[request]
    GetGamesByCategoryRequest(u64),
    /// Category fetched
    #[success]
    GetGamesByCategorySuccess(Arc<Vec<Game>>),
    /// Fetch failed
    #[failure]
    GetGamesByCategoryFailure(String),

    /// Fetch the newest games
    #[request]
    GetLatestGamesRequest(u32),
    /// Newest games fetched
    #[success]
    GetLatestGamesSuccess(Arc<Vec<Game>>),
    /// Fetch failed
    #[failure]
    GetLatestGamesFailure(String),

    /// Fetch best sellers
    #[request]
    GetTopSellingGamesRequest(u32),
    /// Best sellers fetched
    #[success]
    GetTopSellingGamesSuccess(Arc<Vec<Game>>),
    /// Fetch failed
    #[failure]
    GetTopSellingGamesFailure(String),

    /// Fetch games on sale
    #[request]
    GetDiscountedGamesRequest(u32),
    /// Games on sale fetched
    #[success]
    GetDiscountedGamesSuccess(Arc<Vec<Game>>),
    /// Fetch failed
    #[failure]
    GetDiscountedGamesFailure(String),

    /// Fetch categories
    #[request]
    GetCategoriesRequest,
    /// Categories fetched
    #[success]
    GetCategoriesSuccess(Vec<Category>),
    /// Fetch failed
    #[failure]
    GetCategoriesFailure(String),

    /// Fetch developers
    #[request]
    GetDevelopersRequest,
    /// Developers fetched
    #[success]
    GetDevelopersSuccess(Vec<Developer>),
    /// Fetch failed
    #[failure]
    GetDevelopersFailure(String),

    /// Leave the details page
    ClearCurrentGame,
}

impl GamesAction {
    /// The game list carried by a list success, if this is one
    #[must_use]
    pub fn listed_games(&self) -> Option<&Arc<Vec<Game>>> {
        match self {
            Self::GetAllGamesSuccess(games)
            | Self::SearchGamesSuccess(games)
            | Self::GetGamesByCategorySuccess(games)
            | Self::GetLatestGamesSuccess(games)
            | Self::GetTopSellingGamesSuccess(games)
            | Self::GetDiscountedGamesSuccess(games) => Some(games),
            _ => None,
        }
    }
}

/// Reducer for [`GamesState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GamesReducer;

impl Reducer for GamesReducer {
    type State = GamesState;
    type Action = GamesAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut GamesState,
        action: GamesAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<GamesAction>; 4]> {
        state.status.track(&action);

        match action {
            GamesAction::GetAllGamesSuccess(games)
            | GamesAction::SearchGamesSuccess(games)
            | GamesAction::GetGamesByCategorySuccess(games)
            | GamesAction::GetLatestGamesSuccess(games)
            | GamesAction::GetTopSellingGamesSuccess(games)
            | GamesAction::GetDiscountedGamesSuccess(games) => state.games = games,
            GamesAction::GetGameByIdSuccess(game) => state.game = Some(game),
            GamesAction::GetCategoriesSuccess(categories) => state.categories = categories,
            GamesAction::GetDevelopersSuccess(developers) => state.developers = developers,
            GamesAction::ClearCurrentGame => state.game = None,
            _ => {},
        }

        smallvec![Effect::None]
    }
}
