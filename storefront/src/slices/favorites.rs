//! Favorites slice.

use crate::app::StorefrontEnvironment;
use crate::models::Favorite;
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;

/// Favorites state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    /// The fetched list
    pub favorites: Option<Favorite>,
    /// Loading/error flags
    pub status: RequestStatus,
}

/// Favorites actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "favorites"]
pub enum FavoritesAction {
    /// Fetch a user's favorites
    #[request]
    GetFavoritesRequest {
        /// Owner
        user_id: u64,
    },
    /// Favorites fetched
    #[success]
    GetFavoritesSuccess(Favorite),
    /// Fetch failed
    #[failure]
    GetFavoritesFailure(String),

    /// Favorite a game
    #[request]
    AddToFavoritesRequest {
        /// Owner
        user_id: u64,
        /// Game to favorite
        game_id: u64,
    },
    /// Updated list
    #[success]
    AddToFavoritesSuccess(Favorite),
    /// Add failed
    #[failure]
    AddToFavoritesFailure(String),

    /// Unfavorite a game
    #[request]
    RemoveFromFavoritesRequest {
        /// Owner
        user_id: u64,
        /// Game to unfavorite
        game_id: u64,
    },
    /// Re-fetched list after removal
    #[success]
    RemoveFromFavoritesSuccess(Favorite),
    /// Removal failed
    #[failure]
    RemoveFromFavoritesFailure(String),

    /// Drop every favorite
    #[request]
    ClearFavoritesRequest {
        /// Owner
        user_id: u64,
    },
    /// List cleared
    #[success]
    ClearFavoritesSuccess,
    /// Clearing failed
    #[failure]
    ClearFavoritesFailure(String),
}

/// Reducer for [`FavoritesState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Action = FavoritesAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut FavoritesState,
        action: FavoritesAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<FavoritesAction>; 4]> {
        state.status.track(&action);

        match action {
            FavoritesAction::GetFavoritesSuccess(favorites)
            | FavoritesAction::AddToFavoritesSuccess(favorites)
            | FavoritesAction::RemoveFromFavoritesSuccess(favorites) => {
                state.favorites = Some(favorites);
            },
            FavoritesAction::ClearFavoritesSuccess => state.favorites = None,
            _ => {},
        }

        smallvec![Effect::None]
    }
}
