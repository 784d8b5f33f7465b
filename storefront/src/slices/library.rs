//! Owned-games slice.

use crate::app::StorefrontEnvironment;
use crate::models::Library;
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;

/// Library state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryState {
    /// The fetched library
    pub library: Option<Library>,
    /// Loading/error flags
    pub status: RequestStatus,
}

/// Library actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "library"]
pub enum LibraryAction {
    /// Fetch a user's library
    #[request]
    GetLibraryRequest {
        /// Owner
        user_id: u64,
    },
    /// Library fetched
    #[success]
    GetLibrarySuccess(Library),
    /// Fetch failed
    #[failure]
    GetLibraryFailure(String),

    /// Add a game
    #[request]
    AddToLibraryRequest {
        /// Owner
        user_id: u64,
        /// Game to add
        game_id: u64,
    },
    /// Updated library
    #[success]
    AddToLibrarySuccess(Library),
    /// Add failed
    #[failure]
    AddToLibraryFailure(String),

    /// Remove a game
    #[request]
    RemoveFromLibraryRequest {
        /// Owner
        user_id: u64,
        /// Game to remove
        game_id: u64,
    },
    /// Re-fetched library after removal
    #[success]
    RemoveFromLibrarySuccess(Library),
    /// Removal failed
    #[failure]
    RemoveFromLibraryFailure(String),

    /// Forget the library locally, e.g. on logout
    ClearLibrary,
}

/// Reducer for [`LibraryState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryReducer;

impl Reducer for LibraryReducer {
    type State = LibraryState;
    type Action = LibraryAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut LibraryState,
        action: LibraryAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<LibraryAction>; 4]> {
        state.status.track(&action);

        match action {
            LibraryAction::GetLibrarySuccess(library)
            | LibraryAction::AddToLibrarySuccess(library)
            | LibraryAction::RemoveFromLibrarySuccess(library) => state.library = Some(library),
            LibraryAction::ClearLibrary => {
                state.library = None;
                state.status.error = None;
            },
            _ => {},
        }

        smallvec![Effect::None]
    }
}
