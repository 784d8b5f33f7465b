use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::slices::LibraryAction;
use junimo_core::Effect;
use std::sync::Arc;

pub(super) fn watch(action: &LibraryAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    let library = Arc::clone(&env.services.library);

    match *action {
        LibraryAction::GetLibraryRequest { user_id } => {
            take_latest(action, AppAction::Library, async move {
                settle(
                    library.get_library(user_id).await,
                    LibraryAction::GetLibrarySuccess,
                    LibraryAction::GetLibraryFailure,
                    "Failed to fetch library",
                )
            })
        },
        LibraryAction::AddToLibraryRequest { user_id, game_id } => {
            take_latest(action, AppAction::Library, async move {
                settle(
                    library.add_to_library(user_id, game_id).await,
                    LibraryAction::AddToLibrarySuccess,
                    LibraryAction::AddToLibraryFailure,
                    "Failed to add to library",
                )
            })
        },
        LibraryAction::RemoveFromLibraryRequest { user_id, game_id } => {
            take_latest(action, AppAction::Library, async move {
                let refreshed = match library.remove_from_library(user_id, game_id).await {
                    Ok(()) => library.get_library(user_id).await,
                    Err(e) => Err(e),
                };
                settle(
                    refreshed,
                    LibraryAction::RemoveFromLibrarySuccess,
                    LibraryAction::RemoveFromLibraryFailure,
                    "Failed to remove from library",
                )
            })
        },
        _ => Effect::None,
    }
}
