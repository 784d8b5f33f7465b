use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::slices::FavoritesAction;
use junimo_core::Effect;
use std::sync::Arc;

pub(super) fn watch(action: &FavoritesAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    let favorites = Arc::clone(&env.services.favorites);

    match *action {
        FavoritesAction::GetFavoritesRequest { user_id } => {
            take_latest(action, AppAction::Favorites, async move {
                settle(
                    favorites.get_favorites(user_id).await,
                    FavoritesAction::GetFavoritesSuccess,
                    FavoritesAction::GetFavoritesFailure,
                    "Failed to fetch favorites",
                )
            })
        },
        FavoritesAction::AddToFavoritesRequest { user_id, game_id } => {
            take_latest(action, AppAction::Favorites, async move {
                settle(
                    favorites.add_to_favorites(user_id, game_id).await,
                    FavoritesAction::AddToFavoritesSuccess,
                    FavoritesAction::AddToFavoritesFailure,
                    "Failed to add to favorites",
                )
            })
        },
        FavoritesAction::RemoveFromFavoritesRequest { user_id, game_id } => {
            take_latest(action, AppAction::Favorites, async move {
                let refreshed = match favorites.remove_from_favorites(user_id, game_id).await {
                    Ok(()) => favorites.get_favorites(user_id).await,
                    Err(e) => Err(e),
                };
                settle(
                    refreshed,
                    FavoritesAction::RemoveFromFavoritesSuccess,
                    FavoritesAction::RemoveFromFavoritesFailure,
                    "Failed to remove from favorites",
                )
            })
        },
        FavoritesAction::ClearFavoritesRequest { user_id } => {
            take_latest(action, AppAction::Favorites, async move {
                settle(
                    favorites.clear_favorites(user_id).await,
                    |()| FavoritesAction::ClearFavoritesSuccess,
                    FavoritesAction::ClearFavoritesFailure,
                    "Failed to clear favorites",
                )
            })
        },
        _ => Effect::None,
    }
}
