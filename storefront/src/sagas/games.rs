use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::error::ServiceError;
use crate::models::Game;
use crate::services::ServiceFuture;
use crate::slices::GamesAction;
use junimo_core::Effect;
use std::sync::Arc;

const DEFAULT_LIMIT: u32 = 10;

/// Run a list fetch, sharing the result behind an `Arc`.
fn list(
    action: &GamesAction,
    fetch: ServiceFuture<Vec<Game>>,
    success: fn(Arc<Vec<Game>>) -> GamesAction,
    failure: fn(String) -> GamesAction,
    fallback: &'static str,
) -> Effect<AppAction> {
    take_latest(action, AppAction::Games, async move {
        let result: Result<Vec<Game>, ServiceError> = fetch.await;
        settle(result.map(Arc::new), success, failure, fallback)
    })
}

pub(super) fn watch(action: &GamesAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    let games = &env.services.games;

    match action {
        GamesAction::GetAllGamesRequest { limit, offset } => list(
            action,
            games.get_all_games(limit.unwrap_or(DEFAULT_LIMIT), offset.unwrap_or(0)),
            GamesAction::GetAllGamesSuccess,
            GamesAction::GetAllGamesFailure,
            "Failed to fetch games",
        ),
        GamesAction::GetGameByIdRequest(id) => {
            let fetch = games.get_game_by_id(*id);
            take_latest(action, AppAction::Games, async move {
                settle(
                    fetch.await,
                    GamesAction::GetGameByIdSuccess,
                    GamesAction::GetGameByIdFailure,
                    "Failed to fetch game details",
                )
            })
        },
        GamesAction::SearchGamesRequest(title) => list(
            action,
            games.search_games(title, DEFAULT_LIMIT, 0),
            GamesAction::SearchGamesSuccess,
            GamesAction::SearchGamesFailure,
            "Failed to search games",
        ),
        GamesAction::GetGamesByCategoryRequest(category_id) => list(
            action,
            games.get_games_by_category(*category_id),
            GamesAction::GetGamesByCategorySuccess,
            GamesAction::GetGamesByCategoryFailure,
            "Failed to fetch games by category",
        ),
        GamesAction::GetLatestGamesRequest(limit) => list(
            action,
            games.get_latest_games(*limit),
            GamesAction::GetLatestGamesSuccess,
            GamesAction::GetLatestGamesFailure,
            "Failed to fetch latest games",
        ),
        GamesAction::GetTopSellingGamesRequest(limit) => list(
            action,
            games.get_top_selling_games(*limit),
            GamesAction::GetTopSellingGamesSuccess,
            GamesAction::GetTopSellingGamesFailure,
            "Failed to fetch top selling games",
        ),
        GamesAction::GetDiscountedGamesRequest(limit) => list(
            action,
            games.get_discounted_games(*limit),
            GamesAction::GetDiscountedGamesSuccess,
            GamesAction::GetDiscountedGamesFailure,
            "Failed to fetch discounted games",
        ),
        GamesAction::GetCategoriesRequest => {
            let fetch = games.get_categories();
            take_latest(action, AppAction::Games, async move {
                settle(
                    fetch.await,
                    GamesAction::GetCategoriesSuccess,
                    GamesAction::GetCategoriesFailure,
                    "Failed to fetch categories",
                )
            })
        },
        GamesAction::GetDevelopersRequest => {
            let fetch = games.get_developers();
            take_latest(action, AppAction::Games, async move {
                settle(
                    fetch.await,
                    GamesAction::GetDevelopersSuccess,
                    GamesAction::GetDevelopersFailure,
                    "Failed to fetch developers",
                )
            })
        },
        _ => Effect::None,
    }
}
