use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::slices::{SearchAction, search::query_len};
use junimo_core::{Effect, EffectId, delay};

/// Cancellation id of the pending debounce timer
pub const DEBOUNCE_ID: &str = "search/debounce";

/// Cancellation id of the in-flight search request
const REQUEST_ID: &str = "search/SearchRequest";

fn cancel_pending() -> Effect<AppAction> {
    Effect::Parallel(vec![
        Effect::Cancel(EffectId::from(DEBOUNCE_ID)),
        Effect::Cancel(EffectId::from(REQUEST_ID)),
    ])
}

pub(super) fn watch(action: &SearchAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    match action {
        SearchAction::QueryChanged(query) => {
            if query_len(query) < env.search.min_chars {
                return cancel_pending();
            }
            let request = SearchAction::SearchRequest {
                query: query.trim().to_owned(),
            };
            Effect::Parallel(vec![
                Effect::Cancel(EffectId::from(REQUEST_ID)),
                delay! {
                    duration: env.search.debounce(),
                    action: AppAction::Search(request)
                }
                .cancellable(DEBOUNCE_ID),
            ])
        },
        SearchAction::SearchRequest { query } => {
            let query = query.clone();
            let fetch = env.services.games.search_games(&query, env.search.limit, 0);
            take_latest(action, AppAction::Search, async move {
                settle(
                    fetch.await,
                    |results| SearchAction::SearchSuccess { query, results },
                    SearchAction::SearchFailure,
                    "Failed to search games",
                )
            })
        },
        SearchAction::Clear => cancel_pending(),
        _ => Effect::None,
    }
}
