//! Effect runners for every slice.
//!
//! A saga watches request actions and answers each with a cancellable
//! effect keyed by the request's action type, so a newer request of the
//! same kind supersedes the older one. The worker calls a service and feeds
//! back the matching success or failure action.

mod auth;
mod cart;
mod favorites;
mod games;
mod library;
mod news;
mod orders;
mod search;

pub use search::DEBOUNCE_ID;

use crate::app::{AppAction, AppState, StorefrontEnvironment};
use crate::error::ServiceError;
use junimo_core::slice::Lifecycle;
use junimo_core::{Effect, Reducer, SmallVec, async_effect, smallvec};
use std::future::Future;

/// Run `work` as the latest effect of `request`'s kind.
pub(crate) fn take_latest<L, F>(request: &L, lift: fn(L) -> AppAction, work: F) -> Effect<AppAction>
where
    L: Lifecycle + 'static,
    F: Future<Output = L> + Send + 'static,
{
    tracing::debug!(action = request.action_type(), "Starting latest");
    async_effect!(Some(lift(work.await))).cancellable(request.effect_id())
}

/// Turn a service result into the slice's success or failure action.
pub(crate) fn settle<T, L>(
    result: Result<T, ServiceError>,
    success: impl FnOnce(T) -> L,
    failure: fn(String) -> L,
    fallback: &'static str,
) -> L {
    match result {
        Ok(value) => success(value),
        Err(error) => {
            tracing::warn!(%error, fallback, "Service call failed");
            metrics::counter!("storefront.service.failures").increment(1);
            failure(error.message_or(fallback))
        },
    }
}

/// Reducer running every saga; it never touches state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sagas;

impl Reducer for Sagas {
    type State = AppState;
    type Action = AppAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        _state: &mut AppState,
        action: AppAction,
        env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<AppAction>; 4]> {
        let effect = match &action {
            AppAction::Auth(action) => auth::watch(action, env),
            AppAction::Games(action) => games::watch(action, env),
            AppAction::Cart(action) => cart::watch(action, env),
            AppAction::Favorites(action) => favorites::watch(action, env),
            AppAction::Library(action) => library::watch(action, env),
            AppAction::Orders(action) => orders::watch(action, env),
            AppAction::News(action) => news::watch(action, env),
            AppAction::Search(action) => search::watch(action, env),
            AppAction::Catalog(_) => Effect::None,
        };
        smallvec![effect]
    }
}
