//! # Junimo Storefront
//!
//! Client-side state layer of the Junimo game marketplace.
//!
//! - [`slices`]: one reducer per domain (auth, games, cart, favorites,
//!   library, orders, news) plus the search dropdown and catalog filter.
//! - [`sagas`]: the effect runner. Every request action starts a cancellable
//!   service call keyed by its action type, so the latest request wins.
//! - [`selectors`]: read-only projections, including the memoized
//!   [`CatalogView`](selectors::CatalogView).
//! - [`services`]: HTTP clients for the backend and an in-memory catalog for
//!   offline use.
//! - [`session`]: persisted login, restored at startup.
//!
//! ## Example
//!
//! ```no_run
//! use junimo_runtime::StoreConfig;
//! use junimo_storefront::{AppAction, GamesAction, StorefrontConfig, StorefrontEnvironment, build_store};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorefrontConfig::from_env()?;
//! let store = build_store(StorefrontEnvironment::from_config(&config)?, StoreConfig::default());
//!
//! store
//!     .send_and_wait_for(
//!         AppAction::Games(GamesAction::GetAllGamesRequest { limit: None, offset: None }),
//!         |a| matches!(a, AppAction::Games(GamesAction::GetAllGamesSuccess(_) | GamesAction::GetAllGamesFailure(_))),
//!         Duration::from_secs(15),
//!     )
//!     .await?;
//!
//! let titles = store.state(|s| s.games.games.iter().map(|g| g.title.clone()).collect::<Vec<_>>()).await;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod sagas;
pub mod selectors;
pub mod services;
pub mod session;
pub mod slices;

pub use app::{AppAction, AppState, StorefrontEnvironment, StorefrontStore, app_reducer, build_store};
pub use config::{ApiMode, StorefrontConfig};
pub use error::{ServiceError, SessionError};
pub use slices::{
    AuthAction, CartAction, CatalogAction, FavoritesAction, GamesAction, LibraryAction, NewsAction,
    OrdersAction, SearchAction,
};
