//! Per-domain state slices.
//!
//! Every lifecycle slice embeds a [`RequestStatus`](junimo_core::slice::RequestStatus)
//! and lets it handle the request/success/failure transitions; the reducers
//! here only replace data.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod games;
pub mod library;
pub mod news;
pub mod orders;
pub mod search;

pub use auth::{AuthAction, AuthReducer, AuthState};
pub use cart::{CartAction, CartReducer, CartState};
pub use catalog::{CatalogAction, CatalogReducer, CatalogState};
pub use favorites::{FavoritesAction, FavoritesReducer, FavoritesState};
pub use games::{GamesAction, GamesReducer, GamesState};
pub use library::{LibraryAction, LibraryReducer, LibraryState};
pub use news::{NewsAction, NewsReducer, NewsState};
pub use orders::{OrdersAction, OrdersReducer, OrdersState};
pub use search::{SearchAction, SearchReducer, SearchState};
