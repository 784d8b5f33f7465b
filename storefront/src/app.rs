//! Application state, actions and store wiring.

use crate::config::{SearchConfig, StorefrontConfig};
use crate::error::ServiceError;
use crate::sagas::Sagas;
use crate::services::{BearerToken, Services};
use crate::session::{FileSessionStore, Session};
use crate::slices::{
    AuthAction, AuthReducer, AuthState, CartAction, CartReducer, CartState, CatalogAction,
    CatalogReducer, CatalogState, FavoritesAction, FavoritesReducer, FavoritesState, GamesAction,
    GamesReducer, GamesState, LibraryAction, LibraryReducer, LibraryState, NewsAction, NewsReducer,
    NewsState, OrdersAction, OrdersReducer, OrdersState, SearchAction, SearchReducer, SearchState,
};
use junimo_core::Reducer;
use junimo_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use junimo_runtime::{Store, StoreConfig};
use std::sync::Arc;

/// Whole-application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Signed-in user
    pub auth: AuthState,
    /// Catalog data
    pub games: GamesState,
    /// Shopping cart
    pub cart: CartState,
    /// Favorites
    pub favorites: FavoritesState,
    /// Owned games
    pub library: LibraryState,
    /// Order history
    pub orders: OrdersState,
    /// News feed
    pub news: NewsState,
    /// Search dropdown
    pub search: SearchState,
    /// Catalog filter
    pub catalog: CatalogState,
}

/// Every action the store accepts, tagged by slice
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Auth slice
    Auth(AuthAction),
    /// Games slice
    Games(GamesAction),
    /// Cart slice
    Cart(CartAction),
    /// Favorites slice
    Favorites(FavoritesAction),
    /// Library slice
    Library(LibraryAction),
    /// Orders slice
    Orders(OrdersAction),
    /// News slice
    News(NewsAction),
    /// Search slice
    Search(SearchAction),
    /// Catalog filter slice
    Catalog(CatalogAction),
}

macro_rules! impl_from_slice_action {
    ($($variant:ident($action:ty)),* $(,)?) => {
        $(
            impl From<$action> for AppAction {
                fn from(action: $action) -> Self {
                    Self::$variant(action)
                }
            }
        )*
    };
}

impl_from_slice_action!(
    Auth(AuthAction),
    Games(GamesAction),
    Cart(CartAction),
    Favorites(FavoritesAction),
    Library(LibraryAction),
    Orders(OrdersAction),
    News(NewsAction),
    Search(SearchAction),
    Catalog(CatalogAction),
);

/// Dependencies injected into reducers and sagas
#[derive(Debug, Clone)]
pub struct StorefrontEnvironment {
    /// Backend services
    pub services: Services,
    /// Persisted auth session
    pub session: Session,
    /// Token shared with the HTTP services
    pub token: BearerToken,
    /// Search tuning
    pub search: SearchConfig,
}

impl StorefrontEnvironment {
    /// Environment for `config`: file-backed session, services per API mode.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, ServiceError> {
        let token = BearerToken::default();
        let services = Services::from_config(config, token.clone())?;
        Ok(Self {
            services,
            session: Session::new(Arc::new(FileSessionStore::new(&config.session_dir))),
            token,
            search: config.search,
        })
    }
}

type BoxedReducer =
    Box<dyn Reducer<State = AppState, Action = AppAction, Environment = StorefrontEnvironment> + Send + Sync>;

/// The application reducer type
pub type AppReducer = CombinedReducer<AppState, AppAction, StorefrontEnvironment>;

/// Store running the storefront
pub type StorefrontStore = Store<AppState, AppAction, StorefrontEnvironment, AppReducer>;

macro_rules! scoped {
    ($reducer:expr, $field:ident: $state:ty, $variant:ident: $action:ty) => {{
        fn lens(state: &mut AppState) -> &mut $state {
            &mut state.$field
        }
        fn to_local(action: AppAction) -> Option<$action> {
            match action {
                AppAction::$variant(action) => Some(action),
                _ => None,
            }
        }
        let boxed: BoxedReducer = Box::new(scope_reducer($reducer, lens, to_local, AppAction::$variant));
        boxed
    }};
}

fn catalog_lens(state: &mut AppState) -> &mut CatalogState {
    &mut state.catalog
}

fn catalog_action(action: AppAction) -> Option<CatalogAction> {
    match action {
        AppAction::Catalog(action) => Some(action),
        AppAction::Games(games) => games
            .listed_games()
            .map(|list| CatalogAction::GamesLoaded(Arc::clone(list))),
        _ => None,
    }
}

/// Every slice reducer scoped into [`AppState`], followed by the sagas.
#[must_use]
pub fn app_reducer() -> AppReducer {
    let catalog: BoxedReducer = Box::new(scope_reducer(
        CatalogReducer,
        catalog_lens,
        catalog_action,
        AppAction::Catalog,
    ));

    combine_reducers(vec![
        scoped!(AuthReducer, auth: AuthState, Auth: AuthAction),
        scoped!(GamesReducer, games: GamesState, Games: GamesAction),
        scoped!(CartReducer, cart: CartState, Cart: CartAction),
        scoped!(FavoritesReducer, favorites: FavoritesState, Favorites: FavoritesAction),
        scoped!(LibraryReducer, library: LibraryState, Library: LibraryAction),
        scoped!(OrdersReducer, orders: OrdersState, Orders: OrdersAction),
        scoped!(NewsReducer, news: NewsState, News: NewsAction),
        scoped!(SearchReducer, search: SearchState, Search: SearchAction),
        catalog,
        Box::new(Sagas),
    ])
}

/// Build the store, restoring the persisted session into `auth.user`.
#[must_use]
pub fn build_store(env: StorefrontEnvironment, config: StoreConfig) -> StorefrontStore {
    let mut state = AppState::default();
    state.auth.user = env.session.rehydrate(&env.token);
    Store::with_config(state, app_reducer(), env, config)
}
