//! Backend service contracts and their implementations.
//!
//! Every operation returns a `'static` boxed future so sagas can move the
//! call into an effect. Implementations clone whatever they need (the HTTP
//! client, the fixture list) into the future.

pub mod client;
pub mod fixtures;
mod http;
mod mock;

pub use client::{ApiClient, BearerToken};
pub use http::{
    HttpAuthService, HttpCartService, HttpFavoritesService, HttpGameService, HttpLibraryService,
    HttpOrderService,
};
pub use mock::{MockGameService, StaticNewsService};

use crate::config::{ApiMode, StorefrontConfig};
use crate::error::ServiceError;
use crate::models::{
    AuthResponse, Category, Developer, Favorite, Game, Library, LoginRequest, News, Order,
    RegisterRequest, ShoppingCart, User, UserUpdate,
};
use futures::future::BoxFuture;
use junimo_core::SystemClock;
use std::sync::Arc;

/// Pending result of a service call.
pub type ServiceFuture<T> = BoxFuture<'static, Result<T, ServiceError>>;

/// Game catalog queries.
pub trait GameService: Send + Sync {
    /// One page of the full catalog
    fn get_all_games(&self, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>>;

    /// A single game
    fn get_game_by_id(&self, id: u64) -> ServiceFuture<Game>;

    /// Every game in a category
    fn get_games_by_category(&self, category_id: u64) -> ServiceFuture<Vec<Game>>;

    /// Best sellers
    fn get_top_selling_games(&self, limit: u32) -> ServiceFuture<Vec<Game>>;

    /// Games on sale
    fn get_discounted_games(&self, limit: u32) -> ServiceFuture<Vec<Game>>;

    /// Most recently added games
    fn get_latest_games(&self, limit: u32) -> ServiceFuture<Vec<Game>>;

    /// Title search
    fn search_games(&self, title: &str, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>>;

    /// All categories
    fn get_categories(&self) -> ServiceFuture<Vec<Category>>;

    /// All developers
    fn get_developers(&self) -> ServiceFuture<Vec<Developer>>;
}

/// Account operations.
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session
    fn login(&self, credentials: LoginRequest) -> ServiceFuture<AuthResponse>;

    /// Create an account and sign in
    fn register(&self, registration: RegisterRequest) -> ServiceFuture<AuthResponse>;

    /// Patch the profile of `user_id`
    fn update_user(&self, user_id: u64, update: UserUpdate) -> ServiceFuture<User>;
}

/// Shopping cart operations.
pub trait CartService: Send + Sync {
    /// The user's cart
    fn get_cart(&self, user_id: u64) -> ServiceFuture<ShoppingCart>;

    /// Add `quantity` copies of a game
    fn add_to_cart(&self, user_id: u64, game_id: u64, quantity: u32) -> ServiceFuture<ShoppingCart>;

    /// Drop a game from the cart
    fn remove_from_cart(&self, user_id: u64, game_id: u64) -> ServiceFuture<()>;

    /// Set the quantity of a cart line
    fn update_quantity(&self, user_id: u64, game_id: u64, quantity: u32) -> ServiceFuture<ShoppingCart>;

    /// Empty the cart
    fn clear_cart(&self, user_id: u64) -> ServiceFuture<()>;
}

/// Favorites list operations.
pub trait FavoritesService: Send + Sync {
    /// The user's favorites
    fn get_favorites(&self, user_id: u64) -> ServiceFuture<Favorite>;

    /// Favorite a game
    fn add_to_favorites(&self, user_id: u64, game_id: u64) -> ServiceFuture<Favorite>;

    /// Unfavorite a game
    fn remove_from_favorites(&self, user_id: u64, game_id: u64) -> ServiceFuture<()>;

    /// Drop every favorite
    fn clear_favorites(&self, user_id: u64) -> ServiceFuture<()>;
}

/// Owned-games operations.
pub trait LibraryService: Send + Sync {
    /// The user's library
    fn get_library(&self, user_id: u64) -> ServiceFuture<Library>;

    /// Add a game to the library
    fn add_to_library(&self, user_id: u64, game_id: u64) -> ServiceFuture<Library>;

    /// Remove a game from the library
    fn remove_from_library(&self, user_id: u64, game_id: u64) -> ServiceFuture<()>;
}

/// Checkout and order history.
pub trait OrderService: Send + Sync {
    /// Turn the user's cart into an order
    fn create_order(&self, user_id: u64) -> ServiceFuture<Order>;

    /// A single order
    fn get_order_by_id(&self, order_id: u64) -> ServiceFuture<Order>;

    /// Every order of a user
    fn get_user_orders(&self, user_id: u64) -> ServiceFuture<Vec<Order>>;
}

/// News feed.
pub trait NewsService: Send + Sync {
    /// Every post
    fn get_all_news(&self) -> ServiceFuture<Vec<News>>;

    /// One post, `None` when the id is unknown
    fn get_news_by_id(&self, id: u64) -> ServiceFuture<Option<News>>;

    /// Posts of one section
    fn get_news_by_category(&self, category: &str) -> ServiceFuture<Vec<News>>;
}

/// The full set of services the sagas call.
#[derive(Clone)]
pub struct Services {
    /// Game catalog
    pub games: Arc<dyn GameService>,
    /// Accounts
    pub auth: Arc<dyn AuthService>,
    /// Cart
    pub cart: Arc<dyn CartService>,
    /// Favorites
    pub favorites: Arc<dyn FavoritesService>,
    /// Library
    pub library: Arc<dyn LibraryService>,
    /// Orders
    pub orders: Arc<dyn OrderService>,
    /// News
    pub news: Arc<dyn NewsService>,
}

impl Services {
    /// Wire services for `config`, sharing `token` with every HTTP service.
    ///
    /// In [`ApiMode::Mocks`] only the game catalog is fixture-backed; news is
    /// fixture-backed in every mode.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &StorefrontConfig, token: BearerToken) -> Result<Self, ServiceError> {
        let client = ApiClient::new(&config.api.base_url, config.api.timeout(), token)?;
        let latency = config.api.mock_latency();

        let games: Arc<dyn GameService> = match config.api.mode {
            ApiMode::Api => Arc::new(HttpGameService::new(client.clone())),
            ApiMode::Mocks => Arc::new(MockGameService::new(latency)),
        };

        Ok(Self {
            games,
            auth: Arc::new(HttpAuthService::new(client.clone())),
            cart: Arc::new(HttpCartService::new(client.clone())),
            favorites: Arc::new(HttpFavoritesService::new(client.clone())),
            library: Arc::new(HttpLibraryService::new(client.clone())),
            orders: Arc::new(HttpOrderService::new(client)),
            news: Arc::new(StaticNewsService::new(Arc::new(SystemClock), latency)),
        })
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
