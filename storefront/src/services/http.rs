//! HTTP implementations of the service traits.

use super::{
    ApiClient, AuthService, CartService, FavoritesService, GameService, LibraryService, OrderService,
    ServiceFuture,
};
use crate::models::{
    AuthResponse, Category, Developer, Favorite, Game, Library, LoginRequest, Order,
    RegisterRequest, ShoppingCart, User, UserUpdate,
};
use futures::FutureExt;
use reqwest::Method;
use serde_json::json;

const NO_QUERY: &[(&str, u32)] = &[];

/// Game catalog over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGameService {
    client: ApiClient,
}

impl HttpGameService {
    /// Create a game service using `client`
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn list(&self, path: &'static str, query: Vec<(&'static str, String)>) -> ServiceFuture<Vec<Game>> {
        let client = self.client.clone();
        async move { client.get(path, &query).await }.boxed()
    }
}

impl GameService for HttpGameService {
    fn get_all_games(&self, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>> {
        self.list(
            "/games",
            vec![("limit", limit.to_string()), ("offset", offset.to_string())],
        )
    }

    fn get_game_by_id(&self, id: u64) -> ServiceFuture<Game> {
        let client = self.client.clone();
        async move { client.get(&format!("/games/{id}"), NO_QUERY).await }.boxed()
    }

    fn get_games_by_category(&self, category_id: u64) -> ServiceFuture<Vec<Game>> {
        let client = self.client.clone();
        async move { client.get(&format!("/games/category/{category_id}"), NO_QUERY).await }.boxed()
    }

    fn get_top_selling_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        self.list("/games/top-selling", vec![("limit", limit.to_string())])
    }

    fn get_discounted_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        self.list("/games/discounted", vec![("limit", limit.to_string())])
    }

    fn get_latest_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        self.list("/games/latest", vec![("limit", limit.to_string())])
    }

    fn search_games(&self, title: &str, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>> {
        self.list(
            "/games/search",
            vec![
                ("title", title.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
    }

    fn get_categories(&self) -> ServiceFuture<Vec<Category>> {
        let client = self.client.clone();
        async move { client.get("/categories", NO_QUERY).await }.boxed()
    }

    fn get_developers(&self) -> ServiceFuture<Vec<Developer>> {
        let client = self.client.clone();
        async move { client.get("/developers", NO_QUERY).await }.boxed()
    }
}

/// Accounts over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    /// Create an auth service using `client`
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl AuthService for HttpAuthService {
    fn login(&self, credentials: LoginRequest) -> ServiceFuture<AuthResponse> {
        let client = self.client.clone();
        async move { client.send_json(Method::POST, "/auth/login", &credentials).await }.boxed()
    }

    fn register(&self, registration: RegisterRequest) -> ServiceFuture<AuthResponse> {
        let client = self.client.clone();
        async move { client.send_json(Method::POST, "/auth/signup", &registration).await }.boxed()
    }

    fn update_user(&self, user_id: u64, update: UserUpdate) -> ServiceFuture<User> {
        let client = self.client.clone();
        async move {
            client
                .send_json(Method::PATCH, &format!("/users/{user_id}/"), &update)
                .await
        }
        .boxed()
    }
}

/// Cart over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCartService {
    client: ApiClient,
}

impl HttpCartService {
    /// Create a cart service using `client`
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CartService for HttpCartService {
    fn get_cart(&self, user_id: u64) -> ServiceFuture<ShoppingCart> {
        let client = self.client.clone();
        async move { client.get(&format!("/cart/{user_id}/"), NO_QUERY).await }.boxed()
    }

    fn add_to_cart(&self, user_id: u64, game_id: u64, quantity: u32) -> ServiceFuture<ShoppingCart> {
        let client = self.client.clone();
        async move {
            client
                .send_json(
                    Method::POST,
                    &format!("/cart/{user_id}/add/{game_id}/"),
                    &json!({ "quantity": quantity }),
                )
                .await
        }
        .boxed()
    }

    fn remove_from_cart(&self, user_id: u64, game_id: u64) -> ServiceFuture<()> {
        let client = self.client.clone();
        async move {
            client
                .execute(Method::DELETE, &format!("/cart/{user_id}/remove/{game_id}/"))
                .await
        }
        .boxed()
    }

    fn update_quantity(&self, user_id: u64, game_id: u64, quantity: u32) -> ServiceFuture<ShoppingCart> {
        let client = self.client.clone();
        async move {
            client
                .send_json(
                    Method::PATCH,
                    &format!("/cart/{user_id}/update/{game_id}/"),
                    &json!({ "quantity": quantity }),
                )
                .await
        }
        .boxed()
    }

    fn clear_cart(&self, user_id: u64) -> ServiceFuture<()> {
        let client = self.client.clone();
        async move { client.execute(Method::DELETE, &format!("/cart/{user_id}/clear/")).await }.boxed()
    }
}

/// Favorites over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFavoritesService {
    client: ApiClient,
}

impl HttpFavoritesService {
    /// Create a favorites service using `client`
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl FavoritesService for HttpFavoritesService {
    fn get_favorites(&self, user_id: u64) -> ServiceFuture<Favorite> {
        let client = self.client.clone();
        async move { client.get(&format!("/favorite/{user_id}/"), NO_QUERY).await }.boxed()
    }

    fn add_to_favorites(&self, user_id: u64, game_id: u64) -> ServiceFuture<Favorite> {
        let client = self.client.clone();
        async move {
            client
                .send_empty(Method::POST, &format!("/favorite/{user_id}/add/{game_id}/"))
                .await
        }
        .boxed()
    }

    fn remove_from_favorites(&self, user_id: u64, game_id: u64) -> ServiceFuture<()> {
        let client = self.client.clone();
        async move {
            client
                .execute(Method::DELETE, &format!("/favorite/{user_id}/remove/{game_id}/"))
                .await
        }
        .boxed()
    }

    fn clear_favorites(&self, user_id: u64) -> ServiceFuture<()> {
        let client = self.client.clone();
        async move {
            client
                .execute(Method::DELETE, &format!("/favorite/{user_id}/clear/"))
                .await
        }
        .boxed()
    }
}

/// Library over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLibraryService {
    client: ApiClient,
}

impl HttpLibraryService {
    /// Create a library service using `client`
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl LibraryService for HttpLibraryService {
    fn get_library(&self, user_id: u64) -> ServiceFuture<Library> {
        let client = self.client.clone();
        async move { client.get(&format!("/library/{user_id}/"), NO_QUERY).await }.boxed()
    }

    fn add_to_library(&self, user_id: u64, game_id: u64) -> ServiceFuture<Library> {
        let client = self.client.clone();
        async move {
            client
                .send_empty(Method::POST, &format!("/library/{user_id}/add/{game_id}/"))
                .await
        }
        .boxed()
    }

    fn remove_from_library(&self, user_id: u64, game_id: u64) -> ServiceFuture<()> {
        let client = self.client.clone();
        async move {
            client
                .execute(Method::DELETE, &format!("/library/{user_id}/remove/{game_id}/"))
                .await
        }
        .boxed()
    }
}

/// Orders over HTTP.
#[derive(Debug, Clone)]
pub struct HttpOrderService {
    client: ApiClient,
}

impl HttpOrderService {
    /// Create an order service using `client`
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl OrderService for HttpOrderService {
    fn create_order(&self, user_id: u64) -> ServiceFuture<Order> {
        let client = self.client.clone();
        async move {
            client
                .send_empty(Method::POST, &format!("/orders/{user_id}/create/"))
                .await
        }
        .boxed()
    }

    fn get_order_by_id(&self, order_id: u64) -> ServiceFuture<Order> {
        let client = self.client.clone();
        async move { client.get(&format!("/orders/{order_id}/"), NO_QUERY).await }.boxed()
    }

    fn get_user_orders(&self, user_id: u64) -> ServiceFuture<Vec<Order>> {
        let client = self.client.clone();
        async move { client.get(&format!("/orders/user/{user_id}/"), NO_QUERY).await }.boxed()
    }
}
