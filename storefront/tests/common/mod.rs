//! In-memory services and environment for the integration suites.

#![allow(dead_code)] // each suite uses a subset
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use futures::FutureExt;
use junimo_runtime::StoreConfig;
use junimo_storefront::config::SearchConfig;
use junimo_storefront::models::{
    AuthResponse, CartItem, Category, Developer, Favorite, FavoriteItem, Game, Library, LibraryItem,
    LoginRequest, Order, OrderItem, RegisterRequest, Role, ShoppingCart, User, UserUpdate,
};
use junimo_storefront::services::{
    AuthService, BearerToken, CartService, FavoritesService, GameService, LibraryService,
    OrderService, ServiceFuture, Services, StaticNewsService, fixtures,
};
use junimo_storefront::session::Session;
use junimo_storefront::{ServiceError, StorefrontEnvironment, StorefrontStore, build_store};
use junimo_testing::{Gate, test_clock};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PASSWORD: &str = "secret";

pub fn sample_user() -> User {
    User {
        id: 7,
        name: "Alex".into(),
        second_name: "Rivera".into(),
        third_name: None,
        email: "alex@example.com".into(),
        phone_number: "+10000000000".into(),
        payment_info: Some("visa-4242".into()),
        role_id: 2,
        role: Role {
            id: 2,
            kind: "user".into(),
            description: "Customer".into(),
        },
        token: None,
        refresh_token: None,
    }
}

pub fn game(id: u64) -> Game {
    fixtures::games().into_iter().find(|g| g.id == id).unwrap()
}

fn answer<T: Send + 'static>(failure: &Mutex<Option<ServiceError>>, value: T) -> ServiceFuture<T> {
    let result = match failure.lock().unwrap().clone() {
        Some(error) => Err(error),
        None => Ok(value),
    };
    async move { result }.boxed()
}

/// Catalog backed by the fixture games, with per-id holds and recorded calls.
#[derive(Default)]
pub struct FakeGames {
    calls: Mutex<Vec<String>>,
    held: Mutex<HashMap<u64, Gate>>,
    failure: Mutex<Option<ServiceError>>,
}

impl FakeGames {
    /// `get_game_by_id(id)` waits for the returned gate
    pub fn hold(&self, id: u64) -> Gate {
        let gate = Gate::new();
        self.held.lock().unwrap().insert(id, gate.clone());
        gate
    }

    pub fn fail_with(&self, error: ServiceError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn list(&self, call: String, games: Vec<Game>) -> ServiceFuture<Vec<Game>> {
        self.record(call);
        answer(&self.failure, games)
    }
}

impl GameService for FakeGames {
    fn get_all_games(&self, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>> {
        let page = fixtures::games()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        self.list(format!("get_all_games({limit},{offset})"), page)
    }

    fn get_game_by_id(&self, id: u64) -> ServiceFuture<Game> {
        self.record(format!("get_game_by_id({id})"));
        let gate = self.held.lock().unwrap().get(&id).cloned();
        let result = match fixtures::games().into_iter().find(|g| g.id == id) {
            Some(game) => answer(&self.failure, game),
            None => async move { Err(ServiceError::NotFound(format!("game {id}"))) }.boxed(),
        };
        async move {
            if let Some(gate) = gate {
                gate.wait().await;
            }
            result.await
        }
        .boxed()
    }

    fn get_games_by_category(&self, category_id: u64) -> ServiceFuture<Vec<Game>> {
        let games = fixtures::games()
            .into_iter()
            .filter(|g| g.category_id == category_id)
            .collect();
        self.list(format!("get_games_by_category({category_id})"), games)
    }

    fn get_top_selling_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        let games = fixtures::games().into_iter().take(limit as usize).collect();
        self.list(format!("get_top_selling_games({limit})"), games)
    }

    fn get_discounted_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        let games = fixtures::games().into_iter().take(limit as usize).collect();
        self.list(format!("get_discounted_games({limit})"), games)
    }

    fn get_latest_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        let games = fixtures::games().into_iter().rev().take(limit as usize).collect();
        self.list(format!("get_latest_games({limit})"), games)
    }

    fn search_games(&self, title: &str, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>> {
        let needle = title.to_lowercase();
        let games = fixtures::games()
            .into_iter()
            .filter(|g| g.title.to_lowercase().contains(&needle))
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        self.list(format!("search_games({title},{limit},{offset})"), games)
    }

    fn get_categories(&self) -> ServiceFuture<Vec<Category>> {
        self.record("get_categories".into());
        answer(&self.failure, fixtures::categories())
    }

    fn get_developers(&self) -> ServiceFuture<Vec<Developer>> {
        self.record("get_developers".into());
        answer(&self.failure, fixtures::developers())
    }
}

/// Accounts: any email signs in with [`PASSWORD`]; logins can be held per email.
#[derive(Default)]
pub struct FakeAuth {
    held: Mutex<HashMap<String, Gate>>,
}

impl FakeAuth {
    /// `login` for `email` waits for the returned gate
    pub fn hold(&self, email: &str) -> Gate {
        let gate = Gate::new();
        self.held.lock().unwrap().insert(email.to_owned(), gate.clone());
        gate
    }
}

/// Bearer token the fake issues to `email`
pub fn token_for(email: &str) -> String {
    format!("token-for-{email}")
}

fn signed_in(user: User) -> AuthResponse {
    AuthResponse {
        token: token_for(&user.email),
        refresh_token: "refresh-token".into(),
        user,
    }
}

impl AuthService for FakeAuth {
    fn login(&self, credentials: LoginRequest) -> ServiceFuture<AuthResponse> {
        let gate = self.held.lock().unwrap().get(&credentials.email).cloned();
        async move {
            if let Some(gate) = gate {
                gate.wait().await;
            }
            if credentials.password == PASSWORD {
                Ok(signed_in(User {
                    email: credentials.email,
                    ..sample_user()
                }))
            } else {
                Err(ServiceError::Api {
                    status: 401,
                    message: Some("Invalid email or password".into()),
                })
            }
        }
        .boxed()
    }

    fn register(&self, registration: RegisterRequest) -> ServiceFuture<AuthResponse> {
        async move {
            Ok(signed_in(User {
                name: registration.nickname,
                email: registration.email,
                ..sample_user()
            }))
        }
        .boxed()
    }

    fn update_user(&self, user_id: u64, update: UserUpdate) -> ServiceFuture<User> {
        async move {
            let base = sample_user();
            Ok(User {
                id: user_id,
                name: update.name.unwrap_or(base.name.clone()),
                email: update.email.unwrap_or(base.email.clone()),
                // The backend omits optional fields it did not touch.
                payment_info: None,
                ..base
            })
        }
        .boxed()
    }
}

/// Cart, favorites, library and orders over shared in-memory tables.
#[derive(Default)]
pub struct FakeShop {
    carts: Mutex<HashMap<u64, Vec<(u64, u32)>>>,
    favorites: Mutex<HashMap<u64, Vec<u64>>>,
    libraries: Mutex<HashMap<u64, Vec<u64>>>,
    orders: Mutex<Vec<Order>>,
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<ServiceError>>,
}

impl FakeShop {
    pub fn fail_with(&self, error: ServiceError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn seed_cart(&self, user_id: u64, lines: &[(u64, u32)]) {
        self.carts.lock().unwrap().insert(user_id, lines.to_vec());
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn cart(&self, user_id: u64) -> ShoppingCart {
        let lines = self.carts.lock().unwrap().get(&user_id).cloned().unwrap_or_default();
        ShoppingCart {
            id: user_id,
            user_id,
            cart_items: lines
                .into_iter()
                .enumerate()
                .map(|(i, (game_id, quantity))| CartItem {
                    id: i as u64 + 1,
                    shopping_cart_id: user_id,
                    game_id,
                    game: game(game_id),
                    quantity,
                })
                .collect(),
        }
    }

    fn favorite(&self, user_id: u64) -> Favorite {
        let ids = self.favorites.lock().unwrap().get(&user_id).cloned().unwrap_or_default();
        Favorite {
            id: user_id,
            user_id,
            favorite_items: ids
                .into_iter()
                .enumerate()
                .map(|(i, game_id)| FavoriteItem {
                    id: i as u64 + 1,
                    favorite_id: user_id,
                    game_id,
                    game: game(game_id),
                })
                .collect(),
        }
    }

    fn library(&self, user_id: u64) -> Library {
        let ids = self.libraries.lock().unwrap().get(&user_id).cloned().unwrap_or_default();
        Library {
            id: user_id,
            user_id,
            library_items: ids
                .into_iter()
                .enumerate()
                .map(|(i, game_id)| LibraryItem {
                    id: i as u64 + 1,
                    library_id: user_id,
                    game_id,
                    game: game(game_id),
                })
                .collect(),
        }
    }
}

impl CartService for FakeShop {
    fn get_cart(&self, user_id: u64) -> ServiceFuture<ShoppingCart> {
        self.record(format!("get_cart({user_id})"));
        answer(&self.failure, self.cart(user_id))
    }

    fn add_to_cart(&self, user_id: u64, game_id: u64, quantity: u32) -> ServiceFuture<ShoppingCart> {
        self.record(format!("add_to_cart({user_id},{game_id},{quantity})"));
        self.carts
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push((game_id, quantity));
        answer(&self.failure, self.cart(user_id))
    }

    fn remove_from_cart(&self, user_id: u64, game_id: u64) -> ServiceFuture<()> {
        self.record(format!("remove_from_cart({user_id},{game_id})"));
        if let Some(lines) = self.carts.lock().unwrap().get_mut(&user_id) {
            lines.retain(|(id, _)| *id != game_id);
        }
        answer(&self.failure, ())
    }

    fn update_quantity(&self, user_id: u64, game_id: u64, quantity: u32) -> ServiceFuture<ShoppingCart> {
        self.record(format!("update_quantity({user_id},{game_id},{quantity})"));
        if let Some(lines) = self.carts.lock().unwrap().get_mut(&user_id) {
            for line in lines.iter_mut().filter(|(id, _)| *id == game_id) {
                line.1 = quantity;
            }
        }
        answer(&self.failure, self.cart(user_id))
    }

    fn clear_cart(&self, user_id: u64) -> ServiceFuture<()> {
        self.record(format!("clear_cart({user_id})"));
        self.carts.lock().unwrap().remove(&user_id);
        answer(&self.failure, ())
    }
}

impl FavoritesService for FakeShop {
    fn get_favorites(&self, user_id: u64) -> ServiceFuture<Favorite> {
        self.record(format!("get_favorites({user_id})"));
        answer(&self.failure, self.favorite(user_id))
    }

    fn add_to_favorites(&self, user_id: u64, game_id: u64) -> ServiceFuture<Favorite> {
        self.record(format!("add_to_favorites({user_id},{game_id})"));
        self.favorites.lock().unwrap().entry(user_id).or_default().push(game_id);
        answer(&self.failure, self.favorite(user_id))
    }

    fn remove_from_favorites(&self, user_id: u64, game_id: u64) -> ServiceFuture<()> {
        self.record(format!("remove_from_favorites({user_id},{game_id})"));
        if let Some(ids) = self.favorites.lock().unwrap().get_mut(&user_id) {
            ids.retain(|id| *id != game_id);
        }
        answer(&self.failure, ())
    }

    fn clear_favorites(&self, user_id: u64) -> ServiceFuture<()> {
        self.record(format!("clear_favorites({user_id})"));
        self.favorites.lock().unwrap().remove(&user_id);
        answer(&self.failure, ())
    }
}

impl LibraryService for FakeShop {
    fn get_library(&self, user_id: u64) -> ServiceFuture<Library> {
        self.record(format!("get_library({user_id})"));
        answer(&self.failure, self.library(user_id))
    }

    fn add_to_library(&self, user_id: u64, game_id: u64) -> ServiceFuture<Library> {
        self.record(format!("add_to_library({user_id},{game_id})"));
        self.libraries.lock().unwrap().entry(user_id).or_default().push(game_id);
        answer(&self.failure, self.library(user_id))
    }

    fn remove_from_library(&self, user_id: u64, game_id: u64) -> ServiceFuture<()> {
        self.record(format!("remove_from_library({user_id},{game_id})"));
        if let Some(ids) = self.libraries.lock().unwrap().get_mut(&user_id) {
            ids.retain(|id| *id != game_id);
        }
        answer(&self.failure, ())
    }
}

impl OrderService for FakeShop {
    fn create_order(&self, user_id: u64) -> ServiceFuture<Order> {
        self.record(format!("create_order({user_id})"));
        let cart = self.cart(user_id);
        let mut orders = self.orders.lock().unwrap();
        let id = orders.len() as u64 + 100;
        let order = Order {
            id,
            user_id,
            total_cost: cart.cart_items.iter().map(CartItem::line_total).sum(),
            status: "pending".into(),
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-01T00:00:00Z".into(),
            order_items: cart
                .cart_items
                .iter()
                .map(|item| OrderItem {
                    id: item.id,
                    order_id: id,
                    game_id: item.game_id,
                    game: item.game.clone(),
                    price: item.game.price,
                    quantity: item.quantity,
                })
                .collect(),
        };
        orders.push(order.clone());
        drop(orders);
        self.carts.lock().unwrap().remove(&user_id);
        answer(&self.failure, order)
    }

    fn get_order_by_id(&self, order_id: u64) -> ServiceFuture<Order> {
        self.record(format!("get_order_by_id({order_id})"));
        let found = self.orders.lock().unwrap().iter().find(|o| o.id == order_id).cloned();
        match found {
            Some(order) => answer(&self.failure, order),
            None => async move {
                Err(ServiceError::Api {
                    status: 404,
                    message: Some("Order not found".into()),
                })
            }
            .boxed(),
        }
    }

    fn get_user_orders(&self, user_id: u64) -> ServiceFuture<Vec<Order>> {
        self.record(format!("get_user_orders({user_id})"));
        let orders = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        answer(&self.failure, orders)
    }
}

/// Handles on the fakes behind an environment
#[derive(Clone, Default)]
pub struct Fakes {
    pub games: Arc<FakeGames>,
    pub auth: Arc<FakeAuth>,
    pub shop: Arc<FakeShop>,
}

impl Fakes {
    pub fn services(&self) -> Services {
        Services {
            games: self.games.clone(),
            auth: self.auth.clone(),
            cart: self.shop.clone(),
            favorites: self.shop.clone(),
            library: self.shop.clone(),
            orders: self.shop.clone(),
            news: Arc::new(StaticNewsService::new(Arc::new(test_clock()), Duration::ZERO)),
        }
    }

    pub fn env(&self) -> StorefrontEnvironment {
        self.env_with_session(Session::in_memory())
    }

    pub fn env_with_session(&self, session: Session) -> StorefrontEnvironment {
        StorefrontEnvironment {
            services: self.services(),
            session,
            token: BearerToken::default(),
            search: SearchConfig::default(),
        }
    }

    pub fn store(&self) -> StorefrontStore {
        build_store(self.env(), StoreConfig::default())
    }
}

/// Environment over fresh fakes, for reducer tests
pub fn fake_env() -> StorefrontEnvironment {
    Fakes::default().env()
}
