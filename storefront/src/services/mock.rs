//! Fixture-backed services with simulated latency.

use super::{GameService, NewsService, ServiceFuture, fixtures};
use crate::error::ServiceError;
use crate::models::{Category, Developer, Game, News};
use futures::FutureExt;
use junimo_core::Clock;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

fn page<T: Clone>(items: &[T], limit: u32, offset: u32) -> Vec<T> {
    items
        .iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

/// Game catalog served from [`fixtures::games`].
#[derive(Debug, Clone)]
pub struct MockGameService {
    games: Arc<Vec<Game>>,
    latency: Duration,
}

impl MockGameService {
    /// Fixture catalog answering after `latency`
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            games: Arc::new(fixtures::games()),
            latency,
        }
    }

    fn respond<T: Send + 'static>(&self, value: Result<T, ServiceError>) -> ServiceFuture<T> {
        let latency = self.latency;
        async move {
            simulate_latency(latency).await;
            value
        }
        .boxed()
    }

    fn shuffled(&self, limit: u32) -> Vec<Game> {
        let mut games = self.games.to_vec();
        games.shuffle(&mut rand::thread_rng());
        games.truncate(limit as usize);
        games
    }
}

impl GameService for MockGameService {
    fn get_all_games(&self, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>> {
        tracing::debug!(limit, offset, "Serving fixture games");
        self.respond(Ok(page(&self.games, limit, offset)))
    }

    fn get_game_by_id(&self, id: u64) -> ServiceFuture<Game> {
        let game = self
            .games
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("game {id}")));
        self.respond(game)
    }

    fn get_games_by_category(&self, category_id: u64) -> ServiceFuture<Vec<Game>> {
        let games = self
            .games
            .iter()
            .filter(|g| g.category.id == category_id)
            .cloned()
            .collect();
        self.respond(Ok(games))
    }

    fn get_top_selling_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        self.respond(Ok(self.shuffled(limit)))
    }

    fn get_discounted_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        self.respond(Ok(self.shuffled(limit)))
    }

    fn get_latest_games(&self, limit: u32) -> ServiceFuture<Vec<Game>> {
        let mut games = self.games.to_vec();
        games.sort_by(|a, b| b.id.cmp(&a.id));
        games.truncate(limit as usize);
        self.respond(Ok(games))
    }

    fn search_games(&self, title: &str, limit: u32, offset: u32) -> ServiceFuture<Vec<Game>> {
        let needle = title.to_lowercase();
        let matches: Vec<Game> = self
            .games
            .iter()
            .filter(|g| g.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        tracing::debug!(query = title, hits = matches.len(), "Fixture search");
        self.respond(Ok(page(&matches, limit, offset)))
    }

    fn get_categories(&self) -> ServiceFuture<Vec<Category>> {
        futures::future::ready(Ok(fixtures::categories())).boxed()
    }

    fn get_developers(&self) -> ServiceFuture<Vec<Developer>> {
        futures::future::ready(Ok(fixtures::developers())).boxed()
    }
}

/// News feed served from [`fixtures::news`].
#[derive(Clone)]
pub struct StaticNewsService {
    clock: Arc<dyn Clock>,
    latency: Duration,
}

impl StaticNewsService {
    /// News stamped with `clock`, answering after `latency`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, latency: Duration) -> Self {
        Self { clock, latency }
    }

    fn respond<T: Send + 'static>(&self, select: impl FnOnce(Vec<News>) -> T + Send + 'static) -> ServiceFuture<T> {
        let news = fixtures::news(self.clock.now());
        let latency = self.latency;
        async move {
            simulate_latency(latency).await;
            Ok(select(news))
        }
        .boxed()
    }
}

impl std::fmt::Debug for StaticNewsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticNewsService")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl NewsService for StaticNewsService {
    fn get_all_news(&self) -> ServiceFuture<Vec<News>> {
        self.respond(|news| news)
    }

    fn get_news_by_id(&self, id: u64) -> ServiceFuture<Option<News>> {
        self.respond(move |news| news.into_iter().find(|n| n.id == id))
    }

    fn get_news_by_category(&self, category: &str) -> ServiceFuture<Vec<News>> {
        let category = category.to_string();
        self.respond(move |news| news.into_iter().filter(|n| n.category == category).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junimo_testing::test_clock;

    fn games() -> MockGameService {
        MockGameService::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_pagination() -> Result<(), ServiceError> {
        let page = games().get_all_games(4, 3).await?;
        let ids: Vec<u64> = page.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![4, 5, 6, 7]);

        assert!(games().get_all_games(10, 20).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() -> Result<(), ServiceError> {
        let hits = games().search_games("RED", 10, 0).await?;
        let titles: Vec<&str> = hits.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Red Dead Redemption 2", "Metro Redux"]);

        let hits = games().search_games("e", 2, 0).await?;
        assert_eq!(hits.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_latest_by_id_descending() -> Result<(), ServiceError> {
        let latest = games().get_latest_games(3).await?;
        let ids: Vec<u64> = latest.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![9, 8, 7]);
        Ok(())
    }

    #[tokio::test]
    async fn test_samples_respect_limit() -> Result<(), ServiceError> {
        let service = games();
        let top = service.get_top_selling_games(4).await?;
        assert_eq!(top.len(), 4);
        let mut ids: Vec<u64> = top.iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4, "sample has no duplicates");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_game_is_not_found() {
        let result = games().get_game_by_id(99).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_category_filter() -> Result<(), ServiceError> {
        let shooters = games().get_games_by_category(4).await?;
        let ids: Vec<u64> = shooters.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![5, 6]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_news_latency_and_lookup() -> Result<(), ServiceError> {
        let news = StaticNewsService::new(Arc::new(test_clock()), Duration::from_millis(300));

        let started = tokio::time::Instant::now();
        let all = news.get_all_news().await?;
        assert_eq!(all.len(), 4);
        assert!(started.elapsed() >= Duration::from_millis(300));

        assert_eq!(news.get_news_by_id(2).await?.map(|n| n.category), Some("Sales".to_string()));
        assert_eq!(news.get_news_by_id(42).await?, None);
        assert_eq!(news.get_news_by_category("Lists").await?.len(), 1);
        assert!(news.get_news_by_category("lists").await?.is_empty());
        Ok(())
    }
}
