//! Storefront walk-through.
//!
//! Browses the catalog, narrows it with the filter, runs a search-as-you-type
//! query and reads the news feed against the configured backend.
//!
//! ```bash
//! JUNIMO_API_MODE=mocks cargo run --bin junimo-storefront
//! ```

use anyhow::Context;
use junimo_runtime::StoreConfig;
use junimo_runtime::metrics::MetricsServer;
use junimo_storefront::catalog::SortKey;
use junimo_storefront::selectors::{CatalogView, news};
use junimo_storefront::{
    AppAction, CatalogAction, GamesAction, NewsAction, SearchAction, StorefrontConfig,
    StorefrontEnvironment, StorefrontStore, build_store,
};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const WAIT: Duration = Duration::from_secs(20);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().context("invalid configuration")?;
    info!(mode = %config.api.mode, base_url = %config.api.base_url, "Starting storefront");

    let mut metrics = MetricsServer::new(SocketAddr::from(([127, 0, 0, 1], 9000)));
    metrics.start()?;

    let env = StorefrontEnvironment::from_config(&config)?;
    let store = build_store(env, StoreConfig::default());

    browse(&store).await?;
    filter(&store).await?;
    search(&store, "re").await?;
    read_news(&store).await?;

    store.shutdown(Duration::from_secs(5)).await?;

    if let Some(rendered) = metrics.render() {
        println!("\n{rendered}");
    }
    Ok(())
}

async fn browse(store: &StorefrontStore) -> anyhow::Result<()> {
    let result = store
        .send_and_wait_for(
            GamesAction::GetAllGamesRequest {
                limit: Some(20),
                offset: None,
            }
            .into(),
            |a| {
                matches!(
                    a,
                    AppAction::Games(
                        GamesAction::GetAllGamesSuccess(_) | GamesAction::GetAllGamesFailure(_)
                    )
                )
            },
            WAIT,
        )
        .await?;

    if let AppAction::Games(GamesAction::GetAllGamesFailure(message)) = result {
        anyhow::bail!("catalog unavailable: {message}");
    }

    let games = store.state(|s| s.games.games.clone()).await;
    println!("Catalog ({} games)", games.len());
    for game in games.iter() {
        println!("  {:>3}  {:<32} {:>6}  {}", game.id, game.title, game.price, game.category.name);
    }
    Ok(())
}

async fn filter(store: &StorefrontStore) -> anyhow::Result<()> {
    let view = CatalogView::new();
    let first_category = store
        .state(|s| s.games.games.first().map(|g| g.category_id))
        .await;

    if let Some(category) = first_category {
        store.send(CatalogAction::ToggleCategory(category).into()).await?;
    }
    store.send(CatalogAction::SetSort(SortKey::PriceLow).into()).await?;

    let (visible, filter) = store
        .state(|s| (view.select(s), s.catalog.filter.clone()))
        .await;
    println!(
        "\nFiltered: categories {:?}, price {}..={}, sort {}",
        filter.categories, filter.price.min, filter.price.max, filter.sort
    );
    for game in visible.iter() {
        println!("  {:<32} {:>6}", game.title, game.price);
    }

    store.send(CatalogAction::Reset.into()).await?;
    Ok(())
}

async fn search(store: &StorefrontStore, query: &str) -> anyhow::Result<()> {
    let result = store
        .send_and_wait_for(
            SearchAction::QueryChanged(query.to_owned()).into(),
            |a| {
                matches!(
                    a,
                    AppAction::Search(
                        SearchAction::SearchSuccess { .. } | SearchAction::SearchFailure(_)
                    )
                )
            },
            WAIT,
        )
        .await?;

    match result {
        AppAction::Search(SearchAction::SearchSuccess { query, results }) => {
            println!("\nSearch \"{query}\": {} result(s)", results.len());
            for game in &results {
                println!("  {}", game.title);
            }
        },
        AppAction::Search(SearchAction::SearchFailure(message)) => {
            println!("\nSearch failed: {message}");
        },
        _ => {},
    }
    Ok(())
}

async fn read_news(store: &StorefrontStore) -> anyhow::Result<()> {
    store
        .send_and_wait_for(
            NewsAction::GetAllNewsRequest.into(),
            |a| {
                matches!(
                    a,
                    AppAction::News(NewsAction::GetAllNewsSuccess(_) | NewsAction::GetAllNewsFailure(_))
                )
            },
            WAIT,
        )
        .await?;

    let latest = store
        .state(|s| {
            news::latest_news(s, 3)
                .into_iter()
                .map(|n| format!("{}  {}", n.publish_date.format("%Y-%m-%d"), n.title))
                .collect::<Vec<_>>()
        })
        .await;
    println!("\nLatest news");
    for line in latest {
        println!("  {line}");
    }
    Ok(())
}
