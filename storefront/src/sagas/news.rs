use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::slices::NewsAction;
use junimo_core::Effect;
use std::sync::Arc;

pub(super) fn watch(action: &NewsAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    let news = Arc::clone(&env.services.news);

    match action {
        NewsAction::GetAllNewsRequest => take_latest(action, AppAction::News, async move {
            settle(
                news.get_all_news().await,
                NewsAction::GetAllNewsSuccess,
                NewsAction::GetAllNewsFailure,
                "Failed to fetch news",
            )
        }),
        NewsAction::GetNewsByIdRequest(id) => {
            let id = *id;
            take_latest(action, AppAction::News, async move {
                match news.get_news_by_id(id).await {
                    Ok(Some(item)) => NewsAction::GetNewsByIdSuccess(item),
                    Ok(None) => NewsAction::GetNewsByIdFailure("News item not found".to_owned()),
                    Err(error) => settle(
                        Err(error),
                        NewsAction::GetNewsByIdSuccess,
                        NewsAction::GetNewsByIdFailure,
                        "Failed to fetch news item",
                    ),
                }
            })
        },
        NewsAction::GetNewsByCategoryRequest(category) => {
            let lookup = news.get_news_by_category(category);
            take_latest(action, AppAction::News, async move {
                settle(
                    lookup.await,
                    NewsAction::GetNewsByCategorySuccess,
                    NewsAction::GetNewsByCategoryFailure,
                    "Failed to fetch news by category",
                )
            })
        },
        _ => Effect::None,
    }
}
