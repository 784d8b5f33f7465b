//! News feed views.

use crate::app::AppState;
use crate::models::News;

/// A post from the current list
#[must_use]
pub fn news_by_id(state: &AppState, id: u64) -> Option<&News> {
    state.news.news_list.iter().find(|n| n.id == id)
}

/// Posts of one section
#[must_use]
pub fn news_by_category<'a>(state: &'a AppState, category: &str) -> Vec<&'a News> {
    state
        .news
        .news_list
        .iter()
        .filter(|n| n.category == category)
        .collect()
}

/// The `count` most recent posts, newest first
#[must_use]
pub fn latest_news(state: &AppState, count: usize) -> Vec<&News> {
    let mut posts: Vec<&News> = state.news.news_list.iter().collect();
    posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    posts.truncate(count);
    posts
}
