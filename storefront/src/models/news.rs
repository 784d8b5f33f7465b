use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A storefront news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    /// Post id
    pub id: u64,
    /// Headline
    pub title: String,
    /// Body
    pub content: String,
    /// Cover image
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Publication time
    pub publish_date: DateTime<Utc>,
    /// Byline
    pub author: String,
    /// Section (`Releases`, `Sales`, ...)
    pub category: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}
