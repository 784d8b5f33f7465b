use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A game listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Catalog id
    pub id: u64,
    /// Display title
    pub title: String,
    /// Long description
    pub description: String,
    /// Price in whole currency units
    pub price: u64,
    /// Release day
    #[serde(with = "super::release_date")]
    pub release_date: NaiveDate,
    /// Id of [`Game::developer`]
    #[serde(rename = "developerID")]
    pub developer_id: u64,
    /// Developer snapshot
    pub developer: Developer,
    /// Id of [`Game::category`]
    #[serde(rename = "categoryID")]
    pub category_id: u64,
    /// Category snapshot
    pub category: Category,
    /// Inline image payload
    #[serde(rename = "image_data", default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Inline image file name
    #[serde(rename = "image_name", default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    /// Hosted image
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Backend creation timestamp, as sent
    pub created_at: String,
    /// Backend update timestamp, as sent
    pub updated_at: String,
}

/// Studio behind a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    /// Developer id
    pub id: u64,
    /// Studio name
    pub name: String,
    /// Home country
    pub country: String,
    /// Short blurb
    pub description: String,
    /// Studio website
    #[serde(rename = "websiteURL")]
    pub website_url: String,
}

/// Catalog genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    pub id: u64,
    /// Genre name
    pub name: String,
    /// Short blurb
    pub description: String,
}

/// A user review of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review id
    pub id: u64,
    /// Reviewed game
    #[serde(rename = "gameID")]
    pub game_id: u64,
    /// Author id
    #[serde(rename = "userID")]
    pub user_id: u64,
    /// Headline
    pub title: String,
    /// Body
    pub description: String,
    /// Score given by the author
    pub rating: u8,
    /// Backend creation timestamp, as sent
    pub created_at: String,
    /// Author display name
    pub user: ReviewAuthor,
}

/// Display name of a review author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    /// First name
    pub name: String,
    /// Last name
    pub second_name: String,
}
