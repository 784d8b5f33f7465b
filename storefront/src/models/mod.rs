//! Wire models exchanged with the storefront backend.
//!
//! Field names follow the backend's JSON (`camelCase`, with `ID`/`URL`
//! suffixes spelled out); Rust fields are `snake_case`. Related entities are
//! embedded by value, so a cart item carries a full [`Game`] snapshot.

mod cart;
mod game;
mod news;
mod order;
mod user;

pub use cart::{CartItem, Favorite, FavoriteItem, Library, LibraryItem, ShoppingCart};
pub use game::{Category, Developer, Game, Review, ReviewAuthor};
pub use news::News;
pub use order::{Order, OrderItem};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, Role, User, UserUpdate};

/// `releaseDate` as either a calendar date or an RFC 3339 timestamp.
pub(crate) mod release_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub(crate) fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid release date: {raw}")))
    }

    pub(crate) fn parse(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::release_date;
    use chrono::NaiveDate;

    #[test]
    fn test_release_date_accepts_date_and_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2015, 5, 19);
        assert_eq!(release_date::parse("2015-05-19"), expected);
        assert_eq!(release_date::parse("2015-05-19T10:00:00Z"), expected);
        assert_eq!(release_date::parse("2015-05-19T23:30:00+02:00"), expected);
        assert_eq!(release_date::parse("May 19"), None);
    }
}
