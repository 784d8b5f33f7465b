//! Catalog filtering and sorting.
//!
//! [`apply`] runs the category, developer and price predicates in sequence
//! and then a stable sort. The whole list is recomputed on every change;
//! [`crate::selectors::CatalogView`] memoizes the result.

use crate::models::Game;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Catalog ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Release date, most recent first
    #[default]
    Newest,
    /// Release date, oldest first
    Oldest,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Title, case-insensitive
    Alphabetical,
}

impl SortKey {
    /// Every sort key, in menu order
    pub const ALL: [Self; 5] = [
        Self::Newest,
        Self::Oldest,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Alphabetical,
    ];

    /// Wire name (`price_low`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
            Self::Alphabetical => "alphabetical",
        }
    }

    fn sort(self, games: &mut [Game]) {
        match self {
            Self::Newest => games.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
            Self::Oldest => games.sort_by_key(|g| g.release_date),
            Self::PriceLow => games.sort_by_key(|g| g.price),
            Self::PriceHigh => games.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Alphabetical => games.sort_by_cached_key(|g| g.title.to_lowercase()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key `{s}`"))
    }
}

/// Inclusive price window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest accepted price
    pub min: u64,
    /// Highest accepted price
    pub max: u64,
}

impl PriceRange {
    /// Whether `price` lies inside the window
    #[must_use]
    pub const fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Cheapest and most expensive price of the loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds(pub PriceRange);

impl PriceBounds {
    /// Bounds of `games`, `None` for an empty list
    #[must_use]
    pub fn of(games: &[Game]) -> Option<Self> {
        let min = games.iter().map(|g| g.price).min()?;
        let max = games.iter().map(|g| g.price).max()?;
        Some(Self(PriceRange { min, max }))
    }

    /// The bounds as a price window
    #[must_use]
    pub const fn range(&self) -> PriceRange {
        self.0
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self(PriceRange { min: 0, max: 5000 })
    }
}

/// Which end of the price window an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    /// Lower end
    Min,
    /// Upper end
    Max,
}

/// User-selected catalog filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Selected category ids; empty accepts every category
    pub categories: BTreeSet<u64>,
    /// Selected developer ids; empty accepts every developer
    pub developers: BTreeSet<u64>,
    /// Accepted prices
    pub price: PriceRange,
    /// Result ordering
    pub sort: SortKey,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::new(PriceBounds::default())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_units(value: f64, to_whole: fn(f64) -> f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| to_whole(value) as u64)
}

impl CatalogFilter {
    /// Unfiltered view spanning `bounds`
    #[must_use]
    pub fn new(bounds: PriceBounds) -> Self {
        Self {
            categories: BTreeSet::new(),
            developers: BTreeSet::new(),
            price: bounds.range(),
            sort: SortKey::default(),
        }
    }

    /// Whether `game` passes every predicate
    #[must_use]
    pub fn matches(&self, game: &Game) -> bool {
        (self.categories.is_empty() || self.categories.contains(&game.category.id))
            && (self.developers.is_empty() || self.developers.contains(&game.developer.id))
            && self.price.contains(game.price)
    }

    /// Select or deselect a category
    pub fn toggle_category(&mut self, id: u64) {
        if !self.categories.remove(&id) {
            self.categories.insert(id);
        }
    }

    /// Select or deselect a developer
    pub fn toggle_developer(&mut self, id: u64) {
        if !self.developers.remove(&id) {
            self.developers.insert(id);
        }
    }

    /// Apply a typed price.
    ///
    /// Non-numeric and negative input is ignored. Fractions narrow the
    /// window: a minimum rounds up and a maximum rounds down, so no price
    /// outside the typed window shows. The edited end is clamped so the
    /// window never inverts. Returns whether the window changed.
    pub fn set_price_input(&mut self, bound: PriceBound, raw: &str) -> bool {
        let to_whole: fn(f64) -> f64 = match bound {
            PriceBound::Min => f64::ceil,
            PriceBound::Max => f64::floor,
        };
        let Some(value) = raw.trim().parse::<f64>().ok().and_then(|v| whole_units(v, to_whole)) else {
            return false;
        };

        let before = self.price;
        match bound {
            PriceBound::Min => self.price.min = value.min(self.price.max),
            PriceBound::Max => self.price.max = value.max(self.price.min),
        }
        before != self.price
    }

    /// Apply a slider position, rounded to whole units
    pub fn set_price_slider(&mut self, min: f64, max: f64) {
        let min = whole_units(min, f64::round).unwrap_or(0);
        let max = whole_units(max, f64::round).unwrap_or(0).max(min);
        self.price = PriceRange { min, max };
    }

    /// Back to the unfiltered view, keeping `pinned` selected.
    pub fn reset(&mut self, bounds: PriceBounds, pinned: Option<u64>) {
        self.categories = pinned.into_iter().collect();
        self.developers.clear();
        self.price = bounds.range();
        self.sort = SortKey::Newest;
    }
}

/// Filter and sort `games`
#[must_use]
pub fn apply(games: &[Game], filter: &CatalogFilter) -> Vec<Game> {
    let mut visible: Vec<Game> = games.iter().filter(|g| filter.matches(g)).cloned().collect();
    filter.sort.sort(&mut visible);
    visible
}
