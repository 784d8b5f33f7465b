//! Property tests for the catalog filter/sort engine.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use chrono::{Days, NaiveDate};
use junimo_storefront::catalog::{CatalogFilter, PriceRange, SortKey, apply};
use junimo_storefront::models::Game;
use junimo_storefront::services::fixtures;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_game() -> impl Strategy<Value = Game> {
    (0..9usize, 1..6u64, 1..6u64, 0..10_000u64, 0..5_000u64, "[a-zA-Z ]{1,12}").prop_map(
        |(template, category, developer, price, days, title)| {
            let mut game = fixtures::games().swap_remove(template);
            game.category_id = category;
            game.category.id = category;
            game.developer_id = developer;
            game.developer.id = developer;
            game.price = price;
            game.release_date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap() + Days::new(days);
            game.title = title;
            game
        },
    )
}

fn arb_games() -> impl Strategy<Value = Vec<Game>> {
    prop::collection::vec(arb_game(), 0..40).prop_map(|mut games| {
        for (id, game) in games.iter_mut().enumerate() {
            game.id = u64::try_from(id).unwrap();
        }
        games
    })
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_filter() -> impl Strategy<Value = CatalogFilter> {
    (
        prop::collection::btree_set(1..6u64, 0..3),
        prop::collection::btree_set(1..6u64, 0..3),
        0..10_000u64,
        0..10_000u64,
        arb_sort(),
    )
        .prop_map(|(categories, developers, a, b, sort)| CatalogFilter {
            categories,
            developers,
            price: PriceRange {
                min: a.min(b),
                max: a.max(b),
            },
            sort,
        })
}

fn open(sort: SortKey) -> CatalogFilter {
    CatalogFilter {
        categories: BTreeSet::new(),
        developers: BTreeSet::new(),
        price: PriceRange { min: 0, max: u64::MAX },
        sort,
    }
}

fn in_order(sort: SortKey, a: &Game, b: &Game) -> bool {
    match sort {
        SortKey::Newest => a.release_date >= b.release_date,
        SortKey::Oldest => a.release_date <= b.release_date,
        SortKey::PriceLow => a.price <= b.price,
        SortKey::PriceHigh => a.price >= b.price,
        SortKey::Alphabetical => a.title.to_lowercase() <= b.title.to_lowercase(),
    }
}

fn ties(sort: SortKey, a: &Game, b: &Game) -> bool {
    match sort {
        SortKey::Newest | SortKey::Oldest => a.release_date == b.release_date,
        SortKey::PriceLow | SortKey::PriceHigh => a.price == b.price,
        SortKey::Alphabetical => a.title.to_lowercase() == b.title.to_lowercase(),
    }
}

proptest! {
    #[test]
    fn test_result_is_exactly_the_matching_games(games in arb_games(), filter in arb_filter()) {
        let visible = apply(&games, &filter);

        let expected: BTreeSet<u64> = games.iter().filter(|g| filter.matches(g)).map(|g| g.id).collect();
        let actual: BTreeSet<u64> = visible.iter().map(|g| g.id).collect();
        prop_assert_eq!(visible.len(), actual.len(), "no duplicates");
        prop_assert_eq!(actual, expected);

        for game in &visible {
            prop_assert!(filter.price.contains(game.price));
            prop_assert!(filter.categories.is_empty() || filter.categories.contains(&game.category.id));
            prop_assert!(filter.developers.is_empty() || filter.developers.contains(&game.developer.id));
        }
    }

    #[test]
    fn test_result_respects_sort_key(games in arb_games(), filter in arb_filter()) {
        let visible = apply(&games, &filter);
        for pair in visible.windows(2) {
            prop_assert!(in_order(filter.sort, &pair[0], &pair[1]), "{:?} before {:?}", pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn test_ties_keep_source_order(games in arb_games(), sort in arb_sort()) {
        let visible = apply(&games, &open(sort));
        // ids were assigned in source order
        for pair in visible.windows(2) {
            if ties(sort, &pair[0], &pair[1]) {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn test_empty_selection_keeps_everything(games in arb_games(), sort in arb_sort()) {
        prop_assert_eq!(apply(&games, &open(sort)).len(), games.len());
    }

    #[test]
    fn test_toggle_twice_is_identity(filter in arb_filter(), id in 1..6u64) {
        let mut toggled = filter.clone();
        toggled.toggle_category(id);
        toggled.toggle_category(id);
        toggled.toggle_developer(id);
        toggled.toggle_developer(id);
        prop_assert_eq!(toggled, filter);
    }
}
