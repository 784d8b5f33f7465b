//! Built-in catalog and news data used by the fixture-backed services.

use crate::models::{Category, Developer, Game, News};
use chrono::{DateTime, NaiveDate, Utc};

fn developer(id: u64, name: &str, country: &str, description: &str, website_url: &str) -> Developer {
    Developer {
        id,
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        website_url: website_url.to_string(),
    }
}

fn category(id: u64, name: &str, description: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Developers of the fixture catalog
#[must_use]
pub fn developers() -> Vec<Developer> {
    vec![
        developer(1, "CD Projekt RED", "Poland", "Studio behind The Witcher and Cyberpunk 2077", "https://www.cdprojektred.com/"),
        developer(2, "FromSoftware", "Japan", "Studio behind Dark Souls and Elden Ring", "https://www.fromsoftware.jp/"),
        developer(3, "Rockstar Games", "USA", "Studio behind GTA and Red Dead Redemption", "https://www.rockstargames.com/"),
        developer(4, "Mojang Studios", "Sweden", "Studio behind Minecraft", "https://www.minecraft.net/"),
        developer(5, "Deep Rock Games", "Denmark", "Studio behind Deep Rock Galactic", "https://www.ghostship.dk/"),
        developer(6, "4A Games", "Ukraine", "Studio behind the Metro series", "https://www.4a-games.com/"),
    ]
}

/// Categories of the fixture catalog
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        category(1, "RPG", "Role-playing games"),
        category(2, "Action", "Action games"),
        category(3, "Adventure", "Adventure games"),
        category(4, "Shooter", "Shooters"),
        category(5, "Sandbox", "Sandbox games"),
        category(6, "Survival", "Survival games"),
        category(7, "Indie", "Indie games"),
        category(8, "Simulation", "Simulators"),
    ]
}

struct Row {
    id: u64,
    title: &'static str,
    description: &'static str,
    price: u64,
    released: (i32, u32, u32),
    developer_id: u64,
    category_id: u64,
    image: &'static str,
    created_at: &'static str,
}

const ROWS: &[Row] = &[
    Row {
        id: 1,
        title: "Witcher 3: Wild Hunt",
        description: "Open-world action RPG from CD Projekt RED.",
        price: 2799,
        released: (2015, 5, 19),
        developer_id: 1,
        category_id: 1,
        image: "/assets/images/witcher3.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 2,
        title: "Elden Ring",
        description: "Open-world action RPG from FromSoftware.",
        price: 3999,
        released: (2022, 2, 25),
        developer_id: 2,
        category_id: 1,
        image: "/assets/images/elden.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 3,
        title: "Red Dead Redemption 2",
        description: "Open-world action-adventure from Rockstar Games.",
        price: 3499,
        released: (2018, 10, 26),
        developer_id: 3,
        category_id: 3,
        image: "/assets/images/rdr2.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 4,
        title: "Minecraft",
        description: "Sandbox game originally created by Markus Persson.",
        price: 1499,
        released: (2011, 11, 18),
        developer_id: 4,
        category_id: 5,
        image: "/assets/images/minecraft.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 5,
        title: "Deep Rock Galactic",
        description: "Co-op first-person shooter from Ghost Ship Games.",
        price: 1500,
        released: (2020, 5, 13),
        developer_id: 5,
        category_id: 4,
        image: "/assets/images/deeprock.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 6,
        title: "Metro Redux",
        description: "Remastered Metro 2033 and Metro: Last Light from 4A Games.",
        price: 1999,
        released: (2014, 8, 26),
        developer_id: 6,
        category_id: 4,
        image: "/assets/images/metro.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 7,
        title: "Cyberpunk 2077",
        description: "Open-world action RPG from CD Projekt RED.",
        price: 3999,
        released: (2020, 12, 10),
        developer_id: 1,
        category_id: 1,
        image: "/assets/images/cyberpunk.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 8,
        title: "Grand Theft Auto V",
        description: "Action-adventure developed by Rockstar North.",
        price: 2499,
        released: (2013, 9, 17),
        developer_id: 3,
        category_id: 2,
        image: "/assets/images/gtav.jpg",
        created_at: "2022-01-01",
    },
    Row {
        id: 9,
        title: "Balatro",
        description: "Poker-themed roguelike deck builder.",
        price: 1999,
        released: (2023, 2, 20),
        developer_id: 7,
        category_id: 7,
        image: "/assets/images/balatro.jpg",
        created_at: "2023-02-20",
    },
];

/// The fixture catalog, ordered by id
#[must_use]
pub fn games() -> Vec<Game> {
    let developers = developers();
    let categories = categories();
    // Balatro's developer is not part of the developer list.
    let local_thunk = developer(7, "LocalThunk", "USA", "Solo developer of Balatro", "https://www.playbalatro.com/");

    ROWS.iter()
        .filter_map(|row| {
            let developer = developers
                .iter()
                .find(|d| d.id == row.developer_id)
                .unwrap_or(&local_thunk)
                .clone();
            let category = categories.iter().find(|c| c.id == row.category_id)?.clone();
            let (year, month, day) = row.released;

            Some(Game {
                id: row.id,
                title: row.title.to_string(),
                description: row.description.to_string(),
                price: row.price,
                release_date: NaiveDate::from_ymd_opt(year, month, day)?,
                developer_id: row.developer_id,
                developer,
                category_id: row.category_id,
                category,
                image_data: None,
                image_name: None,
                image_url: Some(row.image.to_string()),
                created_at: row.created_at.to_string(),
                updated_at: row.created_at.to_string(),
            })
        })
        .collect()
}

/// Storefront news, all published at `now`
#[must_use]
pub fn news(now: DateTime<Utc>) -> Vec<News> {
    let post = |id: u64, title: &str, content: &str, author: &str, category: &str, tags: &[&str]| News {
        id,
        title: title.to_string(),
        content: content.to_string(),
        image_url: "assets/images/gameBlankImage.png".to_string(),
        publish_date: now,
        author: author.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    };

    vec![
        post(
            1,
            "New Game Releases This Month",
            "Check out these exciting new games hitting our store this month!",
            "Admin",
            "Releases",
            &["new games", "releases"],
        ),
        post(
            2,
            "Summer Sale Starting Soon",
            "Get ready for our biggest summer sale yet! Discounts up to 80% on selected titles.",
            "Admin",
            "Sales",
            &["sale", "discount", "summer"],
        ),
        post(
            3,
            "Upcoming Indie Games Showcase",
            "Join us for a special showcase of the most anticipated indie games of the year.",
            "Admin",
            "Events",
            &["indie", "showcase", "events"],
        ),
        post(
            4,
            "Top 10 RPGs You Should Play",
            "Our editors have compiled a list of the best RPGs that every gamer should experience.",
            "GameEditor",
            "Lists",
            &["rpg", "top10", "recommendations"],
        ),
    ]
}
