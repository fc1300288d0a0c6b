//! Badge routes

use axum::Json;
use engine::{Badge, BadgeCategory, BADGES};
use serde::Serialize;

/// Grouped badges for the catalog
#[derive(Serialize)]
pub struct BadgeCatalog {
    pub total: usize,
    pub categories: Vec<CategoryGroup>,
}

#[derive(Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub category: BadgeCategory,
    pub badges: Vec<Badge>,
}

/// List all badges (catalog)
pub async fn list() -> Json<BadgeCatalog> {
    let categories = BadgeCategory::ALL
        .iter()
        .map(|category| CategoryGroup {
            name: category.label().to_string(),
            category: *category,
            badges: BADGES
                .iter()
                .filter(|b| b.category == *category)
                .copied()
                .collect(),
        })
        .filter(|c| !c.badges.is_empty())
        .collect();

    Json(BadgeCatalog {
        total: BADGES.len(),
        categories,
    })
}
