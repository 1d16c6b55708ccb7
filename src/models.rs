use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Moderation state of a submitted meal or product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
}

impl ModerationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ModerationStatus::Pending => "pending",
            ModerationStatus::Approved => "approved",
        }
    }
}

/// Meal record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: i32,
    pub name: Option<String>,
    pub preparation_description: Option<String>,
    pub note: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<i32>,
    pub status: String, // "pending" | "approved"
}

/// Product record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: Option<String>,
    pub note: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<i32>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i32,
    pub name: Option<String>,
    pub color_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NutritionFact {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// Values written for a new meal row.
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: Option<String>,
    pub preparation_description: Option<String>,
    pub note: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<i32>,
    pub status: ModerationStatus,
}

/// Values written for a new product row.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: Option<String>,
    pub note: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<i32>,
    pub status: ModerationStatus,
}

/// Body of every 201 that only confirms.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// The two kinds of food item that carry tags and nutritional facts.
///
/// Each kind owns its URL segment, the `item_type` stored in
/// `nutritional_facts`, its tag join table and the messages its routes return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Meal,
    Product,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Meal, ItemKind::Product];

    /// Path segment used in routes, e.g. `/meals/:id/tags`.
    pub fn segment(self) -> &'static str {
        match self {
            ItemKind::Meal => "meals",
            ItemKind::Product => "products",
        }
    }

    /// Value of `nutritional_facts.item_type`.
    pub fn item_type(self) -> &'static str {
        match self {
            ItemKind::Meal => "meal",
            ItemKind::Product => "product",
        }
    }

    pub fn tags_fetch_failed(self) -> &'static str {
        match self {
            ItemKind::Meal => "Could not retrieve meal tags",
            ItemKind::Product => "Could not retrieve product tags",
        }
    }

    pub fn tag_add_failed(self) -> &'static str {
        match self {
            ItemKind::Meal => "Could not add tag to meal",
            ItemKind::Product => "Could not add tag to product",
        }
    }

    pub fn tag_added(self) -> &'static str {
        match self {
            ItemKind::Meal => "Tag added to meal",
            ItemKind::Product => "Tag added to product",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.item_type())
    }
}
