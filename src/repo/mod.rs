use async_trait::async_trait;

use crate::{
    db::DbError,
    models::{ItemKind, Meal, NewMeal, NewProduct, NutritionFact, Product, Tag},
};

#[cfg(test)]
pub mod memory;
mod postgres;

pub use postgres::PgRepository;

/// Storage operations behind the HTTP handlers.
#[async_trait]
pub trait FoodRepository: Send + Sync {
    /// Approved meals in ascending id order.
    async fn list_approved_meals(&self) -> Result<Vec<Meal>, DbError>;
    async fn create_meal(&self, meal: NewMeal) -> Result<Meal, DbError>;

    /// Approved products in ascending id order.
    async fn list_approved_products(&self) -> Result<Vec<Product>, DbError>;
    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError>;

    /// Tags joined through the kind's association table. Duplicate links yield duplicate rows.
    async fn list_tags(&self, kind: ItemKind, item_id: i32) -> Result<Vec<Tag>, DbError>;
    async fn add_tag(&self, kind: ItemKind, item_id: i32, tag_id: Option<i32>) -> Result<(), DbError>;

    async fn list_nutrition(&self, kind: ItemKind, item_id: i32) -> Result<Vec<NutritionFact>, DbError>;
    async fn add_nutrition(
        &self,
        kind: ItemKind,
        item_id: i32,
        fact: NutritionFact,
    ) -> Result<(), DbError>;
}
