use async_trait::async_trait;

use super::FoodRepository;
use crate::{
    db::{Database, DbError},
    meals,
    models::{ItemKind, Meal, NewMeal, NewProduct, NutritionFact, Product, Tag},
    nutrition, products, tags,
};

/// [`FoodRepository`] over PostgreSQL. The SQL lives in each feature's `repo`
/// module and every statement goes through the [`Database`] gateway.
#[derive(Clone)]
pub struct PgRepository {
    db: Database,
}

impl PgRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodRepository for PgRepository {
    async fn list_approved_meals(&self) -> Result<Vec<Meal>, DbError> {
        meals::repo::list_approved(&self.db).await
    }

    async fn create_meal(&self, meal: NewMeal) -> Result<Meal, DbError> {
        meals::repo::create(&self.db, meal).await
    }

    async fn list_approved_products(&self) -> Result<Vec<Product>, DbError> {
        products::repo::list_approved(&self.db).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError> {
        products::repo::create(&self.db, product).await
    }

    async fn list_tags(&self, kind: ItemKind, item_id: i32) -> Result<Vec<Tag>, DbError> {
        tags::repo::list_for_item(&self.db, kind, item_id).await
    }

    async fn add_tag(&self, kind: ItemKind, item_id: i32, tag_id: Option<i32>) -> Result<(), DbError> {
        tags::repo::link(&self.db, kind, item_id, tag_id).await
    }

    async fn list_nutrition(&self, kind: ItemKind, item_id: i32) -> Result<Vec<NutritionFact>, DbError> {
        nutrition::repo::list_for_item(&self.db, kind, item_id).await
    }

    async fn add_nutrition(
        &self,
        kind: ItemKind,
        item_id: i32,
        fact: NutritionFact,
    ) -> Result<(), DbError> {
        nutrition::repo::insert(&self.db, kind, item_id, fact).await
    }
}
