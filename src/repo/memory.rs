use std::sync::Mutex;

use async_trait::async_trait;

use super::FoodRepository;
use crate::{
    db::DbError,
    models::{ItemKind, Meal, ModerationStatus, NewMeal, NewProduct, NutritionFact, Product, Tag},
};

#[derive(Default)]
struct Store {
    meals: Vec<Meal>,
    products: Vec<Product>,
    tags: Vec<Tag>,
    meal_tags: Vec<(i32, i32)>,
    product_tags: Vec<(i32, i32)>,
    nutrition: Vec<(&'static str, i32, NutritionFact)>,
}

/// In-memory stand-in for PostgreSQL used by the router tests.
#[derive(Default)]
pub struct MemoryRepository {
    store: Mutex<Store>,
    failing: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails like a lost database connection.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn seed_meal(&self, id: i32, name: &str, status: ModerationStatus) {
        self.store.lock().unwrap().meals.push(Meal {
            id,
            name: Some(name.into()),
            preparation_description: None,
            note: None,
            image_url: None,
            user_id: Some(1),
            status: status.as_str().into(),
        });
    }

    pub fn seed_product(&self, id: i32, name: &str, status: ModerationStatus) {
        self.store.lock().unwrap().products.push(Product {
            id,
            name: Some(name.into()),
            note: None,
            image_url: None,
            user_id: Some(1),
            status: status.as_str().into(),
        });
    }

    pub fn seed_tag(&self, id: i32, name: &str, color_code: &str) {
        self.store.lock().unwrap().tags.push(Tag {
            id,
            name: Some(name.into()),
            color_code: Some(color_code.into()),
        });
    }

    pub fn seed_unnamed_tag(&self, id: i32) {
        self.store.lock().unwrap().tags.push(Tag {
            id,
            name: None,
            color_code: None,
        });
    }

    /// Raw nutrition rows as `(item_type, item_id, key)`.
    pub fn nutrition_rows(&self) -> Vec<(&'static str, i32, Option<String>)> {
        self.store
            .lock()
            .unwrap()
            .nutrition
            .iter()
            .map(|(t, id, f)| (*t, *id, f.key.clone()))
            .collect()
    }

    fn check(&self) -> Result<(), DbError> {
        if self.failing {
            Err(DbError::OperationFailed)
        } else {
            Ok(())
        }
    }
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

#[async_trait]
impl FoodRepository for MemoryRepository {
    async fn list_approved_meals(&self) -> Result<Vec<Meal>, DbError> {
        self.check()?;
        let mut rows: Vec<Meal> = self
            .store
            .lock()
            .unwrap()
            .meals
            .iter()
            .filter(|m| m.status == ModerationStatus::Approved.as_str())
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.id);
        Ok(rows)
    }

    async fn create_meal(&self, meal: NewMeal) -> Result<Meal, DbError> {
        self.check()?;
        let mut store = self.store.lock().unwrap();
        let row = Meal {
            id: next_id(store.meals.iter().map(|m| m.id)),
            name: meal.name,
            preparation_description: meal.preparation_description,
            note: meal.note,
            image_url: meal.image_url,
            user_id: meal.user_id,
            status: meal.status.as_str().into(),
        };
        store.meals.push(row.clone());
        Ok(row)
    }

    async fn list_approved_products(&self) -> Result<Vec<Product>, DbError> {
        self.check()?;
        let mut rows: Vec<Product> = self
            .store
            .lock()
            .unwrap()
            .products
            .iter()
            .filter(|p| p.status == ModerationStatus::Approved.as_str())
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError> {
        self.check()?;
        let mut store = self.store.lock().unwrap();
        let row = Product {
            id: next_id(store.products.iter().map(|p| p.id)),
            name: product.name,
            note: product.note,
            image_url: product.image_url,
            user_id: product.user_id,
            status: product.status.as_str().into(),
        };
        store.products.push(row.clone());
        Ok(row)
    }

    async fn list_tags(&self, kind: ItemKind, item_id: i32) -> Result<Vec<Tag>, DbError> {
        self.check()?;
        let store = self.store.lock().unwrap();
        let links = match kind {
            ItemKind::Meal => &store.meal_tags,
            ItemKind::Product => &store.product_tags,
        };
        let rows = links
            .iter()
            .filter(|(owner, _)| *owner == item_id)
            .filter_map(|(_, tag_id)| store.tags.iter().find(|t| t.id == *tag_id).cloned())
            .collect();
        Ok(rows)
    }

    async fn add_tag(&self, kind: ItemKind, item_id: i32, tag_id: Option<i32>) -> Result<(), DbError> {
        self.check()?;
        // NOT NULL on the join column
        let tag_id = tag_id.ok_or(DbError::OperationFailed)?;
        let mut store = self.store.lock().unwrap();
        match kind {
            ItemKind::Meal => store.meal_tags.push((item_id, tag_id)),
            ItemKind::Product => store.product_tags.push((item_id, tag_id)),
        }
        Ok(())
    }

    async fn list_nutrition(&self, kind: ItemKind, item_id: i32) -> Result<Vec<NutritionFact>, DbError> {
        self.check()?;
        let rows = self
            .store
            .lock()
            .unwrap()
            .nutrition
            .iter()
            .filter(|(t, id, _)| *t == kind.item_type() && *id == item_id)
            .map(|(_, _, fact)| fact.clone())
            .collect();
        Ok(rows)
    }

    async fn add_nutrition(
        &self,
        kind: ItemKind,
        item_id: i32,
        fact: NutritionFact,
    ) -> Result<(), DbError> {
        self.check()?;
        self.store
            .lock()
            .unwrap()
            .nutrition
            .push((kind.item_type(), item_id, fact));
        Ok(())
    }
}
