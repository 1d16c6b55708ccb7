use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::Database;
use crate::repo::{FoodRepository, PgRepository};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn FoodRepository>,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db = Database::connect(&config.database).await?;
        Ok(Self::from_parts(Arc::new(PgRepository::new(db))))
    }

    pub fn from_parts(repo: Arc<dyn FoodRepository>) -> Self {
        Self { repo }
    }
}
