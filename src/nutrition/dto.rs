use serde::Deserialize;

use crate::{coerce, models::NutritionFact};

#[derive(Debug, Default, Deserialize)]
pub struct AddNutritionRequest {
    #[serde(default, deserialize_with = "coerce::text")]
    pub key: Option<String>,
    /// Numbers are accepted and stored as their text, e.g. `250` → `"250"`.
    #[serde(default, deserialize_with = "coerce::text")]
    pub value: Option<String>,
}

impl From<AddNutritionRequest> for NutritionFact {
    fn from(req: AddNutritionRequest) -> Self {
        Self {
            key: req.key,
            value: req.value,
        }
    }
}
