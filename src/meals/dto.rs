use serde::{Deserialize, Serialize};

use crate::{
    coerce,
    models::{Meal, ModerationStatus, NewMeal},
};

/// Request body for a meal submission. Missing fields are stored as NULL.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMealRequest {
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub preparation_description: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "coerce::int")]
    pub user_id: Option<i32>,
}

impl From<CreateMealRequest> for NewMeal {
    fn from(req: CreateMealRequest) -> Self {
        Self {
            name: req.name,
            preparation_description: req.preparation_description,
            note: req.note,
            image_url: req.image_url,
            user_id: req.user_id,
            // submissions always wait for moderation
            status: ModerationStatus::Pending,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedMealResponse {
    pub message: &'static str,
    pub meal: Meal,
}
