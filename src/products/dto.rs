use serde::{Deserialize, Serialize};

use crate::{
    coerce,
    models::{ModerationStatus, NewProduct, Product},
};

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "coerce::int")]
    pub user_id: Option<i32>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            note: req.note,
            image_url: req.image_url,
            user_id: req.user_id,
            status: ModerationStatus::Pending,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedProductResponse {
    pub message: &'static str,
    pub product: Product,
}
