use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{CreateProductRequest, CreatedProductResponse};
use crate::{
    error::{ApiResult, OrFail},
    models::Product,
    state::AppState,
};

pub fn product_routes() -> Router<AppState> {
    Router::new().route("/products", get(list_products).post(create_product))
}

#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state
        .repo
        .list_approved_products()
        .await
        .or_fail("Could not retrieve products")?;
    Ok(Json(products))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedProductResponse>)> {
    const FAILED: &str = "Could not create product";
    let payload = payload.or_fail(FAILED)?;
    let product = state
        .repo
        .create_product(payload.into())
        .await
        .or_fail(FAILED)?;

    info!(product_id = product.id, user_id = ?product.user_id, "product submitted for review");
    Ok((
        StatusCode::CREATED,
        Json(CreatedProductResponse {
            message: "Product submitted for review",
            product,
        }),
    ))
}
