use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{CreateMealRequest, CreatedMealResponse};
use crate::{
    error::{ApiResult, OrFail},
    models::Meal,
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new().route("/meals", get(list_meals).post(create_meal))
}

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> ApiResult<Json<Vec<Meal>>> {
    let meals = state
        .repo
        .list_approved_meals()
        .await
        .or_fail("Could not retrieve meals")?;
    Ok(Json(meals))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    payload: Result<Json<CreateMealRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedMealResponse>)> {
    const FAILED: &str = "Could not create meal";
    let payload = payload.or_fail(FAILED)?;
    let meal = state.repo.create_meal(payload.into()).await.or_fail(FAILED)?;

    info!(meal_id = meal.id, user_id = ?meal.user_id, "meal submitted for review");
    Ok((
        StatusCode::CREATED,
        Json(CreatedMealResponse {
            message: "Meal submitted for review",
            meal,
        }),
    ))
}
