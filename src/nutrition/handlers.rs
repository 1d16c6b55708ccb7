use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::AddNutritionRequest;
use crate::{
    error::{ApiResult, OrFail},
    models::{ItemKind, MessageResponse, NutritionFact},
    state::AppState,
};

const FETCH_FAILED: &str = "Could not retrieve nutritional facts";
const ADD_FAILED: &str = "Could not add nutritional fact";

type IdPath = Result<Path<i32>, PathRejection>;
type NutritionBody = Result<Json<AddNutritionRequest>, JsonRejection>;

/// `/:type/:id/nutrition` for every [`ItemKind`]; other segments are not routed.
pub fn nutrition_routes() -> Router<AppState> {
    ItemKind::ALL.into_iter().fold(Router::new(), |router, kind| {
        router.route(
            &format!("/{}/:id/nutrition", kind.segment()),
            get(move |state: State<AppState>, path: IdPath| list_nutrition(state, path, kind)).post(
                move |state: State<AppState>, path: IdPath, body: NutritionBody| {
                    add_nutrition(state, path, body, kind)
                },
            ),
        )
    })
}

#[instrument(skip(state, path))]
pub async fn list_nutrition(
    State(state): State<AppState>,
    path: IdPath,
    kind: ItemKind,
) -> ApiResult<Json<Vec<NutritionFact>>> {
    let id = path.or_fail(FETCH_FAILED)?;
    let facts = state.repo.list_nutrition(kind, id).await.or_fail(FETCH_FAILED)?;
    Ok(Json(facts))
}

#[instrument(skip(state, path, payload))]
pub async fn add_nutrition(
    State(state): State<AppState>,
    path: IdPath,
    payload: NutritionBody,
    kind: ItemKind,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let id = path.or_fail(ADD_FAILED)?;
    let fact: NutritionFact = payload.or_fail(ADD_FAILED)?.into();
    let key = fact.key.clone();
    state
        .repo
        .add_nutrition(kind, id, fact)
        .await
        .or_fail(ADD_FAILED)?;

    info!(%kind, item_id = id, key = ?key, "nutritional fact added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Nutritional fact added",
        }),
    ))
}
