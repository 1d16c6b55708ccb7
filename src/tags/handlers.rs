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

use super::dto::AddTagRequest;
use crate::{
    error::{ApiResult, OrFail},
    models::{ItemKind, MessageResponse, Tag},
    state::AppState,
};

type IdPath = Result<Path<i32>, PathRejection>;
type TagBody = Result<Json<AddTagRequest>, JsonRejection>;

/// `/meals/:id/tags` and `/products/:id/tags`.
pub fn tag_routes() -> Router<AppState> {
    ItemKind::ALL.into_iter().fold(Router::new(), |router, kind| {
        router.route(
            &format!("/{}/:id/tags", kind.segment()),
            get(move |state: State<AppState>, path: IdPath| list_tags(state, path, kind)).post(
                move |state: State<AppState>, path: IdPath, body: TagBody| {
                    add_tag(state, path, body, kind)
                },
            ),
        )
    })
}

#[instrument(skip(state, path))]
pub async fn list_tags(
    State(state): State<AppState>,
    path: IdPath,
    kind: ItemKind,
) -> ApiResult<Json<Vec<Tag>>> {
    let failed = kind.tags_fetch_failed();
    let id = path.or_fail(failed)?;
    let tags = state.repo.list_tags(kind, id).await.or_fail(failed)?;
    Ok(Json(tags))
}

#[instrument(skip(state, path, payload))]
pub async fn add_tag(
    State(state): State<AppState>,
    path: IdPath,
    payload: TagBody,
    kind: ItemKind,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let failed = kind.tag_add_failed();
    let id = path.or_fail(failed)?;
    let payload = payload.or_fail(failed)?;
    state
        .repo
        .add_tag(kind, id, payload.tag_id)
        .await
        .or_fail(failed)?;

    info!(%kind, item_id = id, tag_id = ?payload.tag_id, "tag linked");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: kind.tag_added(),
        }),
    ))
}
