use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A failed operation, answered with a fixed message and no detail.
    #[error("{0}")]
    Failed(&'static str),
    /// Body that is not JSON at all; the only input error answered with 400.
    #[error(transparent)]
    MalformedJson(JsonRejection),
}

impl ApiError {
    pub fn failed(message: &'static str) -> Self {
        ApiError::Failed(message)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Failed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
            ApiError::MalformedJson(rejection) => rejection.into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Attaches a route's fixed failure message to a fallible step.
pub trait OrFail<T> {
    fn or_fail(self, message: &'static str) -> ApiResult<T>;
}

impl<T> OrFail<T> for Result<T, DbError> {
    fn or_fail(self, message: &'static str) -> ApiResult<T> {
        // cause already logged by the gateway
        self.map_err(|_| ApiError::failed(message))
    }
}

/// A path value the database could not have coerced either (e.g. `abc` or an
/// out-of-range id) fails like the query would.
impl<T> OrFail<T> for Result<Path<T>, PathRejection> {
    fn or_fail(self, message: &'static str) -> ApiResult<T> {
        match self {
            Ok(Path(value)) => Ok(value),
            Err(rejection) => {
                warn!(error = %rejection, "path value not coercible");
                Err(ApiError::failed(message))
            }
        }
    }
}

/// Syntax errors stay 400. A request without a JSON content type reads as an
/// empty object, and fields of the wrong shape fail with the route message.
impl<T: Default> OrFail<T> for Result<Json<T>, JsonRejection> {
    fn or_fail(self, message: &'static str) -> ApiResult<T> {
        match self {
            Ok(Json(value)) => Ok(value),
            Err(rejection @ JsonRejection::JsonSyntaxError(_)) => {
                warn!(error = %rejection, "malformed json body");
                Err(ApiError::MalformedJson(rejection))
            }
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
            Err(rejection) => {
                warn!(error = %rejection, "json body not coercible");
                Err(ApiError::failed(message))
            }
        }
    }
}
