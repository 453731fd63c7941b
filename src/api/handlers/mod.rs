//! Route handlers and the error shape they share.
//!
//! Handlers parse the request, call into `roster`, and hand back a projection
//! from `roster::serialize`. Every failure path goes through [`ApiError`] so
//! status codes and bodies stay uniform across routes.

pub mod health;
pub mod hero_powers;
pub mod heroes;
pub mod powers;
pub mod root;


use crate::roster::{Entity, RosterError, ValidationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;

pub(crate) const MALFORMED_REQUEST: &str =
    "Invalid request. Content-Type must be application/json.";
pub(crate) const VALIDATION_ERRORS: &str = "validation errors";
const INTERNAL_ERROR: &str = "Internal server error";

/// Single-message error body, e.g. `{"error": "Hero not found"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Validation failure body, always `{"errors": ["validation errors"]}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(Entity),
    Validation,
    MalformedRequest,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("{entity} not found"),
                }),
            )
                .into_response(),
            Self::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    errors: vec![VALIDATION_ERRORS.to_string()],
                }),
            )
                .into_response(),
            Self::MalformedRequest => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: MALFORMED_REQUEST.to_string(),
                }),
            )
                .into_response(),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: INTERNAL_ERROR.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<RosterError> for ApiError {
    /// Database errors are logged here and never reach the client.
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::NotFound(entity) => Self::NotFound(entity),
            RosterError::Validation(reason) => {
                debug!("Validation failed: {reason}");
                Self::Validation
            }
            RosterError::Database(err) => {
                error!("Database error: {err}");
                Self::Internal
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        RosterError::Validation(err).into()
    }
}

/// Outcome of reading a JSON body.
pub(crate) enum JsonBody<T> {
    /// Well-formed JSON with the expected fields.
    Parsed(T),
    /// Well-formed JSON whose fields are missing or of the wrong type.
    Invalid,
}

/// Splits JSON extraction failures into "not JSON at all" and "JSON with bad fields".
///
/// # Errors
/// Returns [`ApiError::MalformedRequest`] when the content type is wrong or
/// the body does not parse as JSON.
pub(crate) fn read_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<JsonBody<T>, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(JsonBody::Parsed(value)),
        Err(JsonRejection::JsonDataError(err)) => {
            debug!("Unexpected JSON fields: {err}");
            Ok(JsonBody::Invalid)
        }
        Err(err) => {
            debug!("Rejected request body: {err}");
            Err(ApiError::MalformedRequest)
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        (
            status,
            serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        )
    }

    #[tokio::test]
    async fn not_found_names_the_entity() {
        assert_eq!(
            render(ApiError::NotFound(Entity::Hero)).await,
            (StatusCode::NOT_FOUND, json!({"error": "Hero not found"}))
        );
        assert_eq!(
            render(ApiError::NotFound(Entity::Power)).await,
            (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
        );
    }

    #[tokio::test]
    async fn validation_is_generic() {
        assert_eq!(
            render(ApiError::Validation).await,
            (
                StatusCode::BAD_REQUEST,
                json!({"errors": ["validation errors"]})
            )
        );
    }

    #[tokio::test]
    async fn database_errors_are_hidden() {
        let err = ApiError::from(RosterError::Database(sqlx::Error::RowNotFound));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));
    }
}
