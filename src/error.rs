use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mongodb::bson::oid::ObjectId;

/// Error type shared by every route handler.
///
/// Maps each failure to its HTTP status: a malformed path id is the
/// client's fault (400), a missing recipe is a normal outcome (404), and
/// store or template failures are server errors (500) whose details are
/// logged but never shown to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Path id that does not parse as an ObjectId
    InvalidId(String),
    /// No recipe with this id in the store
    RecipeNotFound(ObjectId),
    /// Store operation failed
    DatabaseError(anyhow::Error),
    /// Template rendering failed
    RenderError(handlebars::RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid recipe id: '{}'", id),
            ),
            ApiError::RecipeNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Recipe not found: {}", id))
            }
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            ApiError::RenderError(err) => {
                tracing::error!("Template render error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        ApiError::RenderError(err)
    }
}
