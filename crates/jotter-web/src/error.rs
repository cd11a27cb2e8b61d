use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jotter_core::NotesError;
use serde_json::json;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Notes(#[from] NotesError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for WebError {
    /// Map errors to status codes and `{"message": ...}` bodies.
    ///
    /// Validation and not-found errors carry their message to the caller;
    /// everything else is logged and returned as an opaque server error so
    /// internal detail never leaks.
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::Notes(NotesError::Validation(message)) => {
                (StatusCode::BAD_REQUEST, message)
            }
            WebError::Notes(NotesError::NotFound(message)) => (StatusCode::NOT_FOUND, message),
            other => {
                tracing::error!("request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_the_message() {
        let response = WebError::from(NotesError::Validation(
            "Title and content are required".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            WebError::from(NotesError::NotFound("Note not found".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_errors_map_to_opaque_500() {
        let response =
            WebError::from(NotesError::Store("secret detail".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
