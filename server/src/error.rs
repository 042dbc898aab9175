//! Error types for the todo service.
//!
//! `ServiceError` is what handlers return; its `IntoResponse` impl is the
//! single place that maps failures to status codes. Store failures are
//! logged here and reach the client only as a generic 500.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::types::ErrorBody;

/// Input that fails the field constraints of a todo.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"{field}\" is required")]
    Required { field: &'static str },

    #[error("\"{field}\" must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("\"{field}\" must be at most {max} characters long")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The document disappeared between being read and being written back.
    #[error("todo {0} no longer exists")]
    Missing(Uuid),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("todo {0} does not exist")]
    NotFound(Uuid),

    /// The highest order in use has no successor left for a new todo.
    #[error("no order is left above {0}; move the top todo down first")]
    OrderExhausted(u32),

    /// The request could not be decoded (body or path).
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing(id) => ServiceError::NotFound(id),
            other => ServiceError::Store(other),
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::OrderExhausted(_) => StatusCode::CONFLICT,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            ServiceError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                "internal server error".to_string()
            }
            other => {
                tracing::debug!(status = status.as_u16(), error = %other, "request rejected");
                other.to_string()
            }
        };
        (status, Json(ErrorBody { error_message })).into_response()
    }
}

/// Failures of the server process itself (binding, serving).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        let err = ValidationError::TooLong {
            field: "value",
            max: 50,
        };
        assert_eq!(err.to_string(), "\"value\" must be at most 50 characters long");
    }

    #[test]
    fn missing_document_maps_to_not_found() {
        let id = Uuid::new_v4();
        let err = ServiceError::from(StoreError::Missing(id));
        assert!(matches!(err, ServiceError::NotFound(found) if found == id));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn exhausted_order_maps_to_409() {
        let err = ServiceError::OrderExhausted(u32::MAX);
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unavailable_store_maps_to_500() {
        let err = ServiceError::from(StoreError::Unavailable("down".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
