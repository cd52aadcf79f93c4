use std::sync::LazyLock;

use axum::{http::StatusCode, response::IntoResponse};
use repository::RepositoryError;
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::ApiError;

static ERROR_CODES: LazyLock<Map<String, Value>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("error-code.json")).unwrap_or_default()
});

pub fn error_message(error_code: &str) -> String {
    ERROR_CODES
        .get(error_code)
        .and_then(Value::as_str)
        .unwrap_or("Unexpected error")
        .to_string()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::AuthError(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::ClientError(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status_code, message).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

/// The error kind picks the status, `error_code` picks the message shown
/// for storage failures.
impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| match e {
            RepositoryError::Validation(reason) => {
                warn!(task = "validate", code = error_code, reason = %reason);
                ApiError::ClientError(reason)
            }
            RepositoryError::NotFound(id) => {
                warn!(task = "lookup", code = error_code, id, "not found");
                ApiError::NotFound(error_message("404-001"))
            }
            e @ RepositoryError::InSeaOrmDbErr { .. } => {
                error!(task = "storage", code = error_code, error = e.to_string());
                ApiError::ServerError(error_message(error_code))
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(error_message("404-001"), "Content not found");
        assert_eq!(error_message("999-999"), "Unexpected error");
    }

    #[test]
    fn test_repository_errors_map_to_status() {
        // Arrange
        let validation: Result<(), _> =
            Err(RepositoryError::Validation("title is empty".to_string()));
        let not_found: Result<(), _> = Err(RepositoryError::NotFound(3));
        let storage: Result<(), _> = Err(RepositoryError::InSeaOrmDbErr {
            message: "in content insert".to_string(),
            source: sea_orm_err(),
        });

        // Act
        let statuses: Vec<_> = [validation, not_found, storage]
            .into_iter()
            .map(|result| {
                let err = IntoApiResponse::into_response(result, "500-003")
                    .unwrap_err();
                IntoResponse::into_response(err).status()
            })
            .collect();

        // Assert
        assert_eq!(
            statuses,
            vec![
                StatusCode::BAD_REQUEST,
                StatusCode::NOT_FOUND,
                StatusCode::INTERNAL_SERVER_ERROR
            ]
        );
    }

    fn sea_orm_err() -> repository::DbErr {
        repository::DbErr::Custom("disk I/O error".to_string())
    }
}
