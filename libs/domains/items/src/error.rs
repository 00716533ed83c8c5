use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// A duplicate name is answered with a bare 409; every other failure uses
/// the standard JSON error body.
impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            ItemError::DuplicateName(name) => {
                tracing::info!(item_name = %name, "Rejected duplicate item name");
                StatusCode::CONFLICT.into_response()
            }
            ItemError::Validation(msg) => AppError::BadRequest(msg).into_response(),
            ItemError::Storage(e) => AppError::Database(e).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_duplicate_name_is_409_with_empty_body() {
        let response = ItemError::DuplicateName("iron shield".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn test_duplicate_name_has_no_json_content_type() {
        let response = ItemError::DuplicateName("iron shield".to_string()).into_response();
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ItemError::Validation("name: length".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_failure_maps_to_5xx() {
        let response = ItemError::from(DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ItemError::from(DbErr::ConnectionAcquire(
            sea_orm::ConnAcquireErr::Timeout,
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
