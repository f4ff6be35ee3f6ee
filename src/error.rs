use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
///
/// `errors` carries itemized validation messages and is omitted from the
/// JSON for every other failure class.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each user-visible failure class to its HTTP status code and a
/// JSON body, keeping error shapes consistent across handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Request body does not match the record shape
    Validation(Vec<String>),
    /// Create with an ID already present in the collection
    DuplicateId(i64),
    /// Update or delete on an ID not in the collection
    RecordNotFound(i64),
    /// Store failure that should not leak detail to the client
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "bad request. some data is incorrect.".to_string(),
                Some(errors),
            ),
            ApiError::DuplicateId(id) => {
                tracing::debug!("Duplicate ID rejected: {}", id);
                (StatusCode::BAD_REQUEST, "ID must be unique".to_string(), None)
            }
            ApiError::RecordNotFound(id) => {
                tracing::debug!("No record with ID: {}", id);
                (StatusCode::NOT_FOUND, "User not found".to_string(), None)
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse { message, errors });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_carries_itemized_errors() {
        let response =
            ApiError::Validation(vec!["ID must be a number".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "bad request. some data is incorrect.");
        assert_eq!(json["errors"][0], "ID must be a number");
    }

    #[tokio::test]
    async fn test_duplicate_id_omits_errors_field() {
        let response = ApiError::DuplicateId(1).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "ID must be unique");
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = ApiError::RecordNotFound(9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let response = ApiError::Internal(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        // Detail stays in the log, not the client response
        assert_eq!(json["message"], "Something went wrong!");
    }
}
