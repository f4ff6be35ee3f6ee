use crate::error::{ApiError, ErrorResponse};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// DELETE /user/:id handler - Remove a record by ID
#[utoipa::path(
    delete,
    path = routes::RECORD_ITEM,
    params(
        ("id" = i64, Path, description = "Numeric ID of the record to remove")
    ),
    responses(
        (status = 200, description = "Record removed", body = MessageResponse),
        (status = 404, description = "No record with this ID", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "records"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    match state.store.delete(id).await? {
        Some(_) => {
            tracing::info!("Deleted record with ID: {}", id);
            Ok((
                StatusCode::OK,
                Json(MessageResponse {
                    message: format!("User with ID {} deleted successfully", id),
                }),
            ))
        }
        None => Err(ApiError::RecordNotFound(id)),
    }
}
