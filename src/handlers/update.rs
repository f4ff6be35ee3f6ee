use crate::error::{ApiError, ErrorResponse};
use crate::models::{MessageResponse, RecordPatch};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// PUT /user/:id handler - Update a record by ID
///
/// Provided fields overwrite the stored record shallowly; unspecified
/// fields are retained. The ID in the path is authoritative and a record
/// cannot be re-keyed.
#[utoipa::path(
    put,
    path = routes::RECORD_ITEM,
    params(
        ("id" = i64, Path, description = "Numeric ID of the record to update")
    ),
    request_body = RecordPatch,
    responses(
        (status = 200, description = "Record updated", body = MessageResponse),
        (status = 404, description = "No record with this ID", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "records"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<RecordPatch>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    match state.store.update(id, patch).await? {
        Some(_) => {
            tracing::info!("Updated record with ID: {}", id);
            Ok((
                StatusCode::OK,
                Json(MessageResponse {
                    message: format!("User with ID {} updated successfully", id),
                }),
            ))
        }
        None => Err(ApiError::RecordNotFound(id)),
    }
}
