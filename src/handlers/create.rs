use crate::error::{ApiError, ErrorResponse};
use crate::models::{MessageResponse, Record};
use crate::routes;
use crate::state::AppState;
use crate::validation::validate_record;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value as JsonValue;

/// POST / handler - Create a record
///
/// The body is taken as raw JSON so the validator can report every shape
/// failure at once instead of stopping at the first serde error. Only a
/// body that passes all six checks is deserialized and appended.
#[utoipa::path(
    post,
    path = routes::RECORDS,
    request_body = Record,
    responses(
        (status = 201, description = "Record appended to the collection", body = MessageResponse),
        (status = 400, description = "Validation failure or duplicate ID", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "records"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let errors = validate_record(&body);
    if !errors.is_empty() {
        tracing::debug!("Rejected create, {} validation errors", errors.len());
        return Err(ApiError::Validation(errors));
    }

    // Shape is verified above, so this cannot fail on well-formed input
    let record: Record =
        serde_json::from_value(body).map_err(|e| ApiError::Internal(e.into()))?;
    let id = record.id;

    if !state.store.create(record).await? {
        return Err(ApiError::DuplicateId(id));
    }

    tracing::info!("Created record with ID: {}", id);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User added successfully".to_string(),
        }),
    ))
}
