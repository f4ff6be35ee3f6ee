use crate::error::{ApiError, ErrorResponse};
use crate::models::Record;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET / handler - List all records
///
/// Re-reads the entire backing file and echoes the collection as a bare
/// JSON array, in insertion order.
#[utoipa::path(
    get,
    path = routes::RECORDS,
    responses(
        (status = 200, description = "Full collection of records", body = Vec<Record>),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "records"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Record>>), ApiError> {
    let records = state.store.list().await?;

    tracing::debug!("Listed {} records", records.len());
    Ok((StatusCode::OK, Json(records)))
}
