use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use uuid::Uuid;

use crate::{
    domain::{Assignments, ScheduleAPIError, WeekId, WeekStoreError},
    routes::MessageResponse,
    AppState,
};

/// Each employee present in the body replaces that employee's stored
/// days; employees absent from the body are left alone.
#[tracing::instrument(name = "Update week assignments route handler", skip_all)]
pub async fn update_assignments(
    State(state): State<AppState>,
    Path(week_id): Path<Uuid>,
    Json(assignments): Json<Assignments>,
) -> Result<(StatusCode, Json<MessageResponse>), ScheduleAPIError> {
    let employees = assignments.len();

    state
        .week_store
        .write()
        .await
        .update_assignments(&WeekId::new(week_id), assignments)
        .await
        .map_err(|e| match e {
            WeekStoreError::WeekNotFound => {
                ScheduleAPIError::WeekNotFound(week_id)
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })?;

    tracing::info!(%week_id, employees, "Week assignments updated");

    Ok((StatusCode::OK, Json(MessageResponse::new("Orari aggiornati"))))
}
