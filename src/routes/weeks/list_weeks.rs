use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{ScheduleAPIError, WeekSchedule},
    AppState,
};

#[tracing::instrument(name = "List weeks route handler", skip_all)]
pub async fn list_weeks(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<WeekSchedule>>), ScheduleAPIError> {
    let weeks = state
        .week_store
        .read()
        .await
        .list_weeks()
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(weeks)))
}
