use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{DayRequest, ScheduleAPIError},
    AppState,
};

#[tracing::instrument(name = "List day requests route handler", skip_all)]
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<DayRequest>>), ScheduleAPIError> {
    let requests = state
        .day_request_store
        .read()
        .await
        .list_requests()
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(requests)))
}
