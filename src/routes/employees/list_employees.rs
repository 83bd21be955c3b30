use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Employee, ScheduleAPIError},
    AppState,
};

#[tracing::instrument(name = "List employees route handler", skip_all)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Employee>>), ScheduleAPIError> {
    let employees = state
        .employee_store
        .read()
        .await
        .list_employees()
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(employees)))
}
