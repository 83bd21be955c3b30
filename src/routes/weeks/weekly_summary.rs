use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    domain::{weekly_summary, EmployeeId, ScheduleAPIError, WeekId, WeeklySummary},
    utils::schedule::{load_employee, load_week},
    AppState,
};

#[tracing::instrument(name = "Get weekly summary route handler", skip_all)]
pub async fn get_weekly_summary(
    State(state): State<AppState>,
    Path((week_id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<WeeklySummary>), ScheduleAPIError> {
    let week = load_week(&state.week_store, &WeekId::new(week_id)).await?;
    let employee =
        load_employee(&state.employee_store, &EmployeeId::new(employee_id))
            .await?;

    Ok((StatusCode::OK, Json(weekly_summary(&week, &employee))))
}
