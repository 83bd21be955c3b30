use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    domain::{daily_totals, DailyTotals, EmployeeId, ScheduleAPIError, WeekId},
    utils::schedule::load_week,
    AppState,
};

/// The employee does not need to exist: an unknown id simply has no
/// assignments and gets seven zeros.
#[tracing::instrument(name = "Get daily totals route handler", skip_all)]
pub async fn get_daily_totals(
    State(state): State<AppState>,
    Path((week_id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<DailyTotals>), ScheduleAPIError> {
    let week = load_week(&state.week_store, &WeekId::new(week_id)).await?;
    let totals = daily_totals(&week, &EmployeeId::new(employee_id));

    Ok((StatusCode::OK, Json(totals)))
}
