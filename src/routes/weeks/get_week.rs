use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    domain::{ScheduleAPIError, WeekId, WeekSchedule},
    utils::schedule::load_week,
    AppState,
};

#[tracing::instrument(name = "Get week route handler", skip_all)]
pub async fn get_week(
    State(state): State<AppState>,
    Path(week_id): Path<Uuid>,
) -> Result<(StatusCode, Json<WeekSchedule>), ScheduleAPIError> {
    let week = load_week(&state.week_store, &WeekId::new(week_id)).await?;

    Ok((StatusCode::OK, Json(week)))
}
