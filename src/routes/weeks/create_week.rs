use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{ScheduleAPIError, WeekLabel, WeekSchedule},
    AppState,
};

#[tracing::instrument(name = "Create week route handler", skip_all)]
pub async fn create_week(
    State(state): State<AppState>,
    Json(request): Json<WeekRequest>,
) -> Result<(StatusCode, Json<WeekSchedule>), ScheduleAPIError> {
    let label = WeekLabel::parse(request.label)?;
    let week = WeekSchedule::new(label, request.start, request.end)?;

    state
        .week_store
        .write()
        .await
        .add_week(&week)
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    tracing::info!(week_id = %week.id.as_ref(), "Week created");

    Ok((StatusCode::CREATED, Json(week)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct WeekRequest {
    #[serde(rename = "nome")]
    pub label: String,
    #[serde(rename = "inizio")]
    pub start: NaiveDate,
    #[serde(rename = "fine")]
    pub end: NaiveDate,
}
