use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{DayPeriod, DayRequest, EmployeeName, ScheduleAPIError},
    AppState,
};

#[tracing::instrument(name = "Create day request route handler", skip_all)]
pub async fn create_request(
    State(state): State<AppState>,
    Json(body): Json<DayRequestBody>,
) -> Result<(StatusCode, Json<DayRequest>), ScheduleAPIError> {
    let employee_name = EmployeeName::parse(body.employee_name)?;
    let request = DayRequest::new(employee_name, body.day, body.period);

    state
        .day_request_store
        .write()
        .await
        .add_request(&request)
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::CREATED, Json(request)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct DayRequestBody {
    #[serde(rename = "dipendente_nome")]
    pub employee_name: String,
    #[serde(rename = "giorno")]
    pub day: NaiveDate,
    #[serde(rename = "fascia")]
    pub period: DayPeriod,
}
