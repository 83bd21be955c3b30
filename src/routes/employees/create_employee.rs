use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{ContractedHours, Employee, EmployeeName, ScheduleAPIError},
    AppState,
};

#[tracing::instrument(name = "Create employee route handler", skip_all)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ScheduleAPIError> {
    let name = EmployeeName::parse(request.name)?;
    let contracted_hours = ContractedHours::parse(request.contracted_hours)?;
    let employee = Employee::new(name, contracted_hours);

    state
        .employee_store
        .write()
        .await
        .add_employee(&employee)
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    tracing::info!(employee_id = %employee.id, "Employee created");

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Shared by create and update.
#[derive(Debug, PartialEq, Deserialize)]
pub struct EmployeeRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ore_contratto")]
    pub contracted_hours: i64,
}
