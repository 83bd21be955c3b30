use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use uuid::Uuid;

use super::EmployeeRequest;
use crate::{
    domain::{
        ContractedHours, Employee, EmployeeId, EmployeeName,
        EmployeeStoreError, ScheduleAPIError,
    },
    AppState,
};

#[tracing::instrument(name = "Update employee route handler", skip_all)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ScheduleAPIError> {
    let employee_id = EmployeeId::new(employee_id);
    let name = EmployeeName::parse(request.name)?;
    let contracted_hours = ContractedHours::parse(request.contracted_hours)?;

    let map_store_error = |e: EmployeeStoreError| match e {
        EmployeeStoreError::EmployeeNotFound => {
            ScheduleAPIError::EmployeeNotFound(*employee_id.as_ref())
        }
        e => ScheduleAPIError::UnexpectedError(eyre!(e)),
    };

    let mut employee_store = state.employee_store.write().await;
    let mut employee = employee_store
        .get_employee(&employee_id)
        .await
        .map_err(map_store_error)?;

    employee.name = name;
    employee.contracted_hours = contracted_hours;

    employee_store
        .update_employee(&employee)
        .await
        .map_err(map_store_error)?;

    Ok((StatusCode::OK, Json(employee)))
}
