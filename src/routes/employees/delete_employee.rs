use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use uuid::Uuid;

use crate::{
    domain::{EmployeeId, EmployeeStoreError, ScheduleAPIError},
    routes::MessageResponse,
    AppState,
};

#[tracing::instrument(name = "Delete employee route handler", skip_all)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ScheduleAPIError> {
    let employee_id = EmployeeId::new(employee_id);

    state
        .employee_store
        .write()
        .await
        .delete_employee(&employee_id)
        .await
        .map_err(|e| match e {
            EmployeeStoreError::EmployeeNotFound => {
                ScheduleAPIError::EmployeeNotFound(*employee_id.as_ref())
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Dipendente eliminato")),
    ))
}
