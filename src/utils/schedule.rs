use color_eyre::eyre::eyre;

use crate::{
    app_state::{EmployeeStoreType, WeekStoreType},
    domain::{
        Employee, EmployeeId, EmployeeStoreError, ScheduleAPIError, WeekId,
        WeekSchedule, WeekStoreError,
    },
};

#[tracing::instrument(name = "Load week schedule", skip_all)]
pub async fn load_week(
    week_store: &WeekStoreType,
    week_id: &WeekId,
) -> Result<WeekSchedule, ScheduleAPIError> {
    week_store
        .read()
        .await
        .get_week(week_id)
        .await
        .map_err(|e| match e {
            WeekStoreError::WeekNotFound => {
                ScheduleAPIError::WeekNotFound(*week_id.as_ref())
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })
}

#[tracing::instrument(name = "Load employee", skip_all)]
pub async fn load_employee(
    employee_store: &EmployeeStoreType,
    employee_id: &EmployeeId,
) -> Result<Employee, ScheduleAPIError> {
    employee_store
        .read()
        .await
        .get_employee(employee_id)
        .await
        .map_err(|e| match e {
            EmployeeStoreError::EmployeeNotFound => {
                ScheduleAPIError::EmployeeNotFound(*employee_id.as_ref())
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })
}
