use super::{
    AppConfig, Assignments, ConfigUpdate, DayRequest, DayRequestId, Employee,
    EmployeeId, Guide, GuideCategory, GuideId, WeekId, WeekSchedule,
};
use color_eyre::eyre::Report;
use thiserror::Error;

#[async_trait::async_trait]
pub trait EmployeeStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeStoreError>;
    async fn add_employee(
        &mut self,
        employee: &Employee,
    ) -> Result<(), EmployeeStoreError>;
    async fn get_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Employee, EmployeeStoreError>;
    async fn update_employee(
        &mut self,
        employee: &Employee,
    ) -> Result<(), EmployeeStoreError>;
    async fn delete_employee(
        &mut self,
        employee_id: &EmployeeId,
    ) -> Result<(), EmployeeStoreError>;
}

#[derive(Debug, Error)]
pub enum EmployeeStoreError {
    #[error("Employee ID exists")]
    EmployeeIDExists,
    #[error("Employee not found")]
    EmployeeNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for EmployeeStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::EmployeeIDExists, Self::EmployeeIDExists)
                | (Self::EmployeeNotFound, Self::EmployeeNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait WeekStore {
    async fn list_weeks(&self) -> Result<Vec<WeekSchedule>, WeekStoreError>;
    async fn add_week(&mut self, week: &WeekSchedule)
        -> Result<(), WeekStoreError>;
    async fn get_week(
        &self,
        week_id: &WeekId,
    ) -> Result<WeekSchedule, WeekStoreError>;
    async fn update_assignments(
        &mut self,
        week_id: &WeekId,
        assignments: Assignments,
    ) -> Result<(), WeekStoreError>;
    async fn delete_week(&mut self, week_id: &WeekId)
        -> Result<(), WeekStoreError>;
}

#[derive(Debug, Error)]
pub enum WeekStoreError {
    #[error("Week ID exists")]
    WeekIDExists,
    #[error("Week not found")]
    WeekNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for WeekStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::WeekIDExists, Self::WeekIDExists)
                | (Self::WeekNotFound, Self::WeekNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait DayRequestStore {
    async fn list_requests(&self) -> Result<Vec<DayRequest>, DayRequestStoreError>;
    async fn add_request(
        &mut self,
        request: &DayRequest,
    ) -> Result<(), DayRequestStoreError>;
    async fn delete_request(
        &mut self,
        request_id: &DayRequestId,
    ) -> Result<(), DayRequestStoreError>;
}

#[derive(Debug, Error)]
pub enum DayRequestStoreError {
    #[error("Request not found")]
    RequestNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for DayRequestStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::RequestNotFound, Self::RequestNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait GuideStore {
    async fn list_guides(&self) -> Result<Vec<Guide>, GuideStoreError>;
    async fn list_guides_by_category(
        &self,
        category: GuideCategory,
    ) -> Result<Vec<Guide>, GuideStoreError>;
    async fn add_guide(&mut self, guide: &Guide) -> Result<(), GuideStoreError>;
    async fn delete_guide(
        &mut self,
        guide_id: &GuideId,
    ) -> Result<(), GuideStoreError>;
}

#[derive(Debug, Error)]
pub enum GuideStoreError {
    #[error("Guide not found")]
    GuideNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for GuideStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::GuideNotFound, Self::GuideNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Holds the single configuration record. Implementations are built with a
/// default record that `get_config` stores the first time it finds none.
#[async_trait::async_trait]
pub trait ConfigStore {
    async fn get_config(&mut self) -> Result<AppConfig, ConfigStoreError>;
    async fn update_config(
        &mut self,
        update: ConfigUpdate,
    ) -> Result<AppConfig, ConfigStoreError>;
}

#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Invalid configuration")]
    InvalidConfig(#[from] super::ValidationError),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for ConfigStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidConfig(_), Self::InvalidConfig(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
