use color_eyre::eyre::Report;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ScheduleAPIError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(Uuid),
    #[error("Week not found: {0}")]
    WeekNotFound(Uuid),
    #[error("Request not found: {0}")]
    RequestNotFound(Uuid),
    #[error("Guide not found: {0}")]
    GuideNotFound(Uuid),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
