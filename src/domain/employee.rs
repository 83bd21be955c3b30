use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EmployeeId, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(rename = "nome")]
    pub name: EmployeeName,
    #[serde(rename = "ore_contratto")]
    pub contracted_hours: ContractedHours,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(name: EmployeeName, contracted_hours: ContractedHours) -> Self {
        Self {
            id: EmployeeId::default(),
            name,
            contracted_hours,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeName(String);

impl EmployeeName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        match name.trim().chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Employee name cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name.trim().to_owned())),
        }
    }
}

impl AsRef<String> for EmployeeName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

/// Weekly hour baseline that overtime is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractedHours(u32);

const HOURS_IN_WEEK: i64 = 168;

impl ContractedHours {
    pub fn parse(hours: i64) -> Result<Self, ValidationError> {
        match hours {
            h if h < 0 => Err(ValidationError::new(String::from(
                "Contracted hours cannot be negative",
            ))),
            h if h > HOURS_IN_WEEK => Err(ValidationError::new(format!(
                "Contracted hours cannot exceed {HOURS_IN_WEEK}"
            ))),
            h => Ok(Self(h as u32)),
        }
    }

    pub fn value_of(&self) -> u32 {
        self.0
    }
}
