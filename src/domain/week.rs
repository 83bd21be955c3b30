use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{DayAssignment, EmployeeId, ValidationError};

/// Weekday name → slots. Keys are kept exactly as supplied by the client.
pub type WeekdayAssignments = BTreeMap<String, DayAssignment>;

/// Employee → weekday name → slots.
pub type Assignments = BTreeMap<EmployeeId, WeekdayAssignments>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub id: WeekId,
    #[serde(rename = "nome")]
    pub label: WeekLabel,
    #[serde(rename = "inizio")]
    pub start: NaiveDate,
    #[serde(rename = "fine")]
    pub end: NaiveDate,
    #[serde(rename = "orari", default)]
    pub assignments: Assignments,
    pub created_at: DateTime<Utc>,
}

impl WeekSchedule {
    pub fn new(
        label: WeekLabel,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::new(String::from(
                "Week start date must not be after its end date",
            )));
        }

        Ok(Self {
            id: WeekId::default(),
            label,
            start,
            end,
            assignments: Assignments::new(),
            created_at: Utc::now(),
        })
    }

    pub fn assignments_for(
        &self,
        employee_id: &EmployeeId,
    ) -> Option<&WeekdayAssignments> {
        self.assignments.get(employee_id)
    }

    /// Each employee present in `update` replaces that employee's whole
    /// weekday map; employees not mentioned keep what they had.
    pub fn merge_assignments(&mut self, update: Assignments) {
        self.assignments.extend(update);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekId(Uuid);

impl WeekId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for WeekId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl AsRef<Uuid> for WeekId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

/// Display label such as "Settimana 15/01 - 21/01 2024".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekLabel(String);

impl WeekLabel {
    pub fn parse(label: String) -> Result<Self, ValidationError> {
        match label.trim().chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Week label cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max label length is 255 characters".to_string(),
            )),
            _ => Ok(Self(label.trim().to_owned())),
        }
    }
}

impl AsRef<String> for WeekLabel {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
