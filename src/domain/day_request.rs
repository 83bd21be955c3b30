use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeName;

/// An employee asking for part or all of a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRequest {
    pub id: DayRequestId,
    #[serde(rename = "dipendente_nome")]
    pub employee_name: EmployeeName,
    #[serde(rename = "giorno")]
    pub day: NaiveDate,
    #[serde(rename = "fascia")]
    pub period: DayPeriod,
    pub created_at: DateTime<Utc>,
}

impl DayRequest {
    pub fn new(
        employee_name: EmployeeName,
        day: NaiveDate,
        period: DayPeriod,
    ) -> Self {
        Self {
            id: DayRequestId::default(),
            employee_name,
            day,
            period,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPeriod {
    #[serde(rename = "mattino")]
    Morning,
    #[serde(rename = "pomeriggio")]
    Afternoon,
    #[serde(rename = "giorno")]
    WholeDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayRequestId(Uuid);

impl DayRequestId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for DayRequestId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl AsRef<Uuid> for DayRequestId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[test]
fn test_day_request_document_field_names() {
    let request = DayRequest::new(
        EmployeeName::parse("Marco".to_string()).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
        DayPeriod::WholeDay,
    );
    let document = serde_json::to_value(&request).unwrap();

    assert_eq!(document["dipendente_nome"], "Marco");
    assert_eq!(document["giorno"], "2024-03-08");
    assert_eq!(document["fascia"], "giorno");
}
