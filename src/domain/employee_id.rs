use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies an employee. Also used as the outer key of a week's
/// assignment map, so it serializes as a bare UUID string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl AsRef<Uuid> for EmployeeId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_displays_as_bare_uuid() {
    let uuid = "5e90ca28-e1ad-4795-a190-089959c16e0b";
    let id = EmployeeId::new(Uuid::parse_str(uuid).expect(uuid));
    assert_eq!(id.to_string(), uuid, "ID does not match expected value");
    assert_eq!(id.as_ref().to_string(), uuid);
}

#[test]
fn test_rejects_non_uuid_map_keys() {
    let result = serde_json::from_str::<std::collections::BTreeMap<EmployeeId, i32>>(
        r#"{"not-an-id":1}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_serializes_as_map_key() {
    let id = EmployeeId::new(
        Uuid::parse_str("5e90ca28-e1ad-4795-a190-089959c16e0b")
            .expect("valid id"),
    );
    let mut map = std::collections::BTreeMap::new();
    map.insert(id, 1);

    let json = serde_json::to_string(&map).expect("Failed to serialize map");
    assert_eq!(json, r#"{"5e90ca28-e1ad-4795-a190-089959c16e0b":1}"#);

    let back: std::collections::BTreeMap<EmployeeId, i32> =
        serde_json::from_str(&json).expect("Failed to deserialize map");
    assert_eq!(back, map);
}
