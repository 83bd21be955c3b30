use super::ValidationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MORNING_TIME: &str = "06:00";
pub const DEFAULT_AFTERNOON_TIME: &str = "14:00";

const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// The seven weekday keys used in a week's assignment map, in canonical
/// order. Keys are the lowercase Italian names without accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Monday => "lunedi",
            Weekday::Tuesday => "martedi",
            Weekday::Wednesday => "mercoledi",
            Weekday::Thursday => "giovedi",
            Weekday::Friday => "venerdi",
            Weekday::Saturday => "sabato",
            Weekday::Sunday => "domenica",
        }
    }
}

/// Minutes since midnight of an "HH:MM" wall-clock string. Components are
/// not range checked, but each must fit an `i32`, which keeps every sum and
/// difference of two values well inside `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minute(i64);

impl Minute {
    pub fn from_clock(clock: &str) -> Result<Self, ValidationError> {
        let invalid =
            || ValidationError::new(format!("Invalid time of day: {clock}"));

        let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
        let hours: i32 = hours.trim().parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.trim().parse().map_err(|_| invalid())?;

        Ok(Self(i64::from(hours) * MINUTES_PER_HOUR + i64::from(minutes)))
    }

    pub fn value_of(&self) -> i64 {
        self.0
    }

    /// Minutes from `self` to `end`. An end at or before the start is read
    /// as falling on the next day, so equal times span a full 24 hours.
    pub fn until(&self, end: &Minute) -> i64 {
        let mut end = end.value_of();
        if end <= self.value_of() {
            end += MINUTES_PER_DAY;
        }
        end - self.value_of()
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ShiftCategory {
    #[default]
    #[serde(rename = "ordinarie", alias = "riposo_giorno")]
    Ordinary,
    #[serde(rename = "mutua")]
    SickLeave,
    #[serde(rename = "ferie")]
    Vacation,
    #[serde(rename = "riposo_mattino")]
    RestMorning,
    #[serde(rename = "riposo_pomeriggio")]
    RestAfternoon,
}

impl ShiftCategory {
    /// Whether this category blanks out the slot at `position`. Each rest
    /// marker only gates its own half of the day.
    pub fn rests(&self, position: SlotPosition) -> bool {
        matches!(
            (self, position),
            (ShiftCategory::RestMorning, SlotPosition::Morning)
                | (ShiftCategory::RestAfternoon, SlotPosition::Afternoon)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    Morning,
    Afternoon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSlot {
    pub start: String,
    pub end: String,
    pub category: ShiftCategory,
}

impl ShiftSlot {
    pub fn new(start: &str, end: &str, category: ShiftCategory) -> Self {
        Self {
            start: start.to_owned(),
            end: end.to_owned(),
            category,
        }
    }
}

/// Morning and afternoon slots for one employee on one day.
///
/// Stored and exchanged in the flat `mattino_*` / `pomeriggio_*` form; any
/// field left out falls back to the placeholder slot for that half of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DayAssignmentRecord", into = "DayAssignmentRecord")]
pub struct DayAssignment {
    pub morning: ShiftSlot,
    pub afternoon: ShiftSlot,
}

impl DayAssignment {
    pub fn new(morning: ShiftSlot, afternoon: ShiftSlot) -> Self {
        Self { morning, afternoon }
    }

    pub fn slots(&self) -> [(SlotPosition, &ShiftSlot); 2] {
        [
            (SlotPosition::Morning, &self.morning),
            (SlotPosition::Afternoon, &self.afternoon),
        ]
    }
}

impl Default for DayAssignment {
    fn default() -> Self {
        Self {
            morning: ShiftSlot::new(
                DEFAULT_MORNING_TIME,
                DEFAULT_MORNING_TIME,
                ShiftCategory::Ordinary,
            ),
            afternoon: ShiftSlot::new(
                DEFAULT_AFTERNOON_TIME,
                DEFAULT_AFTERNOON_TIME,
                ShiftCategory::Ordinary,
            ),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct DayAssignmentRecord {
    #[serde(rename = "mattino_inizio", default = "default_morning_time")]
    morning_start: String,
    #[serde(rename = "mattino_fine", default = "default_morning_time")]
    morning_end: String,
    #[serde(rename = "mattino_tipo", default)]
    morning_category: ShiftCategory,
    #[serde(rename = "pomeriggio_inizio", default = "default_afternoon_time")]
    afternoon_start: String,
    #[serde(rename = "pomeriggio_fine", default = "default_afternoon_time")]
    afternoon_end: String,
    #[serde(rename = "pomeriggio_tipo", default)]
    afternoon_category: ShiftCategory,
}

fn default_morning_time() -> String {
    DEFAULT_MORNING_TIME.to_owned()
}

fn default_afternoon_time() -> String {
    DEFAULT_AFTERNOON_TIME.to_owned()
}

impl From<DayAssignmentRecord> for DayAssignment {
    fn from(record: DayAssignmentRecord) -> Self {
        Self {
            morning: ShiftSlot {
                start: record.morning_start,
                end: record.morning_end,
                category: record.morning_category,
            },
            afternoon: ShiftSlot {
                start: record.afternoon_start,
                end: record.afternoon_end,
                category: record.afternoon_category,
            },
        }
    }
}

impl From<DayAssignment> for DayAssignmentRecord {
    fn from(day: DayAssignment) -> Self {
        Self {
            morning_start: day.morning.start,
            morning_end: day.morning.end,
            morning_category: day.morning.category,
            afternoon_start: day.afternoon.start,
            afternoon_end: day.afternoon.end,
            afternoon_category: day.afternoon.category,
        }
    }
}
