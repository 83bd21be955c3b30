//! Time accounting for a week of shift assignments.
//!
//! Everything here is a pure function of an already loaded week (and
//! employee, for the weekly summary). Looking those records up, and failing
//! when they are missing, is left to the caller.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::{
    DayAssignment, Employee, EmployeeId, Minute, ShiftCategory, ShiftSlot,
    WeekSchedule, Weekday,
};

/// Decimal hours between two "HH:MM" wall-clock times.
///
/// An end at or before the start crosses midnight, which makes identical
/// times a full 24 hour shift. Unparsable input counts as 0 hours.
pub fn shift_duration(start: &str, end: &str) -> f64 {
    match (Minute::from_clock(start), Minute::from_clock(end)) {
        (Ok(start), Ok(end)) => start.until(&end) as f64 / 60.0,
        _ => 0.0,
    }
}

/// Rounds to 2 decimal places.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

impl ShiftSlot {
    pub fn hours(&self) -> f64 {
        shift_duration(&self.start, &self.end)
    }
}

impl DayAssignment {
    /// Unrounded hours of both slots, skipping a slot gated by its rest marker.
    pub fn worked_hours(&self) -> f64 {
        self.slots()
            .into_iter()
            .filter(|(position, slot)| !slot.category.rests(*position))
            .fold(0.0, |total, (_, slot)| total + slot.hours())
    }
}

/// Hours per day for the seven canonical weekdays, serialized as a map in
/// Monday..Sunday order.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals([f64; 7]);

impl DailyTotals {
    pub fn get(&self, day: Weekday) -> f64 {
        self.0[day as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        Weekday::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Serialize for DailyTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Weekday::ALL.len()))?;
        for (day, hours) in self.iter() {
            map.serialize_entry(day.key(), &hours)?;
        }
        map.end()
    }
}

/// Daily totals always cover all seven weekdays; a day with no stored
/// assignment (or an employee with none at all) is 0.
#[tracing::instrument(name = "Computing daily totals", skip(week))]
pub fn daily_totals(week: &WeekSchedule, employee_id: &EmployeeId) -> DailyTotals {
    let days = week.assignments_for(employee_id);

    DailyTotals(Weekday::ALL.map(|day| {
        let hours = days
            .and_then(|days| days.get(day.key()))
            .map(DayAssignment::worked_hours)
            .unwrap_or(0.0);
        round_hours(hours)
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    #[serde(rename = "ore_ordinarie")]
    pub ordinary: f64,
    #[serde(rename = "ore_mutua")]
    pub sick_leave: f64,
    #[serde(rename = "ore_ferie")]
    pub vacation: f64,
    #[serde(rename = "ore_straordinario")]
    pub overtime: f64,
    #[serde(rename = "ore_contratto")]
    pub contracted: f64,
    #[serde(rename = "ore_totali_lavorate")]
    pub total_worked: f64,
}

/// Per-category totals for one employee over the weekday entries actually
/// stored for them. Unlike [`daily_totals`] this walks the stored keys
/// rather than the canonical week, so entries under non-canonical day
/// names are counted too.
#[tracing::instrument(name = "Computing weekly summary", skip_all)]
pub fn weekly_summary(week: &WeekSchedule, employee: &Employee) -> WeeklySummary {
    let mut ordinary = 0.0;
    let mut sick_leave = 0.0;
    let mut vacation = 0.0;

    let days = week.assignments_for(&employee.id).into_iter().flatten();
    for (_, day) in days {
        for (position, slot) in day.slots() {
            if slot.category.rests(position) {
                continue;
            }
            match slot.category {
                ShiftCategory::Ordinary => ordinary += slot.hours(),
                ShiftCategory::SickLeave => sick_leave += slot.hours(),
                ShiftCategory::Vacation => vacation += slot.hours(),
                ShiftCategory::RestMorning | ShiftCategory::RestAfternoon => {}
            }
        }
    }

    let total_worked = ordinary + sick_leave + vacation;
    let contracted = f64::from(employee.contracted_hours.value_of());
    let overtime = (total_worked - contracted).max(0.0);

    WeeklySummary {
        ordinary: round_hours(ordinary),
        sick_leave: round_hours(sick_leave),
        vacation: round_hours(vacation),
        overtime: round_hours(overtime),
        contracted: round_hours(contracted),
        total_worked: round_hours(total_worked),
    }
}
