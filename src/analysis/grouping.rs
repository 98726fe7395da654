//! Partitioning of shift records by employee.
//!
//! [`EmployeeShifts`] is built in a single pass and is read-only afterwards.
//! Each employee's shifts are stably sorted by clock-in time.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::models::ShiftRecord;

/// Key used to order an employee's shifts.
fn clock_in_key(shift: &ShiftRecord) -> NaiveDateTime {
    shift.time_in
}

/// All shift records partitioned by employee name.
///
/// Employees iterate in name order. Every group is non-empty and sorted
/// ascending by `time_in`, with ties kept in input order.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::EmployeeShifts;
/// use timecard_audit::models::ShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shift = |name: &str, start: &str, end: &str| ShiftRecord {
///     employee_name: name.to_string(),
///     position_id: "P1".to_string(),
///     time_in: at(start),
///     time_out: at(end),
/// };
///
/// let groups = EmployeeShifts::from_records(vec![
///     shift("Jane", "2023-01-02 08:00", "2023-01-02 16:00"),
///     shift("John", "2023-01-01 08:00", "2023-01-01 16:00"),
///     shift("Jane", "2023-01-01 08:00", "2023-01-01 16:00"),
/// ]);
///
/// assert_eq!(groups.len(), 2);
/// let jane = groups.get("Jane").unwrap();
/// assert!(jane[0].time_in < jane[1].time_in);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeShifts {
    groups: BTreeMap<String, Vec<ShiftRecord>>,
}

impl EmployeeShifts {
    /// Groups `records` by employee name and sorts each group.
    ///
    /// Identical records are kept; nothing is deduplicated.
    pub fn from_records(records: Vec<ShiftRecord>) -> Self {
        let mut groups: BTreeMap<String, Vec<ShiftRecord>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.employee_name.clone())
                .or_default()
                .push(record);
        }

        // sort_by_key is stable
        for shifts in groups.values_mut() {
            shifts.sort_by_key(clock_in_key);
        }

        Self { groups }
    }

    /// Returns the sorted shifts for `employee_name`, if any.
    pub fn get(&self, employee_name: &str) -> Option<&[ShiftRecord]> {
        self.groups.get(employee_name).map(Vec::as_slice)
    }

    /// Iterates over `(employee_name, sorted shifts)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ShiftRecord])> {
        self.groups
            .iter()
            .map(|(name, shifts)| (name.as_str(), shifts.as_slice()))
    }

    /// Number of distinct employees.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no employees.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of shifts across all employees.
    pub fn total_shifts(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
