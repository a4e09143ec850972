//! Department grouping and per-department aggregates.

use std::collections::HashMap;

use crate::record::EmployeeRecord;

/// Department name used for rows with an empty department cell.
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

/// Employees sharing one department value, in roster order.
#[derive(Debug, Clone)]
pub struct DepartmentGroup<'a> {
    pub department: &'a str,
    pub members: Vec<&'a EmployeeRecord>,
}

impl<'a> DepartmentGroup<'a> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn title_counts(&self) -> Vec<(&'a str, usize)> {
        value_counts(self.members.iter().copied().map(|m| m.title.as_deref()))
    }

    pub fn employment_type_counts(&self) -> Vec<(&'a str, usize)> {
        value_counts(self.members.iter().copied().map(|m| m.employment_type.as_deref()))
    }

    pub fn gender_counts(&self) -> Vec<(&'a str, usize)> {
        value_counts(self.members.iter().copied().map(|m| m.gender.as_deref()))
    }

    /// Distinct titles in order of first appearance.
    pub fn distinct_titles(&self) -> Vec<&'a str> {
        distinct(self.members.iter().copied().map(|m| m.title.as_deref()))
    }

    /// Distinct employment types in order of first appearance.
    pub fn distinct_employment_types(&self) -> Vec<&'a str> {
        distinct(self.members.iter().copied().map(|m| m.employment_type.as_deref()))
    }
}

/// Department value a record is grouped under.
pub fn department_of(record: &EmployeeRecord) -> &str {
    record
        .department
        .as_deref()
        .unwrap_or(UNASSIGNED_DEPARTMENT)
}

/// Partition records by department.
///
/// Departments are ordered by first appearance and members keep their row
/// order.
pub fn group_by_department(records: &[EmployeeRecord]) -> Vec<DepartmentGroup<'_>> {
    let mut groups: Vec<DepartmentGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let department = department_of(record);
        let slot = *index.entry(department).or_insert_with(|| {
            groups.push(DepartmentGroup {
                department,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(record);
    }

    groups
}

/// Count non-empty values, most frequent first; ties keep first appearance.
fn value_counts<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for value in values.flatten() {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<&'a str> {
    let mut seen: Vec<&'a str> = Vec::new();
    for value in values.flatten() {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
