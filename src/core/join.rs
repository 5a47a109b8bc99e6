//! Relational join resolver.
//!
//! [`Directory`] indexes employees by DID and departments by id once per
//! snapshot; attendance and log records are then resolved with O(1)
//! lookups. A missing reference never drops the record: the joined row keeps
//! the raw identifier for display.

use crate::models::{AttendanceRecord, Department, Employee, TransactionLog};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

pub const DEPARTMENT_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Department,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Employee => f.write_str("employee"),
            EntityKind::Department => f.write_str("department"),
        }
    }
}

/// Identity key seen more than once while building the index. The first
/// record in snapshot order stays indexed; later ones are shadowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub kind: EntityKind,
    pub key: String,
    /// Snapshot position of the shadowed record.
    pub position: usize,
}

#[derive(Debug)]
pub struct Directory<'a> {
    employees: HashMap<&'a str, &'a Employee>,
    departments: HashMap<&'a str, &'a Department>,
    duplicates: Vec<DuplicateKey>,
}

impl<'a> Directory<'a> {
    pub fn build(employees: &'a [Employee], departments: &'a [Department]) -> Self {
        let mut duplicates = Vec::new();
        let employees = index_first_wins(
            employees,
            |e| e.did.as_str(),
            EntityKind::Employee,
            &mut duplicates,
        );
        let departments = index_first_wins(
            departments,
            |d| d.id.as_str(),
            EntityKind::Department,
            &mut duplicates,
        );

        for dup in &duplicates {
            tracing::warn!(
                kind = %dup.kind,
                key = %dup.key,
                position = dup.position,
                "duplicate identity key shadowed by an earlier record"
            );
        }

        Self {
            employees,
            departments,
            duplicates,
        }
    }

    pub fn employee(&self, did: &str) -> Option<&'a Employee> {
        self.employees.get(did).copied()
    }

    pub fn department(&self, id: &str) -> Option<&'a Department> {
        self.departments.get(id).copied()
    }

    pub fn department_of(&self, employee: &Employee) -> Option<&'a Department> {
        employee
            .department_id
            .as_deref()
            .and_then(|id| self.department(id))
    }

    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    /// Resolve every attendance record, preserving snapshot order.
    pub fn join_attendance(&self, records: &'a [AttendanceRecord]) -> Vec<JoinedAttendance<'a>> {
        records
            .iter()
            .map(|record| {
                let employee = self.employee(&record.employee_did);
                JoinedAttendance {
                    record,
                    employee,
                    department: employee.and_then(|e| self.department_of(e)),
                }
            })
            .collect()
    }

    pub fn join_logs(&self, logs: &'a [TransactionLog]) -> Vec<JoinedLog<'a>> {
        logs.iter()
            .map(|log| JoinedLog {
                log,
                employee: log.employee_did.as_deref().and_then(|did| self.employee(did)),
            })
            .collect()
    }
}

fn index_first_wins<'a, T, F>(
    items: &'a [T],
    key: F,
    kind: EntityKind,
    duplicates: &mut Vec<DuplicateKey>,
) -> HashMap<&'a str, &'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        match index.entry(key(item)) {
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
            Entry::Occupied(slot) => duplicates.push(DuplicateKey {
                kind,
                key: slot.key().to_string(),
                position,
            }),
        }
    }
    index
}

/// Attendance record with its resolved employee and department.
#[derive(Debug, Clone, Copy)]
pub struct JoinedAttendance<'a> {
    pub record: &'a AttendanceRecord,
    pub employee: Option<&'a Employee>,
    pub department: Option<&'a Department>,
}

impl<'a> JoinedAttendance<'a> {
    /// Employee name, or the raw DID on a join miss.
    pub fn employee_label(&self) -> &'a str {
        match self.employee {
            Some(e) => e.display_name(),
            None => &self.record.employee_did,
        }
    }

    pub fn department_label(&self) -> &'a str {
        self.department
            .map(Department::display_name)
            .unwrap_or(DEPARTMENT_PLACEHOLDER)
    }

    /// Department reference of the resolved employee, even when the
    /// department itself is missing from the directory.
    pub fn department_id(&self) -> Option<&'a str> {
        self.employee.and_then(|e| e.department_id.as_deref())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JoinedLog<'a> {
    pub log: &'a TransactionLog,
    pub employee: Option<&'a Employee>,
}

impl<'a> JoinedLog<'a> {
    /// Caller name, the raw DID on a join miss, `None` when unattributed.
    pub fn employee_label(&self) -> Option<&'a str> {
        match self.employee {
            Some(e) => Some(e.display_name()),
            None => self.log.employee_did.as_deref(),
        }
    }
}
