//! Department dashboard: members and manager resolution per department.

use crate::core::join::Directory;
use crate::models::{Department, Employee};
use std::collections::HashMap;

pub const NO_MANAGER: &str = "None";

/// How a department's manager reference resolved against the directory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManagerResolution<'a> {
    /// Manager exists and is a member of the department.
    Member(&'a Employee),
    /// Manager exists but belongs elsewhere (listed without department badge).
    Outsider(&'a Employee),
    /// Reference points at no known employee.
    Missing(&'a str),
    Unassigned,
}

impl<'a> ManagerResolution<'a> {
    pub fn employee(&self) -> Option<&'a Employee> {
        match *self {
            ManagerResolution::Member(e) | ManagerResolution::Outsider(e) => Some(e),
            _ => None,
        }
    }

    /// `did - name`, the raw reference on a miss, `None` when unassigned.
    pub fn label(&self) -> String {
        match self {
            ManagerResolution::Member(e) | ManagerResolution::Outsider(e) => {
                format!("{} - {}", e.did, e.display_name())
            }
            ManagerResolution::Missing(did) => did.to_string(),
            ManagerResolution::Unassigned => NO_MANAGER.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DepartmentView<'a> {
    pub department: &'a Department,
    pub manager: ManagerResolution<'a>,
    /// Members in snapshot order.
    pub members: Vec<&'a Employee>,
}

impl<'a> DepartmentView<'a> {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_manager(&self, employee: &Employee) -> bool {
        self.department.manager_did.as_deref() == Some(employee.did.as_str())
    }

    /// Employees that could be assigned here (not already members).
    pub fn candidates(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees
            .iter()
            .filter(|e| !self.members.iter().any(|m| m.did == e.did))
            .collect()
    }
}

fn resolve_manager<'a>(dir: &Directory<'a>, department: &'a Department) -> ManagerResolution<'a> {
    match department.manager_did.as_deref() {
        None => ManagerResolution::Unassigned,
        Some(did) => match dir.employee(did) {
            Some(e) if e.belongs_to(&department.id) => ManagerResolution::Member(e),
            Some(e) => {
                tracing::debug!(
                    department = %department.id,
                    manager = %did,
                    "manager is not a member of the department"
                );
                ManagerResolution::Outsider(e)
            }
            None => ManagerResolution::Missing(did),
        },
    }
}

/// One view per department, in snapshot order.
pub fn department_views<'a>(
    dir: &Directory<'a>,
    employees: &'a [Employee],
    departments: &'a [Department],
) -> Vec<DepartmentView<'a>> {
    let mut by_department: HashMap<&str, Vec<&'a Employee>> = HashMap::new();
    for e in employees {
        if let Some(id) = e.department_id.as_deref() {
            by_department.entry(id).or_default().push(e);
        }
    }

    departments
        .iter()
        .map(|department| DepartmentView {
            department,
            manager: resolve_manager(dir, department),
            members: by_department
                .get(department.id.as_str())
                .cloned()
                .unwrap_or_default(),
        })
        .collect()
}
