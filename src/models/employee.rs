use super::lenient::opt_text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee directory entry. `did` is the join key for every
/// employee-referencing record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    #[serde(rename = "employee_did")]
    pub did: String,
    #[serde(rename = "ho_ten", default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(rename = "phong_ban_id", default, deserialize_with = "opt_text")]
    pub department_id: Option<String>,
    #[serde(rename = "chuc_vu", default, deserialize_with = "opt_text")]
    pub position: Option<String>,
    #[serde(rename = "trang_thai", default)]
    pub status: Option<EmployeeStatus>,
}

impl Employee {
    /// Name when known, otherwise the DID.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.did)
    }

    pub fn belongs_to(&self, department_id: &str) -> bool {
        self.department_id.as_deref() == Some(department_id)
    }

    pub fn rank(&self) -> PositionRank {
        PositionRank::classify(self.position.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Suspended,
    Resigned,
    Other(String),
}

impl EmployeeStatus {
    pub fn label(&self) -> &str {
        match self {
            EmployeeStatus::Active => "Đang làm việc",
            EmployeeStatus::OnLeave => "Nghỉ phép",
            EmployeeStatus::Suspended => "Tạm nghỉ",
            EmployeeStatus::Resigned => "Đã nghỉ việc",
            EmployeeStatus::Other(s) => s,
        }
    }
}

impl From<String> for EmployeeStatus {
    fn from(s: String) -> Self {
        match s.trim() {
            "Đang làm việc" => EmployeeStatus::Active,
            "Nghỉ phép" => EmployeeStatus::OnLeave,
            "Tạm nghỉ" => EmployeeStatus::Suspended,
            "Đã nghỉ việc" => EmployeeStatus::Resigned,
            _ => EmployeeStatus::Other(s),
        }
    }
}

impl From<EmployeeStatus> for String {
    fn from(s: EmployeeStatus) -> Self {
        s.label().to_string()
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse seniority derived from the free-text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRank {
    Leadership,
    Senior,
    Staff,
}

impl PositionRank {
    pub fn classify(position: &str) -> Self {
        let p = position.to_lowercase();
        if p.contains("manager") || p.contains("lead") {
            PositionRank::Leadership
        } else if p.contains("senior") {
            PositionRank::Senior
        } else {
            PositionRank::Staff
        }
    }
}
