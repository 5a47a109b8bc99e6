// src/export/model.rs

use crate::export::ExportFormat;
use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Flat export row: fixed labels in fixed order, formatted values.
/// Built once by the projector and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    fields: Vec<(&'static str, String)>,
}

impl ExportRow {
    pub(crate) fn new(fields: Vec<(&'static str, String)>) -> Self {
        Self { fields }
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(label, _)| *label)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Serialized as a JSON object whose keys keep the label order.
impl Serialize for ExportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Which dashboard a report is exported from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    Attendance,
    Logs,
}

impl ReportKind {
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ReportKind::Attendance => &crate::export::projector::ATTENDANCE_LABELS,
            ReportKind::Logs => &crate::export::projector::LOG_LABELS,
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            ReportKind::Attendance => "Attendance",
            ReportKind::Logs => "SmartContractLogs",
        }
    }

    /// File name derived from the export time.
    pub fn file_name(self, now: NaiveDateTime, format: ExportFormat) -> String {
        let stem = match self {
            ReportKind::Attendance => format!("attendance_report_{}", now.format("%Y-%m-%d")),
            ReportKind::Logs => format!("smart_contract_logs_{}", now.format("%Y%m%d_%H%M")),
        };
        format!("{stem}.{}", format.as_str())
    }
}
