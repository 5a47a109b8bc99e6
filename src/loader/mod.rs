//! Snapshot loader.
//!
//! Each collection is fetched independently and concurrently; the loader
//! settles all fetches and tolerates individual failures. A failed source
//! yields an empty slice plus a [`SourceNotice`] for the caller.

pub mod normalize;
pub mod source;
pub mod store;

pub use source::{FileSource, SnapshotSource, StaticSource};
pub use store::{RefreshReport, SnapshotStore};

use crate::core::Directory;
use crate::models::{AttendanceRecord, Department, Employee, TransactionLog};
use crate::utils::date;
use chrono::NaiveDateTime;
use normalize::{decode_records, extract_records};
use serde::de::DeserializeOwned;
use std::fmt;

pub const ATTENDANCE: &str = "attendance";
pub const EMPLOYEES: &str = "employees";
pub const DEPARTMENTS: &str = "departments";
pub const LOGS: &str = "logs";

/// Every collection as loaded at one point in time. Replaced wholesale on
/// refresh, never patched.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub attendance: Vec<AttendanceRecord>,
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub logs: Vec<TransactionLog>,
    pub loaded_at: Option<NaiveDateTime>,
}

impl Snapshot {
    pub fn directory(&self) -> Directory<'_> {
        Directory::build(&self.employees, &self.departments)
    }
}

/// The four configured sources.
pub struct SnapshotSources {
    pub attendance: Box<dyn SnapshotSource>,
    pub employees: Box<dyn SnapshotSource>,
    pub departments: Box<dyn SnapshotSource>,
    pub logs: Box<dyn SnapshotSource>,
}

/// Degraded-data notice raised while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNotice {
    /// The source could not be fetched; its slice is empty.
    Unavailable { source: String, reason: String },
    /// Some records could not be decoded and were left out.
    Skipped { source: String, count: usize },
}

impl fmt::Display for SourceNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceNotice::Unavailable { source, reason } => {
                write!(f, "source '{source}' unavailable ({reason}); showing no {source} data")
            }
            SourceNotice::Skipped { source, count } => {
                write!(f, "source '{source}': {count} malformed record(s) skipped")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub snapshot: Snapshot,
    pub notices: Vec<SourceNotice>,
}

impl LoadOutcome {
    pub fn is_degraded(&self) -> bool {
        self.notices
            .iter()
            .any(|n| matches!(n, SourceNotice::Unavailable { .. }))
    }
}

/// Fetch and normalize one collection.
pub async fn load_slice<T: DeserializeOwned>(
    source: &dyn SnapshotSource,
) -> (Vec<T>, Option<SourceNotice>) {
    let name = source.name().to_string();

    match source.fetch().await {
        Ok(body) => {
            let decoded = decode_records::<T>(&name, extract_records(body));
            tracing::debug!(source = %name, records = decoded.records.len(), "source loaded");
            let notice = (decoded.skipped > 0).then_some(SourceNotice::Skipped {
                source: name,
                count: decoded.skipped,
            });
            (decoded.records, notice)
        }
        Err(e) => {
            tracing::warn!(source = %name, error = %e, "source unavailable");
            (
                Vec::new(),
                Some(SourceNotice::Unavailable {
                    source: name,
                    reason: e.to_string(),
                }),
            )
        }
    }
}

/// Load every collection concurrently; never fails as a whole.
pub async fn load_snapshot(sources: &SnapshotSources) -> LoadOutcome {
    let (attendance, employees, departments, logs) = futures::join!(
        load_slice::<AttendanceRecord>(sources.attendance.as_ref()),
        load_slice::<Employee>(sources.employees.as_ref()),
        load_slice::<Department>(sources.departments.as_ref()),
        load_slice::<TransactionLog>(sources.logs.as_ref()),
    );

    let notices = [attendance.1, employees.1, departments.1, logs.1]
        .into_iter()
        .flatten()
        .collect();

    LoadOutcome {
        snapshot: Snapshot {
            attendance: attendance.0,
            employees: employees.0,
            departments: departments.0,
            logs: logs.0,
            loaded_at: Some(date::now()),
        },
        notices,
    }
}
