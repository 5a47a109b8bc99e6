//! Join, filter and aggregation engine. Nothing here suspends or performs I/O.

pub mod departments;
pub mod filter;
pub mod join;
pub mod stats;

pub use departments::{DepartmentView, ManagerResolution, department_views};
pub use filter::{
    AttendanceCriteria, DateRange, LogCriteria, Presence, StatusFilter, TextSearch,
    filter_attendance, filter_logs,
};
pub use join::{Directory, DuplicateKey, EntityKind, JoinedAttendance, JoinedLog};
pub use stats::{AttendanceStats, LogStats};
