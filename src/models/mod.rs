pub mod attendance;
pub mod department;
pub mod employee;
mod lenient;
pub mod transaction_log;

pub use attendance::{AttendanceRecord, AttendanceStatus, DayType};
pub use department::Department;
pub use employee::{Employee, EmployeeStatus, PositionRank};
pub use transaction_log::{EventLog, TransactionLog, TxStatus};
