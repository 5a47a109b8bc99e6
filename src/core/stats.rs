//! Statistics aggregator: pure reductions over a filtered, joined set.

use crate::core::join::{JoinedAttendance, JoinedLog};
use crate::models::TxStatus;
use serde::Serialize;

/// `num / den`, or 0 when the denominator is 0.
fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceStats {
    pub total_records: usize,
    /// Records with the completed status.
    pub completed_days: usize,
    pub overtime_hours: f64,
    pub working_hours: f64,
    /// Working hours per completed day.
    pub average_working_hours: f64,
    pub on_chain_count: usize,
    /// On-chain records over all records, in `[0, 1]`.
    pub on_chain_ratio: f64,
}

impl AttendanceStats {
    pub fn compute(rows: &[JoinedAttendance<'_>]) -> Self {
        let total_records = rows.len();
        let completed_days = rows.iter().filter(|r| r.record.is_completed()).count();
        let overtime_hours = rows.iter().map(|r| r.record.overtime()).sum();
        let working_hours = rows.iter().map(|r| r.record.total()).sum();
        let on_chain_count = rows.iter().filter(|r| r.record.is_on_chain()).count();

        Self {
            total_records,
            completed_days,
            overtime_hours,
            working_hours,
            average_working_hours: ratio(working_hours, completed_days as f64),
            on_chain_count,
            on_chain_ratio: ratio(on_chain_count as f64, total_records as f64),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub pending: usize,
    pub gas_used: u64,
}

impl LogStats {
    pub fn compute(rows: &[JoinedLog<'_>]) -> Self {
        let mut out = LogStats {
            total: rows.len(),
            ..Default::default()
        };

        for row in rows {
            match row.log.status {
                Some(TxStatus::Success) => out.success += 1,
                Some(TxStatus::Failed) => out.failed += 1,
                Some(TxStatus::Pending) => out.pending += 1,
                _ => {}
            }
            out.gas_used = out.gas_used.saturating_add(row.log.gas_used.unwrap_or(0));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::join::Directory;
    use crate::models::{AttendanceRecord, Employee, TransactionLog};
    use serde_json::json;

    fn records() -> Vec<AttendanceRecord> {
        serde_json::from_value(json!([
            { "employee_did": "E1", "trang_thai": "Completed", "gio_lam_them": 1.5, "tong_gio_lam": 8 },
            { "employee_did": "E2", "trang_thai": "Absent" },
            { "employee_did": "E1", "trang_thai": "Đã chấm công", "gio_lam_them": "0.75", "tong_gio_lam": 7, "transaction_hash": "0x1" },
            { "employee_did": "E3", "gio_lam_them": null }
        ]))
        .unwrap()
    }

    #[test]
    fn overtime_sum_matches_manual_sum() {
        let r = records();
        let dir = Directory::build(&[], &[]);
        let joined = dir.join_attendance(&r);

        let manual: f64 = r.iter().map(|x| x.overtime_hours.unwrap_or(0.0)).sum();
        let stats = AttendanceStats::compute(&joined);

        assert_eq!(stats.overtime_hours, manual);
        assert_eq!(stats.overtime_hours, 2.25);
        assert_eq!(stats.total_records, 4);
        assert_eq!(stats.completed_days, 2);
        assert_eq!(stats.average_working_hours, 7.5);
        assert_eq!(stats.on_chain_count, 1);
        assert_eq!(stats.on_chain_ratio, 0.25);
    }

    #[test]
    fn zero_denominators_yield_zero() {
        let stats = AttendanceStats::compute(&[]);
        assert_eq!(stats, AttendanceStats::default());
        assert_eq!(stats.on_chain_ratio, 0.0);
        assert!(!stats.average_working_hours.is_nan());

        let r: Vec<AttendanceRecord> = serde_json::from_value(json!([
            { "employee_did": "E1", "trang_thai": "Vắng mặt", "tong_gio_lam": 4 }
        ]))
        .unwrap();
        let dir = Directory::build(&[], &[]);
        let stats = AttendanceStats::compute(&dir.join_attendance(&r));
        assert_eq!(stats.average_working_hours, 0.0);
        assert_eq!(stats.working_hours, 4.0);
    }

    #[test]
    fn reference_scenario() {
        let employees: Vec<Employee> = serde_json::from_value(json!([
            { "employee_did": "E1", "ho_ten": "A", "phong_ban_id": "D1" }
        ]))
        .unwrap();
        let r: Vec<AttendanceRecord> = serde_json::from_value(json!([
            { "employee_did": "E1", "trang_thai": "Completed", "gio_lam_them": 1.5, "tong_gio_lam": 8 },
            { "employee_did": "E2", "trang_thai": "Absent" }
        ]))
        .unwrap();
        let dir = Directory::build(&employees, &[]);
        let stats = AttendanceStats::compute(&dir.join_attendance(&r));

        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.completed_days, 1);
        assert_eq!(stats.overtime_hours, 1.5);
        assert_eq!(stats.average_working_hours, 8.0);
        assert_eq!(stats.on_chain_count, 0);
    }

    #[test]
    fn log_counts_by_status() {
        let logs: Vec<TransactionLog> = serde_json::from_value(json!([
            { "status": "Success", "gas_used": 21000 },
            { "status": "Success", "gas_used": "1000" },
            { "status": "Failed" },
            { "status": "Pending", "gas_used": 5 },
            { "status": "Reverted" }
        ]))
        .unwrap();
        let dir = Directory::build(&[], &[]);
        let stats = LogStats::compute(&dir.join_logs(&logs));

        assert_eq!(
            stats,
            LogStats {
                total: 5,
                success: 2,
                failed: 1,
                pending: 1,
                gas_used: 22_005,
            }
        );
    }
}
