//! Export projector: joined records → flat labeled rows.
//!
//! One row per input record, in input order. Nothing is filtered or
//! mutated here.

use crate::core::{JoinedAttendance, JoinedLog};
use crate::export::model::ExportRow;
use crate::utils::date::{format_datetime, format_short_date};
use crate::utils::formatting::{format_hours, or_placeholder, yes_no};
use crate::utils::time::hour_minute;

pub const ATTENDANCE_LABELS: [&str; 12] = [
    "Date",
    "Employee",
    "Department",
    "Day type",
    "Clock in",
    "Clock out",
    "Total hours",
    "Overtime",
    "Verification",
    "Status",
    "On-chain",
    "Transaction hash",
];

pub const LOG_LABELS: [&str; 7] = [
    "Transaction Hash",
    "Contract Address",
    "Function",
    "Status",
    "Gas Used",
    "Block Number",
    "Timestamp",
];

const DEFAULT_DAY_TYPE: &str = "Ngày thường";
const DEFAULT_VERIFICATION: &str = "Web App";
const DEFAULT_STATUS: &str = "Đã chấm công";
const PLACEHOLDER: &str = "--";

fn attendance_row(row: &JoinedAttendance<'_>) -> ExportRow {
    let r = row.record;

    let date = match r.canonical_date() {
        Some(d) => format_short_date(d),
        None => or_placeholder(r.raw_date(), PLACEHOLDER),
    };

    let values = [
        date,
        row.employee_label().to_string(),
        row.department_label().to_string(),
        or_placeholder(r.day_type.as_ref().map(|d| d.label()), DEFAULT_DAY_TYPE),
        hour_minute(r.clock_in.as_deref()),
        hour_minute(r.clock_out.as_deref()),
        format_hours(r.total_hours, PLACEHOLDER),
        format_hours(r.overtime_hours, "0h"),
        or_placeholder(r.verified_via.as_deref(), DEFAULT_VERIFICATION),
        or_placeholder(r.status.as_ref().map(|s| s.label()), DEFAULT_STATUS),
        yes_no(r.is_on_chain()).to_string(),
        or_placeholder(r.transaction_hash.as_deref(), PLACEHOLDER),
    ];

    ExportRow::new(ATTENDANCE_LABELS.into_iter().zip(values).collect())
}

fn log_row(row: &JoinedLog<'_>) -> ExportRow {
    let l = row.log;
    let text = |v: Option<&str>| v.unwrap_or_default().to_string();
    let number = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_default();

    let values = [
        text(l.transaction_hash.as_deref()),
        text(l.contract_address.as_deref()),
        text(l.function_name.as_deref()),
        text(l.status.as_ref().map(|s| s.label())),
        number(l.gas_used),
        number(l.block_number),
        l.canonical_timestamp()
            .map(format_datetime)
            .unwrap_or_default(),
    ];

    ExportRow::new(LOG_LABELS.into_iter().zip(values).collect())
}

pub fn project_attendance(rows: &[JoinedAttendance<'_>]) -> Vec<ExportRow> {
    rows.iter().map(attendance_row).collect()
}

pub fn project_logs(rows: &[JoinedLog<'_>]) -> Vec<ExportRow> {
    rows.iter().map(log_row).collect()
}
