use crate::cli::commands::{load_snapshot, report_duplicates, rows_table};
use crate::cli::parser::AttendanceArgs;
use crate::config::Config;
use crate::core::{AttendanceStats, filter_attendance};
use crate::errors::AppResult;
use crate::export::project_attendance;
use crate::ui::messages::{field, header, info};
use crate::utils::formatting::percent;

const COLUMNS: [&str; 9] = [
    "Date",
    "Employee",
    "Department",
    "Clock in",
    "Clock out",
    "Total hours",
    "Overtime",
    "Status",
    "On-chain",
];

/// Handle the `attendance` subcommand.
pub async fn handle(filters: &AttendanceArgs, stats_only: bool, cfg: &Config) -> AppResult<()> {
    let criteria = filters.criteria()?;

    let snapshot = load_snapshot(cfg).await;
    let dir = snapshot.directory();
    report_duplicates(&dir);

    let joined = dir.join_attendance(&snapshot.attendance);
    let rows = filter_attendance(&joined, &criteria);

    if !stats_only {
        header("Attendance");
        if rows.is_empty() {
            info("No attendance records match the filters.");
        } else {
            print!("{}", rows_table(&COLUMNS, &project_attendance(&rows)));
        }
        println!();
    }

    print_stats(&AttendanceStats::compute(&rows));
    Ok(())
}

fn print_stats(stats: &AttendanceStats) {
    header("Statistics");
    field("Records", stats.total_records);
    field("Completed days", stats.completed_days);
    field("Working hours", format!("{:.2}h", stats.working_hours));
    field("Overtime hours", format!("{:.2}h", stats.overtime_hours));
    field("Average hours / day", format!("{:.2}h", stats.average_working_hours));
    field(
        "On-chain",
        format!("{} ({})", stats.on_chain_count, percent(stats.on_chain_ratio)),
    );
}
