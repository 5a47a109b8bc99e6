use crate::cli::commands::{load_snapshot, report_duplicates};
use crate::cli::parser::{AttendanceArgs, Commands, LogArgs};
use crate::config::Config;
use crate::core::{filter_attendance, filter_logs};
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRow, ReportKind, project_attendance, project_logs};
use crate::ui::messages::warning;
use crate::utils::date;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        report,
        format,
        dir,
        force,
        filters,
        contract,
        function,
    } = cmd
    else {
        return Ok(());
    };

    let snapshot = load_snapshot(cfg).await;
    let directory = snapshot.directory();
    report_duplicates(&directory);

    let rows: Vec<ExportRow> = match report {
        ReportKind::Attendance => {
            if contract.is_some() || function.is_some() {
                warning("--contract/--function only apply to the logs report; ignored.");
            }
            let criteria = filters.criteria()?;
            let joined = directory.join_attendance(&snapshot.attendance);
            project_attendance(&filter_attendance(&joined, &criteria))
        }
        ReportKind::Logs => {
            let criteria = log_args(filters, contract, function).criteria()?;
            let joined = directory.join_logs(&snapshot.logs);
            project_logs(&filter_logs(&joined, &criteria))
        }
    };

    let out_dir = dir.clone().unwrap_or_else(|| cfg.export_dir());
    ExportLogic::export(*report, &rows, *format, &out_dir, *force, date::now())?;
    Ok(())
}

/// The logs report shares search, status and dates with the attendance flags.
fn log_args(
    filters: &AttendanceArgs,
    contract: &Option<String>,
    function: &Option<String>,
) -> LogArgs {
    if filters.employee.is_some() || filters.department.is_some() || filters.on_chain.is_some() {
        warning("--employee/--department/--onchain only apply to the attendance report; ignored.");
    }
    LogArgs {
        search: filters.search.clone(),
        status: filters.status.clone(),
        contract: contract.clone(),
        function: function.clone(),
        dates: filters.dates.clone(),
    }
}
