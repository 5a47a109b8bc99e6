use crate::cli::commands::{load_snapshot, report_duplicates, rows_table};
use crate::cli::parser::LogArgs;
use crate::config::Config;
use crate::core::{JoinedLog, LogStats, filter_logs};
use crate::errors::{AppError, AppResult};
use crate::export::{ReportKind, project_logs};
use crate::ui::messages::{field, header, info};
use crate::utils::date::format_datetime;

/// Handle the `logs` subcommand: list (with stats) or one transaction.
pub async fn handle(filters: &LogArgs, detail: Option<&str>, cfg: &Config) -> AppResult<()> {
    let criteria = filters.criteria()?;

    let snapshot = load_snapshot(cfg).await;
    let dir = snapshot.directory();
    report_duplicates(&dir);

    let joined = dir.join_logs(&snapshot.logs);

    if let Some(hash) = detail {
        let row = joined
            .iter()
            .find(|r| {
                r.log
                    .transaction_hash
                    .as_deref()
                    .is_some_and(|h| h.eq_ignore_ascii_case(hash))
            })
            .ok_or_else(|| AppError::LogNotFound(hash.to_string()))?;
        print_detail(row)?;
        return Ok(());
    }

    let rows = filter_logs(&joined, &criteria);

    header("Smart-contract logs");
    if rows.is_empty() {
        info("No transaction logs match the filters.");
    } else {
        print!("{}", rows_table(ReportKind::Logs.labels(), &project_logs(&rows)));
    }
    println!();

    let stats = LogStats::compute(&rows);
    header("Statistics");
    field("Transactions", stats.total);
    field("Success", stats.success);
    field("Failed", stats.failed);
    field("Pending", stats.pending);
    field("Gas used", stats.gas_used);
    Ok(())
}

fn print_detail(row: &JoinedLog<'_>) -> AppResult<()> {
    let l = row.log;
    let text = |v: Option<&str>| v.unwrap_or("--").to_string();

    header("Transaction");
    field("Hash", text(l.transaction_hash.as_deref()));
    field("Contract", text(l.contract_address.as_deref()));
    field("Function", text(l.function_name.as_deref()));
    field("Status", text(l.status.as_ref().map(|s| s.label())));
    field("Caller", text(row.employee_label()));
    field(
        "Gas used",
        l.gas_used.map(|g| g.to_string()).unwrap_or_else(|| "--".into()),
    );
    field(
        "Block",
        l.block_number.map(|b| b.to_string()).unwrap_or_else(|| "--".into()),
    );
    field(
        "Timestamp",
        l.canonical_timestamp()
            .map(format_datetime)
            .unwrap_or_else(|| "--".into()),
    );

    println!();
    header(format!("Events ({})", l.event_logs.len()));
    if l.event_logs.is_empty() {
        info("No events emitted.");
    }
    for (i, ev) in l.event_logs.iter().enumerate() {
        println!("#{} {}", i + 1, ev.event.as_deref().unwrap_or("(unnamed event)"));
        println!("{}", serde_json::to_string_pretty(&ev.data)?);
    }
    Ok(())
}
