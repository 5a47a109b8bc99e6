use crate::config::Config;
use crate::health::{HealthBoard, HealthProbe, HealthStatus, ProbeTarget, SourceProbe};
use crate::ui::messages::{field, header};
use crate::utils::colors::{GREEN, RED, YELLOW, paint};

/// Handle the `health` subcommand.
///
/// The attendance snapshot stands in for the database and the log snapshot
/// for the payroll contract; the AI service has no probe.
pub async fn handle(cfg: &Config) {
    let sources = cfg.snapshot_sources();
    let database = SourceProbe(sources.attendance.as_ref());
    let contract = SourceProbe(sources.logs.as_ref());

    let probes: [(ProbeTarget, &dyn HealthProbe); 2] = [
        (ProbeTarget::Database, &database),
        (ProbeTarget::PayrollContract, &contract),
    ];

    let mut board = HealthBoard::new();
    board.refresh(&probes).await;

    header("System health");
    for (subsystem, status) in board.entries() {
        let color = match status {
            HealthStatus::Up => GREEN,
            HealthStatus::Down => RED,
            HealthStatus::Unknown => YELLOW,
        };
        field(subsystem.label(), paint(&status.to_string(), color));
    }
}
