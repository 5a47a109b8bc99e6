pub mod attendance;
pub mod config;
pub mod departments;
pub mod export;
pub mod health;
pub mod init;
pub mod logs;
pub mod settings;

use crate::config::Config;
use crate::core::Directory;
use crate::export::ExportRow;
use crate::loader::{Snapshot, SnapshotStore};
use crate::ui::messages::{info, warning};
use crate::utils::date::format_datetime;
use crate::utils::table::Table;
use std::sync::Arc;

/// Load every configured source and report degraded data to the operator.
pub(crate) async fn load_snapshot(cfg: &Config) -> Arc<Snapshot> {
    let store = SnapshotStore::default();
    let report = store.refresh(&cfg.snapshot_sources()).await;
    for notice in &report.notices {
        warning(notice);
    }
    if report.degraded {
        warning("Showing partial data: figures below leave out the unavailable sources.");
    }

    let snapshot = store.current();
    if let Some(at) = snapshot.loaded_at {
        info(format!("Snapshot loaded at {}", format_datetime(at)));
    }
    snapshot
}

pub(crate) fn report_duplicates(dir: &Directory<'_>) {
    for dup in dir.duplicates() {
        warning(format!(
            "duplicate {} id '{}' at position {} ignored (first record kept)",
            dup.kind, dup.key, dup.position
        ));
    }
}

/// Render projected rows, keeping only `columns`.
pub(crate) fn rows_table(columns: &[&str], rows: &[ExportRow]) -> String {
    let mut table = Table::new(columns);
    for row in rows {
        table.add_row(
            columns
                .iter()
                .map(|c| row.get(c).unwrap_or_default().to_string())
                .collect(),
        );
    }
    table.render()
}
