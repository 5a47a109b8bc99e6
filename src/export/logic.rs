// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportRow, ReportKind};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write already projected rows of `report` into `dir`.
    ///
    /// The file name is derived from `now` and the report kind; an empty
    /// row set is refused before any file is touched.
    pub fn export(
        report: ReportKind,
        rows: &[ExportRow],
        format: ExportFormat,
        dir: &Path,
        force: bool,
        now: NaiveDateTime,
    ) -> AppResult<PathBuf> {
        if rows.is_empty() {
            return Err(AppError::EmptyExport);
        }

        ensure_dir(dir)?;
        let path = dir.join(report.file_name(now, format));
        ensure_writable(&path, force)?;

        let labels = report.labels();
        match format {
            ExportFormat::Csv => export_csv(labels, rows, &path)?,
            ExportFormat::Json => export_json(rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(report.sheet_name(), labels, rows, &path)?,
        }

        tracing::debug!(file = %path.display(), rows = rows.len(), "report exported");
        Ok(path)
    }
}
