// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::{ExportRow, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with header styling, banded rows and auto column widths.
pub(crate) fn export_xlsx(
    sheet_name: &str,
    labels: &[&str],
    rows: &[ExportRow],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, label) in labels.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *label, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = labels.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, export_row) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, (label, value)) in export_row.labels().zip(export_row.values()).enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell_value(label, value), band_color)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(value.width());
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Columns whose values Excel may store natively. Everything else,
/// identifiers included, is written verbatim as text.
const NUMBER_COLUMNS: [&str; 2] = ["Gas Used", "Block Number"];
const DATE_COLUMNS: [&str; 4] = ["Date", "Clock in", "Clock out", "Timestamp"];

#[derive(Debug, PartialEq)]
enum CellValue<'a> {
    Date(&'static str, f64),
    Number(f64),
    Text(&'a str),
}

fn cell_value<'a>(label: &str, s: &'a str) -> CellValue<'a> {
    if DATE_COLUMNS.contains(&label)
        && let Some((num_format, serial)) = parse_to_excel_date(s)
    {
        return CellValue::Date(num_format, serial);
    }
    if NUMBER_COLUMNS.contains(&label)
        && let Some(num) = plain_number(s)
    {
        return CellValue::Number(num);
    }
    CellValue::Text(s)
}

/// Write one cell, storing dates/times and counters natively.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: CellValue<'_>,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let written = match value {
        CellValue::Date(num_format, serial) => {
            let fmt = base.set_num_format(num_format);
            worksheet.write_with_format(row, col, serial, &fmt)
        }
        CellValue::Number(num) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, num, &fmt)
        }
        CellValue::Text(s) => worksheet.write_with_format(row, col, s, &base),
    };
    written.map_err(to_export_error)?;
    Ok(())
}

/// Decimal digits only; hashes like `0x1f` or words like `NaN` stay text.
fn plain_number(s: &str) -> Option<f64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|c| *c == '.').count() <= 1;
    if well_formed { s.parse().ok() } else { None }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
