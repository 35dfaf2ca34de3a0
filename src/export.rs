//! Spreadsheet export of the ranked leaderboard

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::constants::export::{
    COLUMN_WIDTHS, FALLBACK_SUFFIX, FILE_EXTENSION, HEADERS, SHEET_NAME,
};
use crate::error::AppError;
use crate::ranking::RankingRow;

/// Where the workbook ended up.
#[derive(Debug)]
pub enum ExportOutcome {
    Primary(PathBuf),
    /// The requested path failed; the workbook was saved under the event-code name.
    Fallback {
        path: PathBuf,
        primary_error: AppError,
    },
}

impl ExportOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ExportOutcome::Primary(path) => path,
            ExportOutcome::Fallback { path, .. } => path,
        }
    }
}

/// `<basename>.xlsx`
pub fn primary_path(basename: &str) -> PathBuf {
    PathBuf::from(format!("{basename}.{FILE_EXTENSION}"))
}

/// `<event_code>_skills.xlsx`
pub fn fallback_path(event_code: &str) -> PathBuf {
    PathBuf::from(format!("{event_code}{FALLBACK_SUFFIX}.{FILE_EXTENSION}"))
}

/// Renders a score list as a single cell, e.g. `[10, 30, 20]`.
pub fn render_scores(scores: &[i64]) -> String {
    format!("{scores:?}")
}

fn write_row(sheet: &mut Worksheet, row_index: u32, row: &RankingRow) -> Result<(), AppError> {
    sheet.write_string(row_index, 0, row.number())?;
    sheet.write_string(row_index, 1, row.name())?;

    match row {
        RankingRow::Complete(scored) => {
            sheet.write_string(row_index, 2, render_scores(&scored.driver_scores))?;
            sheet.write_string(row_index, 3, render_scores(&scored.programming_scores))?;
            sheet.write_number(row_index, 4, scored.best_driver as f64)?;
            sheet.write_number(row_index, 5, scored.best_programming as f64)?;
            sheet.write_number(row_index, 6, scored.best_sum as f64)?;
        }
        RankingRow::Degraded(_) => {
            for col in 2..HEADERS.len() as u16 {
                sheet.write_number(row_index, col, 0.0)?;
            }
        }
    }

    Ok(())
}

/// Lays out the header row and one row per entry, in the given order.
pub fn build_workbook(rows: &[RankingRow]) -> Result<Workbook, AppError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, (label, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *label, &header_format)?;
        sheet.set_column_width(col, width)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (index, row) in rows.iter().enumerate() {
        write_row(sheet, index as u32 + 1, row)?;
    }

    Ok(workbook)
}

/// Saves the leaderboard to `primary`, or to `fallback` if that fails.
///
/// The primary error is logged and carried in the outcome. An error saving
/// the fallback is returned.
pub fn export_with_fallback(
    rows: &[RankingRow],
    primary: &Path,
    fallback: &Path,
) -> Result<ExportOutcome, AppError> {
    let mut workbook = build_workbook(rows)?;

    match workbook.save(primary) {
        Ok(()) => {
            info!("Wrote {} row(s) to {}", rows.len(), primary.display());
            Ok(ExportOutcome::Primary(primary.to_path_buf()))
        }
        Err(e) => {
            let primary_error = AppError::from(e);
            error!("Error: {primary_error}");
            info!("Saving to {} instead", fallback.display());

            let mut workbook = build_workbook(rows)?;
            workbook.save(fallback)?;
            info!("Wrote {} row(s) to {}", rows.len(), fallback.display());

            Ok(ExportOutcome::Fallback {
                path: fallback.to_path_buf(),
                primary_error,
            })
        }
    }
}
