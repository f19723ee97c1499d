// src/ingest/workbook.rs

use crate::errors::{AppError, AppResult};
use calamine::{Data, Reader, open_workbook_auto};
use csv::StringRecord;
use std::iter;
use std::path::Path;

/// Rows of the first worksheet as text records, anchored at column A.
///
/// Rows with no content at all are dropped, the way a CSV export leaves
/// them out.
pub(crate) fn first_sheet_records(path: &Path) -> AppResult<Vec<StringRecord>> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        AppError::Sheet(format!("workbook has no worksheet: {}", path.display()))
    })??;

    // the range starts at the first used cell, not at A1
    let offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    Ok(range
        .rows()
        .filter(|cells| cells.iter().any(|cell| !cell_text(cell).trim().is_empty()))
        .map(|cells| {
            iter::repeat_n(String::new(), offset)
                .chain(cells.iter().map(cell_text))
                .collect()
        })
        .collect())
}

/// Cell value as shown in a CSV export. Whole numbers print without a
/// fraction (`16`, not `16.0`).
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", *value as i64)
        }
        other => other.to_string(),
    }
}
