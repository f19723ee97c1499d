// src/ingest/sheet.rs

use crate::errors::{AppError, AppResult};
use crate::models::{ExceptionCategory, RowRecord};
use csv::StringRecord;

pub(crate) const COMM_CODE: &str = "CommCode";
pub(crate) const ASSOCIATE_NAME: &str = "AssociateName";
pub(crate) const ASSOCIATE_ID: &str = "AssociateID";
pub(crate) const DEPT: &str = "Dept";

/// Column positions of the payroll review sheet.
#[derive(Debug, Clone)]
pub(crate) struct SheetLayout {
    comm_code: Option<usize>,
    associate_name: Option<usize>,
    associate_id: Option<usize>,
    dept: usize,
    flags: Vec<(ExceptionCategory, usize)>,
}

impl SheetLayout {
    /// `CommCode, AssociateName, AssociateID, Dept, MissedPunch,
    /// OvertimeHours, LongInterval, ShortShift, ShortLunch, MissedLunch`
    pub(crate) fn positional() -> Self {
        Self {
            comm_code: Some(0),
            associate_name: Some(1),
            associate_id: Some(2),
            dept: 3,
            flags: ExceptionCategory::ALL
                .iter()
                .enumerate()
                .map(|(i, category)| (*category, 4 + i))
                .collect(),
        }
    }

    /// Resolve columns by (case-insensitive) header name. Only `Dept` is
    /// mandatory; absent flag columns never trigger.
    pub(crate) fn from_headers(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let dept = find(DEPT)
            .ok_or_else(|| AppError::Sheet(format!("missing required column '{DEPT}'")))?;

        let flags = ExceptionCategory::ALL
            .iter()
            .filter_map(|category| find(category.column()).map(|idx| (*category, idx)))
            .collect();

        Ok(Self {
            comm_code: find(COMM_CODE),
            associate_name: find(ASSOCIATE_NAME),
            associate_id: find(ASSOCIATE_ID),
            dept,
            flags,
        })
    }

    /// Map one record into a row. `None` when the record has no department.
    pub(crate) fn to_row(&self, record: &StringRecord) -> Option<RowRecord> {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let department = record.get(self.dept)?.trim();
        if department.is_empty() {
            return None;
        }

        let categories = self
            .flags
            .iter()
            .filter(|(_, idx)| record.get(*idx).is_some_and(is_flagged))
            .map(|(category, _)| *category);

        let mut row = RowRecord::new(
            department,
            &field(self.associate_name),
            &field(self.associate_id),
        )
        .with_categories(categories);
        row.comm_code = field(self.comm_code);

        Some(row)
    }
}

/// A flag cell triggers its category when it reads `x` (any case, trimmed).
pub fn is_flagged(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("x")
}
