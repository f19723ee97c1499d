//! Per-run owner of the ingested rows and of the department aggregates.

use super::aggregate::DepartmentAggregate;
use crate::models::{ExceptionCategory, RowId, RowRecord};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Arena of row occurrences plus one [`DepartmentAggregate`] per department.
///
/// Each call to [`add_row`](Self::add_row) yields a fresh [`RowId`], even for
/// rows whose fields are identical to an earlier one.
#[derive(Debug, Default)]
pub struct ExceptionBook {
    rows: Vec<RowRecord>,
    departments: BTreeMap<String, DepartmentAggregate>,
}

impl ExceptionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from rows in input order, recording every triggered
    /// category once per row.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RowRecord>,
    {
        let mut book = Self::new();
        for row in rows {
            book.ingest(row);
        }
        book
    }

    /// Store `row` without recording anything for it.
    pub fn add_row(&mut self, row: RowRecord) -> RowId {
        let id = RowId(self.rows.len());
        self.rows.push(row);
        id
    }

    /// Store `row` and record each of its triggered categories.
    pub fn ingest(&mut self, row: RowRecord) -> RowId {
        let categories: Vec<ExceptionCategory> = row.categories.iter().copied().collect();
        let id = self.add_row(row);

        for category in categories {
            self.record_occurrence(id, category);
        }

        id
    }

    /// Record one occurrence for an already stored row. The department
    /// aggregate is created on first use. Returns `false` (and records
    /// nothing) when `id` does not belong to this book.
    pub fn record_occurrence(&mut self, id: RowId, category: ExceptionCategory) -> bool {
        let Some(row) = self.rows.get(id.0) else {
            warn!(row = id.0, ?category, "occurrence for an unknown row ignored");
            return false;
        };

        let department = row.department.clone();
        debug!(row = id.0, %department, ?category, "recording occurrence");

        self.departments
            .entry(department)
            .or_default()
            .record_occurrence(id, category);
        true
    }

    pub fn row(&self, id: RowId) -> Option<&RowRecord> {
        self.rows.get(id.0)
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    /// Aggregates keyed by department code, ascending.
    pub fn departments(&self) -> &BTreeMap<String, DepartmentAggregate> {
        &self.departments
    }

    pub fn department(&self, code: &str) -> Option<&DepartmentAggregate> {
        self.departments.get(code)
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}
