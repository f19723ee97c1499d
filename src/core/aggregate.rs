//! Per-department accumulator of exception occurrences.

use crate::models::{ExceptionCategory, RowId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Counts and row sets for one department code.
///
/// Append-only: occurrences are recorded while the sheet is ingested and the
/// aggregate is only read afterwards. Rows are keyed by [`RowId`], so the
/// `BTreeMap`/`BTreeSet` iteration order is the ingestion order.
#[derive(Debug, Default, Clone)]
pub struct DepartmentAggregate {
    total: usize,
    category_occurrences: HashMap<ExceptionCategory, Vec<RowId>>,
    row_total_count: BTreeMap<RowId, usize>,
    row_category_count: HashMap<ExceptionCategory, BTreeMap<RowId, usize>>,
    problem_rows: BTreeSet<RowId>,
}

impl DepartmentAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `category` for `row`.
    pub fn record_occurrence(&mut self, row: RowId, category: ExceptionCategory) {
        self.category_occurrences
            .entry(category)
            .or_default()
            .push(row);

        *self
            .row_category_count
            .entry(category)
            .or_default()
            .entry(row)
            .or_insert(0) += 1;

        *self.row_total_count.entry(row).or_insert(0) += 1;
        self.total += 1;
        self.problem_rows.insert(row);
    }

    /// Sum of all recorded occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Every occurrence of `category`, in recording order.
    pub fn occurrences(&self, category: ExceptionCategory) -> &[RowId] {
        self.category_occurrences
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn occurrence_count(&self, category: ExceptionCategory) -> usize {
        self.occurrences(category).len()
    }

    pub fn row_totals(&self) -> &BTreeMap<RowId, usize> {
        &self.row_total_count
    }

    /// Occurrences across all categories for `row` (0 if never recorded).
    pub fn row_total(&self, row: RowId) -> usize {
        self.row_total_count.get(&row).copied().unwrap_or(0)
    }

    pub fn row_category_counts(&self, category: ExceptionCategory) -> Option<&BTreeMap<RowId, usize>> {
        self.row_category_count.get(&category)
    }

    /// Recorded count of `category` for `row`; `None` when never recorded.
    pub fn row_category_count(&self, category: ExceptionCategory, row: RowId) -> Option<usize> {
        self.row_category_count
            .get(&category)
            .and_then(|counts| counts.get(&row))
            .copied()
    }

    pub fn problem_rows(&self) -> &BTreeSet<RowId> {
        &self.problem_rows
    }

    /// True when `row` was recorded under at least one of `categories`.
    pub fn has_recorded_any(&self, row: RowId, categories: &[ExceptionCategory]) -> bool {
        categories
            .iter()
            .any(|category| self.row_category_count(*category, row).is_some())
    }

    /// True when some problem row was recorded under one of `categories`.
    pub fn has_displayed_problem(&self, categories: &[ExceptionCategory]) -> bool {
        self.problem_rows
            .iter()
            .any(|row| self.has_recorded_any(*row, categories))
    }

    /// Rows recorded under at least one of `categories`, in ingestion order.
    pub fn rows_with_any(&self, categories: &[ExceptionCategory]) -> Vec<RowId> {
        self.row_total_count
            .keys()
            .copied()
            .filter(|row| self.has_recorded_any(*row, categories))
            .collect()
    }
}
