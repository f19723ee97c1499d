//! Ordering rules for the summary and detail tables.
//!
//! Both rankers are plain comparators meant for a stable sort (`sort_by`),
//! so fully tied entries keep their incoming order.

use super::aggregate::DepartmentAggregate;
use crate::models::{ExceptionCategory, RowId};
use std::cmp::Ordering;

/// Orders rows of one department, highest counts first.
pub struct RowRanker<'a> {
    aggregate: &'a DepartmentAggregate,
    categories: &'a [ExceptionCategory],
}

impl<'a> RowRanker<'a> {
    pub fn new(aggregate: &'a DepartmentAggregate, categories: &'a [ExceptionCategory]) -> Self {
        Self {
            aggregate,
            categories,
        }
    }

    /// Per-category counts in the requested order decide first; the row's
    /// overall count breaks any remaining tie.
    pub fn compare(&self, a: RowId, b: RowId) -> Ordering {
        for category in self.categories {
            let count_a = self.aggregate.row_category_count(*category, a).unwrap_or(0);
            let count_b = self.aggregate.row_category_count(*category, b).unwrap_or(0);

            let ord = count_b.cmp(&count_a);
            if ord != Ordering::Equal {
                return ord;
            }
        }

        self.aggregate
            .row_total(b)
            .cmp(&self.aggregate.row_total(a))
    }

    pub fn sort(&self, rows: &mut [RowId]) {
        rows.sort_by(|a, b| self.compare(*a, *b));
    }
}

/// Orders departments for the summary table, most occurrences first.
pub struct DepartmentRanker<'a> {
    categories: &'a [ExceptionCategory],
}

impl<'a> DepartmentRanker<'a> {
    pub fn new(categories: &'a [ExceptionCategory]) -> Self {
        Self { categories }
    }

    /// With categories: occurrence-list sizes in the requested order, and a
    /// full tie stays `Equal` (no fallback). Without categories: number of
    /// problem rows.
    pub fn compare(&self, a: &DepartmentAggregate, b: &DepartmentAggregate) -> Ordering {
        if self.categories.is_empty() {
            return b.problem_rows().len().cmp(&a.problem_rows().len());
        }

        for category in self.categories {
            let ord = b
                .occurrence_count(*category)
                .cmp(&a.occurrence_count(*category));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        Ordering::Equal
    }

    /// Sort `(code, aggregate)` pairs in place.
    pub fn sort<K>(&self, departments: &mut [(K, &DepartmentAggregate)]) {
        departments.sort_by(|(_, a), (_, b)| self.compare(a, b));
    }
}
