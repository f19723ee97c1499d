use crate::core::book::ExceptionBook;
use crate::models::{DepartmentNames, ExceptionCategory, RowRecord};
use crate::report::ReportRenderer;
use tracing::info;

pub struct Core;

impl Core {
    /// Aggregate `rows`, pick the columns from `subject` and render the report.
    pub fn build_report<I>(rows: I, subject: &str, names: &DepartmentNames) -> String
    where
        I: IntoIterator<Item = RowRecord>,
    {
        let categories = ExceptionCategory::parse_requested(subject);
        let book = ExceptionBook::from_rows(rows);

        info!(
            rows = book.rows().len(),
            departments = book.departments().len(),
            columns = ?categories,
            "building exception report"
        );

        ReportRenderer::new(names).render(&book, &categories)
    }
}
