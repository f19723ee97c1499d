// src/report/mod.rs

mod columns;
mod detail;
mod fs_utils;
pub mod output;
mod summary;

pub use output::{ReportFormat, deliver};

use crate::core::ExceptionBook;
use crate::models::{DepartmentNames, ExceptionCategory};

/// Turns an [`ExceptionBook`] into the fixed-width text report.
pub struct ReportRenderer<'a> {
    names: &'a DepartmentNames,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(names: &'a DepartmentNames) -> Self {
        Self { names }
    }

    /// Summary table, two blank lines, then one detail table per department
    /// (each followed by two blank lines).
    pub fn render(&self, book: &ExceptionBook, categories: &[ExceptionCategory]) -> String {
        let mut out = summary::render_summary(book, categories, self.names);
        out.push_str("\n\n");
        out.push_str(&detail::render_details(book, categories, self.names));
        out
    }

    pub fn summary(&self, book: &ExceptionBook, categories: &[ExceptionCategory]) -> String {
        summary::render_summary(book, categories, self.names)
    }

    pub fn details(&self, book: &ExceptionBook, categories: &[ExceptionCategory]) -> String {
        detail::render_details(book, categories, self.names)
    }
}
