use super::columns::{category_columns, department_column, name_column};
use crate::core::{DepartmentAggregate, ExceptionBook, RowRanker};
use crate::models::{DepartmentNames, ExceptionCategory};
use crate::utils::table::{Layout, Table};
use tracing::debug;

/// Row-level breakdowns, one table per department, ascending by code.
///
/// Departments without any row recorded under a displayed category are
/// left out entirely.
pub(crate) fn render_details(
    book: &ExceptionBook,
    categories: &[ExceptionCategory],
    names: &DepartmentNames,
) -> String {
    let mut out = String::new();

    for (code, aggregate) in book.departments() {
        if !aggregate.has_displayed_problem(categories) || aggregate.row_totals().is_empty() {
            debug!(department = %code, "no displayed exceptions, detail table skipped");
            continue;
        }

        out.push_str(&render_department(book, code, aggregate, categories, names));
        out.push_str("\n\n");
    }

    out
}

fn render_department(
    book: &ExceptionBook,
    code: &str,
    aggregate: &DepartmentAggregate,
    categories: &[ExceptionCategory],
    names: &DepartmentNames,
) -> String {
    let mut columns = vec![department_column(), name_column()];
    columns.extend(category_columns(categories));
    let mut table = Table::new(columns, Layout::Terminated);

    let mut rows = aggregate.rows_with_any(categories);
    RowRanker::new(aggregate, categories).sort(&mut rows);

    let label = names.label(code);
    for id in rows {
        let name = book
            .row(id)
            .map(|row| row.associate_name.clone())
            .unwrap_or_default();
        let mut line = vec![label.clone(), name];
        line.extend(categories.iter().map(|category| {
            aggregate
                .row_category_count(*category, id)
                .unwrap_or(0)
                .to_string()
        }));
        table.add_row(line);
    }

    table.render()
}
