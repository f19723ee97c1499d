use super::columns::{category_columns, department_column};
use crate::core::{DepartmentAggregate, DepartmentRanker, ExceptionBook};
use crate::models::{DepartmentNames, ExceptionCategory};
use crate::utils::table::{Layout, Table};

/// Department-level overview: one line per department with occurrences,
/// ranked by [`DepartmentRanker`].
pub(crate) fn render_summary(
    book: &ExceptionBook,
    categories: &[ExceptionCategory],
    names: &DepartmentNames,
) -> String {
    let mut columns = vec![department_column()];
    columns.extend(category_columns(categories));
    let mut table = Table::new(columns, Layout::Joined);

    let mut ranked: Vec<(&str, &DepartmentAggregate)> = book
        .departments()
        .iter()
        .map(|(code, aggregate)| (code.as_str(), aggregate))
        .collect();
    DepartmentRanker::new(categories).sort(&mut ranked);

    for (code, aggregate) in ranked {
        if aggregate.total() == 0 {
            continue;
        }

        let mut row = vec![names.label(code)];
        row.extend(
            categories
                .iter()
                .map(|category| aggregate.occurrence_count(*category).to_string()),
        );
        table.add_row(row);
    }

    table.render()
}
