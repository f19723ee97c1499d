//! Column geometry shared by the summary and detail tables.

use crate::models::ExceptionCategory;
use crate::utils::table::{Align, Column};

pub(crate) const DEPARTMENT_WIDTH: usize = 18;
pub(crate) const NAME_WIDTH: usize = 30;
pub(crate) const COUNT_WIDTH: usize = 15;

pub(crate) fn department_column() -> Column {
    Column::new("Department", DEPARTMENT_WIDTH, Align::Left)
}

pub(crate) fn name_column() -> Column {
    Column::new("Name", NAME_WIDTH, Align::Left)
}

/// One right-aligned count column per requested category, in caller order.
pub(crate) fn category_columns(categories: &[ExceptionCategory]) -> Vec<Column> {
    categories
        .iter()
        .map(|category| Column::new(category.label(), COUNT_WIDTH, Align::Right))
        .collect()
}
