use rtimesheets::models::DepartmentNames;
use rtimesheets::utils::formatting::escape_html;
use rtimesheets::utils::table::{Align, Column, Layout, Table};
use rtimesheets::utils::{pad_left, pad_right};
use std::collections::BTreeMap;

fn sample(layout: Layout) -> Table {
    let mut table = Table::new(
        vec![
            Column::new("Key", 5, Align::Left),
            Column::new("N", 3, Align::Right),
        ],
        layout,
    );
    table.add_row(vec!["ab".to_string(), "7".to_string()]);
    table
}

#[test]
fn test_padding_never_truncates() {
    assert_eq!(pad_right("ab", 4), "ab  ");
    assert_eq!(pad_left("ab", 4), "  ab");
    assert_eq!(pad_right("abcdef", 4), "abcdef");
    assert_eq!(pad_left("abcdef", 4), "abcdef");
}

#[test]
fn test_padding_counts_display_width() {
    assert_eq!(pad_right("né", 4), "né  ");
}

#[test]
fn test_joined_layout() {
    let table = sample(Layout::Joined);
    assert_eq!(table.render(), "Key   | N  \n------+----\nab    |   7\n");
}

#[test]
fn test_terminated_layout() {
    let table = sample(Layout::Terminated);
    assert_eq!(
        table.render(),
        "Key   | N   | \n------+-----+-\nab    |   7 | \n"
    );
}

#[test]
fn test_missing_cells_render_blank() {
    let mut table = Table::new(
        vec![
            Column::new("A", 2, Align::Left),
            Column::new("B", 2, Align::Right),
        ],
        Layout::Joined,
    );
    table.add_row(vec!["x".to_string()]);
    assert_eq!(table.row_line(&table.rows[0]), "x  |   ");
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn test_empty_department_table_renders_bare_codes() {
    let names = DepartmentNames::new(BTreeMap::new());
    assert_eq!(names.label("016"), "016");
    assert_eq!(names.name("016"), None);
}
