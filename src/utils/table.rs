//! Fixed-width, pipe-separated tables for plain-text reports.

use super::formatting::{pad_left, pad_right};

const SEPARATOR: &str = " | ";
const UNDERLINE_SEPARATOR: &str = "-+-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Where the `" | "` separators go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Between cells only: `a | b | c`
    Joined,
    /// After every cell: `a | b | c | `
    Terminated,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, width: usize, align: Align) -> Self {
        Self {
            header: header.to_string(),
            width,
            align,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub layout: Layout,
}

impl Table {
    pub fn new(columns: Vec<Column>, layout: Layout) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            layout,
        }
    }

    /// Cells beyond the column count are ignored, missing cells render blank.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Header labels are always left aligned.
    pub fn header_line(&self) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|col| pad_right(&col.header, col.width))
            .collect();
        self.join(&cells, SEPARATOR)
    }

    /// Dash runs matching the header, `+` under every `|`.
    pub fn underline(&self) -> String {
        let cells: Vec<String> = self.columns.iter().map(|col| "-".repeat(col.width)).collect();
        self.join(&cells, UNDERLINE_SEPARATOR)
    }

    pub fn row_line(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                match col.align {
                    Align::Left => pad_right(value, col.width),
                    Align::Right => pad_left(value, col.width),
                }
            })
            .collect();
        self.join(&cells, SEPARATOR)
    }

    /// Header, underline and one line per row, each terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.header_line());
        out.push('\n');
        out.push_str(&self.underline());
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.row_line(row));
            out.push('\n');
        }

        out
    }

    fn join(&self, cells: &[String], separator: &str) -> String {
        match self.layout {
            Layout::Joined => cells.join(separator),
            Layout::Terminated => cells.iter().map(|c| format!("{c}{separator}")).collect(),
        }
    }
}
