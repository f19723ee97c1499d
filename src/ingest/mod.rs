//! Row ingestion from the payroll review sheet: the workbook itself or a
//! CSV export of it.

mod sheet;
mod workbook;

pub use sheet::is_flagged;

use crate::errors::AppResult;
use crate::models::RowRecord;
use csv::{ByteRecord, StringRecord};
use encoding_rs::WINDOWS_1252;
use sheet::SheetLayout;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Rows accepted from a sheet, plus how many lines were dropped.
#[derive(Debug, Default)]
pub struct Ingested {
    pub rows: Vec<RowRecord>,
    pub skipped: usize,
}

/// Input flavour, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Csv,
    Workbook,
}

impl SheetKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("xls" | "xlsx" | "xlsm" | "xlsb" | "ods") => SheetKind::Workbook,
            _ => SheetKind::Csv,
        }
    }
}

pub struct SheetReader {
    has_headers: bool,
}

impl SheetReader {
    pub fn new(has_headers: bool) -> Self {
        Self { has_headers }
    }

    /// Read a workbook (`.xls`, `.xlsx`, ...) or a CSV file, by extension.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> AppResult<Ingested> {
        let path = path.as_ref();
        let kind = SheetKind::from_path(path);
        info!(path = %path.display(), ?kind, headers = self.has_headers, "reading exception sheet");

        match kind {
            SheetKind::Csv => self.read(File::open(path)?),
            SheetKind::Workbook => self.read_workbook(path),
        }
    }

    /// Parse CSV records. Cells that are not valid UTF-8 are decoded as
    /// Windows-1252 (Excel's plain CSV export); rows without a department
    /// are skipped and counted.
    pub fn read<R: Read>(&self, reader: R) -> AppResult<Ingested> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let layout = if self.has_headers {
            SheetLayout::from_headers(&decode_record(csv_reader.byte_headers()?))?
        } else {
            SheetLayout::positional()
        };
        debug!(?layout, "sheet layout resolved");

        let records = csv_reader
            .byte_records()
            .map(|record| record.map(|record| decode_record(&record)));

        Ok(collect_rows(&layout, records))
    }

    /// Parse the first worksheet of a workbook. Formula cells contribute
    /// their last computed value.
    pub fn read_workbook<P: AsRef<Path>>(&self, path: P) -> AppResult<Ingested> {
        let mut records = workbook::first_sheet_records(path.as_ref())?.into_iter();

        let layout = if self.has_headers {
            SheetLayout::from_headers(&records.next().unwrap_or_default())?
        } else {
            SheetLayout::positional()
        };
        debug!(?layout, "sheet layout resolved");

        Ok(collect_rows(&layout, records.map(Ok::<_, Infallible>)))
    }
}

fn collect_rows<I, E>(layout: &SheetLayout, records: I) -> Ingested
where
    I: IntoIterator<Item = Result<StringRecord, E>>,
    E: fmt::Display,
{
    let mut ingested = Ingested::default();

    for (index, record) in records.into_iter().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!(record = index, error = %err, "unreadable sheet row skipped");
                ingested.skipped += 1;
                continue;
            }
        };

        match layout.to_row(&record) {
            Some(row) => ingested.rows.push(row),
            None => {
                warn!(record = index, "sheet row without department skipped");
                ingested.skipped += 1;
            }
        }
    }

    info!(
        rows = ingested.rows.len(),
        skipped = ingested.skipped,
        "exception sheet parsed"
    );
    ingested
}

fn decode_record(record: &ByteRecord) -> StringRecord {
    record.iter().map(decode_field).collect()
}

fn decode_field(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}
