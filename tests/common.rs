#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheets::models::{ExceptionCategory, RowRecord};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheets")
}

/// Create a unique temp file path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheets.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp CSV and return its path
pub fn write_sheet(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write sheet");
    path
}

/// Write a config file pointing at the default departments and return its path
pub fn write_config(name: &str, yaml: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, yaml).expect("write config");
    path
}

/// Write `rows` into the first worksheet of a fresh `.xlsx`; empty strings
/// leave the cell blank
pub fn write_workbook(name: &str, rows: &[&[&str]]) -> String {
    let path = temp_path(name, "xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, cells) in rows.iter().enumerate() {
        for (c, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                worksheet
                    .write_string(r as u32, c as u16, *value)
                    .expect("write cell");
            }
        }
    }

    workbook.save(&path).expect("save workbook");
    path
}

/// Config path that does not exist (defaults apply)
pub fn missing_config(name: &str) -> String {
    temp_path(name, "conf")
}

pub fn row(dept: &str, name: &str, categories: &[ExceptionCategory]) -> RowRecord {
    RowRecord::new(dept, name, &format!("ID-{name}")).with_categories(categories.iter().copied())
}

/// Small positional sheet: two RCA associates and one Dietary associate.
pub const SAMPLE_SHEET: &str = "\
CommCode,AssociateName,AssociateID,Dept,MissedPunch,OvertimeHours,LongInterval,ShortShift,ShortLunch,MissedLunch
100,Smith John,1001,016,x,,,,,
100,Doe Jane,1002,016,X,x,,,,
100,Brown Bob,1003,030,x,,,,,
100,Ghost Row,1004,030,,,,,,
";
