// src/report/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure the report can be written to `path`.
///
/// A previous report is only replaced with `--force` or once the user
/// confirms on stdin; declining ends the run with [`AppError::Output`].
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing report will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Output(format!(
            "existing file not overwritten: {}",
            path.display()
        ))),
    }
}
