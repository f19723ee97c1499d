// src/report/output.rs

use super::fs_utils::ensure_writable;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::escape_html;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Html,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Html => "html",
        }
    }

    /// Wrap the plain report for the chosen format.
    ///
    /// `Html` produces a mail body: a monospace `<pre>` block with the
    /// markup characters escaped.
    pub fn apply(&self, report: &str) -> String {
        match self {
            ReportFormat::Text => report.to_string(),
            ReportFormat::Html => format!(
                "<pre style=\"font-family: 'courier'\">{}</pre>",
                escape_html(report)
            ),
        }
    }
}

/// Write the formatted report to `out`, or to stdout when no file is given.
pub fn deliver(report: &str, format: ReportFormat, out: Option<&Path>, force: bool) -> AppResult<()> {
    let body = format.apply(report);

    match out {
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.flush()?;
        }
        Some(path) => {
            ensure_writable(path, force)?;
            fs::write(path, body.as_bytes())?;
            info!(path = %path.display(), format = format.as_str(), "report written");
            success(format!("Report written: {}", path.display()));
        }
    }

    Ok(())
}
