//! Unified application error type.
//! Every outer layer (ingest, config, report output, cli) returns AppError;
//! the report engine itself is total and never fails.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Sheet ingestion
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Invalid exception sheet: {0}")]
    Sheet(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Logging
    // ---------------------------
    #[error("Logging setup error: {0}")]
    Telemetry(String),

    // ---------------------------
    // Report output
    // ---------------------------
    #[error("Output error: {0}")]
    Output(String),
}

pub type AppResult<T> = Result<T, AppError>;
