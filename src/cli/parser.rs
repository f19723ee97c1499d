use crate::report::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheets
/// CLI application to rank timesheet exceptions by department and associate
#[derive(Parser)]
#[command(
    name = "rtimesheets",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rank payroll timesheet exceptions by department and associate and print a fixed-width report",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or shared setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Replace an existing configuration file")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration as YAML")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Show which report columns a request text selects
    Categories {
        /// Free text, e.g. a mail subject: "missed punch, overtime hours"
        #[arg(trailing_var_arg = true, num_args = 0..)]
        text: Vec<String>,
    },

    /// Build the exception report from a review sheet
    Report {
        #[arg(long, value_name = "FILE", help = "Payroll review sheet: workbook (.xlsx, .xls, .ods) or CSV export")]
        file: String,

        #[arg(
            long,
            short = 's',
            value_name = "TEXT",
            help = "Requested categories, comma separated (defaults to the configured subject)"
        )]
        subject: Option<String>,

        #[arg(long = "headers", help = "The first CSV line holds column names")]
        headers: bool,

        #[arg(long, value_enum, help = "Output format (defaults to the configured one)")]
        format: Option<ReportFormat>,

        #[arg(long, value_name = "FILE", help = "Write the report to FILE instead of stdout")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },
}
