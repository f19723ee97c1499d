use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::ingest::SheetReader;
use crate::report;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        subject,
        headers,
        format,
        out,
        force,
    } = cmd
    {
        let reader = SheetReader::new(*headers || cfg.has_headers);
        let ingested = reader.read_path(expand_tilde(file))?;

        if ingested.skipped > 0 {
            // keep stdout clean when the report itself goes there
            let msg = format!("{} malformed sheet row(s) skipped", ingested.skipped);
            if out.is_some() {
                warning(msg);
            } else {
                tracing::warn!("{msg}");
            }
        }

        let subject = subject.as_deref().unwrap_or(cfg.default_subject.as_str());
        let text = Core::build_report(ingested.rows, subject, &cfg.department_names());

        let out_path = out.as_deref().map(expand_tilde);
        report::deliver(
            &text,
            format.unwrap_or(cfg.default_format),
            out_path.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
