use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::ExceptionCategory;

/// Handle the `categories` subcommand: one parsed column per line.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Categories { text } = cmd {
        let request = text.join(" ");
        for category in ExceptionCategory::parse_requested(&request) {
            println!("{:<16}{}", category.name(), category.label());
        }
    }
    Ok(())
}
