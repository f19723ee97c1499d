use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, location: &std::path::Path) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", location.display());
        }

        // without flags print as well, nothing else to do
        if *print_config || !*path {
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
