use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, check};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config.as_deref());

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("# {}", path.display());
            print!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = check::missing_fields(&path)?;
            if missing.is_empty() {
                success(format!("{} defines every setting", path.display()));
            } else {
                warning(format!(
                    "{} is missing: {} (defaults apply)",
                    path.display(),
                    missing.join(", ")
                ));
            }
        }
    }

    Ok(())
}
