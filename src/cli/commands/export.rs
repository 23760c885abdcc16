use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        location,
        format,
        file,
        kind,
        today,
        force,
    } = cmd
    {
        let mut parser = super::build_parser(cfg, today.as_deref())?;
        let locations = super::load_locations(location)?;
        let kinds = super::kinds_or_all(kind);

        let count = ExportLogic::export(&mut parser, &locations, &kinds, *format, file, *force)?;
        info(format!("{count} row(s) written as {}", format.as_str()));
    }
    Ok(())
}
