use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `today` command: one today row per location
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today {
        location,
        kind,
        today,
        label,
    } = cmd
    {
        let mut parser = super::build_parser(cfg, today.as_deref())?;
        let label = label.as_deref().unwrap_or(&cfg.today_label);

        for loc in super::load_locations(location)? {
            parser.set_location(loc);
            print!("{}", parser.get_today_schedule_markup(*kind, label));
        }
    }
    Ok(())
}
