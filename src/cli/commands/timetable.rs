use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `timetable` command: weekly rows per location
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timetable {
        location,
        kind,
        today,
    } = cmd
    {
        let mut parser = super::build_parser(cfg, today.as_deref())?;

        for loc in super::load_locations(location)? {
            parser.set_location(loc);
            print!("{}", parser.get_time_table_markup(*kind));
        }
    }
    Ok(())
}
