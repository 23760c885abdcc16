use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LocationTimeTableParser;
use crate::core::formatter::day_labels;
use crate::errors::AppResult;
use crate::models::ScheduleKind;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_notice, colorize_section, colorize_today};
use crate::utils::table::{Column, Table};

/// Handle the `show` command.
///
/// Mirrors how a location page is assembled: a section per schedule kind,
/// dropped when the kind has nothing to show for today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        location,
        kind,
        today,
        label,
        table,
    } = cmd
    {
        let mut parser = super::build_parser(cfg, today.as_deref())?;
        let label = label.as_deref().unwrap_or(&cfg.today_label);
        let kinds = super::kinds_or_all(kind);

        for loc in super::load_locations(location)? {
            header(&loc.display_name);
            parser.set_location(loc);

            let mut printed = 0;
            for k in &kinds {
                if print_section(&mut parser, *k, label, *table) {
                    printed += 1;
                }
            }

            if printed == 0 {
                println!("{}", colorize_notice("No schedules available."));
            }
        }
    }
    Ok(())
}

fn print_section(
    parser: &mut LocationTimeTableParser,
    kind: ScheduleKind,
    label: &str,
    as_table: bool,
) -> bool {
    let today_markup = parser.get_today_schedule_markup(kind, label);
    if today_markup.is_empty() {
        return false;
    }

    let is_alert = parser
        .today_schedule(kind)
        .is_some_and(|t| t.css_flag.is_alert());

    println!("{}", colorize_section(kind.title()));
    print!("{}", colorize_today(&today_markup, is_alert));

    if as_table {
        let style = parser.settings().text_style;
        let mut t = Table::new(vec![Column::new("Days"), Column::new("Hours")]);
        for entry in &parser.time_table(kind).entries {
            let (days, _) = day_labels(entry, style);
            t.add_row(vec![days.trim_end_matches(':').to_string(), entry.schedule.clone()]);
        }
        print!("{}", t.render());
    } else {
        print!("{}", parser.get_time_table_markup(kind));
    }

    true
}
