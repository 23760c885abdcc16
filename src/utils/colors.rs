/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Alert rows are highlighted, everything else is printed as is.
pub fn colorize_today(value: &str, is_alert: bool) -> String {
    if is_alert {
        format!("{YELLOW}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_section(value: &str) -> String {
    format!("{CYAN}{value}{RESET}")
}

pub fn colorize_notice(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
