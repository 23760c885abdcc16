//! Text helpers shared by the schedule engine and the CLI.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\d+)\}").unwrap());

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercases everything, then uppercases the first character of every word.
///
/// `"MON-THU 9:00 AM"` → `"Mon-Thu 9:00 Am"`
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_word = false;

    for c in s.chars() {
        if is_word_char(c) && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        prev_is_word = is_word_char(c);
    }

    out
}

/// Drops leading and trailing non-word characters (`*`, spaces, dashes...).
pub fn trim_non_word(s: &str) -> &str {
    s.trim_matches(|c: char| !is_word_char(c))
}

/// Fills positional placeholders `{0}`, `{1}`, ... with `values`.
/// Placeholders without a value are left untouched.
pub fn fill_template(template: &str, values: &[&str]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| values.get(i))
                .map(|v| v.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
