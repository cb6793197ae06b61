//! `{tax-…}` placeholder stamping.
//!
//! Page copy references figures through tokens instead of hardcoded numbers:
//! `{tax-annual-gift}` becomes the resolved amount, `{tax-annual-gift-year}`
//! the entry year it came from, `{tax-current-year}` the calendar year.
//! Unknown tokens are left in place so a typo degrades visibly instead of
//! corrupting surrounding copy.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::tax::format::figure_display;
use crate::tax::TaxTable;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{tax-([a-z][a-z-]*)\}").expect("valid token pattern"))
}

/// Replace every `{tax-…}` token in `text` with its resolved display form for
/// `year`. Tokens that resolve to nothing (unknown name, empty table entry)
/// are left intact.
pub fn stamp_figures(text: &str, table: &TaxTable, year: i32) -> String {
    token_pattern()
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            match stamp_one(name, table, year) {
                Some(replacement) => replacement,
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn stamp_one(name: &str, table: &TaxTable, year: i32) -> Option<String> {
    if name == "current-year" {
        return Some(year.to_string());
    }
    if let Some(figure_name) = name.strip_suffix("-year") {
        return table
            .resolve_named(figure_name, year)
            .map(|figure| figure.year.to_string());
    }
    table
        .resolve_named(name, year)
        .map(|figure| figure_display(figure.amount))
}
