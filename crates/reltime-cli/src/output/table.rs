//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use reltime::{Flavour, Locale, TimeUnit};

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale tag (e.g., "en", "zh_Hant").
    pub tag: String,
    /// Name of the locale's plural rule.
    pub plural_rule: String,
    /// Flavours the locale defines.
    pub flavours: Vec<Flavour>,
    /// Number of units in the `long` table.
    pub units: usize,
    /// Lint warnings raised for the locale.
    pub warnings: Vec<String>,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn flavour_list(flavours: impl IntoIterator<Item = Flavour>) -> String {
    flavours
        .into_iter()
        .map(Flavour::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format coverage data as a table.
pub fn format_coverage_table(coverage: &[LocaleCoverage]) -> Table {
    let mut table = new_table(vec!["Locale", "Plural rule", "Flavours", "Units", "Warnings"]);
    for locale in coverage {
        table.add_row(vec![
            locale.tag.clone(),
            locale.plural_rule.clone(),
            flavour_list(locale.flavours.iter().copied()),
            format!("{}/{}", locale.units, TimeUnit::ALL.len()),
            locale.warnings.len().to_string(),
        ]);
    }
    table
}

/// Format a list of locales as a table.
pub fn format_locales_table(locales: &[&Locale]) -> Table {
    let mut table = new_table(vec!["Locale", "Plural rule", "Flavours"]);
    for locale in locales {
        table.add_row(vec![
            locale.tag().to_string(),
            locale.plural_rule().to_string(),
            flavour_list(locale.flavours()),
        ]);
    }
    table
}
