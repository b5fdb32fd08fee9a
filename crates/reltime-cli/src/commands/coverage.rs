//! Coverage command implementation.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use reltime::{Flavour, Locale, PhraseTable, builtin, lint_locale, lint_untranslated};
use serde::Serialize;

use crate::output::table::{LocaleCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Locales to report on (comma-separated). Defaults to every built-in locale.
    #[arg(long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// List each lint warning below the table.
    #[arg(long)]
    pub warnings: bool,

    /// Exit with non-zero code if any locale has lint warnings.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    locale: &'a str,
    plural_rule: &'a str,
    flavours: &'a [Flavour],
    units: usize,
    warnings: &'a [String],
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let reference = builtin::load("en").into_diagnostic()?;
    let locales: Vec<&Locale> = if args.locale.is_empty() {
        builtin::load_all().into_diagnostic()?
    } else {
        args.locale
            .iter()
            .map(String::as_str)
            .map(builtin::load)
            .collect::<Result<_, _>>()
            .into_diagnostic()?
    };

    let coverage_data: Vec<LocaleCoverage> = locales
        .iter()
        .map(|locale| {
            let mut warnings = lint_locale(locale);
            warnings.extend(lint_untranslated(locale, reference));
            LocaleCoverage {
                tag: locale.tag().to_string(),
                plural_rule: locale.plural_rule().to_string(),
                flavours: locale.flavours().collect(),
                units: locale.table(Flavour::Long).map_or(0, PhraseTable::len),
                warnings: warnings.iter().map(ToString::to_string).collect(),
            }
        })
        .collect();

    let any_warnings = coverage_data.iter().any(|c| !c.warnings.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson<'_>> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: &c.tag,
                plural_rule: &c.plural_rule,
                flavours: &c.flavours,
                units: c.units,
                warnings: &c.warnings,
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_coverage_table(&coverage_data));

        if args.warnings {
            for locale in coverage_data.iter().filter(|c| !c.warnings.is_empty()) {
                println!("\nWarnings for {}:", locale.tag);
                for warning in &locale.warnings {
                    println!("  - {warning}");
                }
            }
        }
    }

    if args.strict && any_warnings {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
