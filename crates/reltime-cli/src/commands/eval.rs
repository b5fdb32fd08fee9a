//! Implementation of the `reltime eval` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use reltime::{Direction, Flavour, Locale, Resolver, Style, TimeUnit, builtin};
use serde::Serialize;
use tracing::debug;

use super::load_table;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Locale tag (e.g., en, ru, zh_Hant)
    #[arg(long, env = "RELTIME_LOCALE", default_value = "en")]
    pub locale: String,

    /// Time unit (year, quarter, month, week, day, hour, minute, second, now)
    #[arg(long)]
    pub unit: TimeUnit,

    /// Signed distance: negative values are in the past, positive in the future
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub value: f64,

    /// Table flavour (defaults to long_convenient where defined, else long)
    #[arg(long, env = "RELTIME_FLAVOUR")]
    pub flavour: Option<Flavour>,

    /// Explicit direction; `--value` is then an unsigned magnitude
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Table file (.rlt) to use instead of the built-in locale
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult<'a> {
    pub locale: &'a str,
    pub unit: TimeUnit,
    pub flavour: Flavour,
    pub value: f64,
    pub phrase: String,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let custom = match &args.table {
        Some(path) => Some(load_table(&args.locale, path)?),
        None => None,
    };
    let locale: &Locale = match &custom {
        Some(locale) => locale,
        None => builtin::load(&args.locale).into_diagnostic()?,
    };

    let style = args.flavour.map_or_else(Style::default, Style::only);
    let resolver = Resolver::with_style(locale, style);
    debug!(locale = locale.tag(), flavour = %resolver.flavour(), "selected flavour");
    let result = match args.direction {
        Some(direction) if direction.is_period() => {
            resolver.resolve(args.unit, args.value.abs(), direction)
        }
        Some(direction) => resolver.resolve(args.unit, args.value, direction),
        None => resolver.resolve_signed(args.unit, args.value),
    };

    match result {
        Ok(phrase) => {
            if args.json {
                let output = EvalResult {
                    locale: locale.tag(),
                    unit: args.unit,
                    flavour: resolver.flavour(),
                    value: args.value,
                    phrase,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{phrase}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
