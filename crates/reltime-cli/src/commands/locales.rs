//! Implementation of the `reltime locales` command.

use miette::IntoDiagnostic;
use reltime::{Flavour, builtin};
use serde::Serialize;

use crate::output::table::format_locales_table;

/// Arguments for the locales command.
#[derive(Debug, clap::Args)]
pub struct LocalesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one locale.
#[derive(Serialize)]
struct LocaleJson {
    tag: String,
    plural_rule: String,
    flavours: Vec<Flavour>,
}

/// Run the locales command.
pub fn run_locales(args: LocalesArgs) -> miette::Result<i32> {
    let locales = builtin::load_all().into_diagnostic()?;

    if args.json {
        let json_data: Vec<LocaleJson> = locales
            .iter()
            .map(|locale| LocaleJson {
                tag: locale.tag().to_string(),
                plural_rule: locale.plural_rule().to_string(),
                flavours: locale.flavours().collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        println!("{}", format_locales_table(&locales));
    }
    Ok(exitcode::OK)
}
