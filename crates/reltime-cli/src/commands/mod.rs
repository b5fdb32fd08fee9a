//! CLI command implementations.

mod check;
mod coverage;
mod eval;
mod locales;

use std::fs::read_to_string;
use std::path::Path;

use miette::{IntoDiagnostic, Report, miette};
use reltime::{Locale, PluralRule};

use crate::output::TableDiagnostic;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use eval::{EvalArgs, run_eval};
pub use locales::{LocalesArgs, run_locales};

/// Load a table file as locale `tag`, with the plural rule of the built-in
/// locale of the same tag.
///
/// Parse and table errors come back as source diagnostics pointing into the
/// file.
fn load_table(tag: &str, path: &Path) -> Result<Locale, Report> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot read table file {}: {}", path.display(), e))?;
    match Locale::from_source(tag, PluralRule::for_tag(tag), &content) {
        Ok(locale) => Ok(locale),
        Err(err) => match TableDiagnostic::from_load_error(path, &content, &err) {
            Some(diagnostic) => Err(diagnostic.into()),
            None => Err(err).into_diagnostic(),
        },
    }
}
