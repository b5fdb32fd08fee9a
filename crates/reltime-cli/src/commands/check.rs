//! Implementation of the `reltime check` command.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Report, miette};
use owo_colors::{OwoColorize, Stream};
use reltime::{LoadWarning, Locale, builtin, lint_locale, lint_untranslated};
use serde::Serialize;
use tracing::debug;

use super::load_table;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.rlt); the file stem is the locale tag
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail when any file has lint warnings
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    locale: Option<String>,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let reference = builtin::load("en").into_diagnostic()?;
    let mut reports = Vec::new();
    let mut errors = 0;
    let mut warnings = 0;

    for path in &args.files {
        let (tag, outcome) = match tag_for(path) {
            Ok(tag) => (Some(tag), check_file(tag, path, reference)),
            Err(report) => (None, Err(report)),
        };
        let report = match outcome {
            Ok(found) => {
                warnings += found.len();
                if !args.json {
                    print_warnings(path, &found);
                }
                FileReport {
                    file: path.display().to_string(),
                    locale: tag.map(str::to_string),
                    error: None,
                    warnings: found.iter().map(ToString::to_string).collect(),
                }
            }
            Err(report) => {
                errors += 1;
                if !args.json {
                    eprintln!("{report:?}");
                }
                FileReport {
                    file: path.display().to_string(),
                    locale: tag.map(str::to_string),
                    error: Some(report.to_string()),
                    warnings: Vec::new(),
                }
            }
        };
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        println!(
            "checked {} file(s): {} error(s), {} warning(s)",
            args.files.len(),
            errors,
            warnings
        );
    }

    if errors > 0 || (args.strict && warnings > 0) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// The locale tag a table file is checked as.
fn tag_for(path: &Path) -> Result<&str, Report> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| miette!("Cannot derive a locale tag from {}", path.display()))
}

/// Load one file and collect its lint warnings.
fn check_file(tag: &str, path: &Path, reference: &Locale) -> Result<Vec<LoadWarning>, Report> {
    debug!(file = %path.display(), locale = tag, "checking table file");
    let locale = load_table(tag, path)?;
    let mut warnings = lint_locale(&locale);
    warnings.extend(lint_untranslated(&locale, reference));
    Ok(warnings)
}

fn print_warnings(path: &Path, warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!(
            "{}: {}: {}",
            "warning".if_supports_color(Stream::Stderr, |text| text.yellow()),
            path.display(),
            warning
        );
    }
}
