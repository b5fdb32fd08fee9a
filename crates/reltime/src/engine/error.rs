//! Error and warning types for the engine.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::types::{Direction, Flavour, PluralCategory, TimeUnit};

/// Errors that occur while building a locale from table data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The table file is not syntactically valid.
    #[error("<{locale}>:{line}:{column}: {message}")]
    Parse {
        locale: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// The table file parsed but does not describe valid phrase tables.
    #[error("<{locale}>:{line}:{column}: {path}: {message}")]
    Invalid {
        locale: String,
        path: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// Every locale needs a `long` table to fall back to.
    #[error("locale '{locale}' does not define the 'long' flavour")]
    MissingLongFlavour { locale: String },

    /// The tag names no built-in locale.
    #[error("no built-in locale '{locale}'{}", did_you_mean(.suggestions))]
    UnknownLocale {
        locale: String,
        suggestions: Vec<String>,
    },

    /// No CLDR plural data could be found for a language.
    #[error("no CLDR plural rules for language '{language}'")]
    UnknownLanguage { language: String },
}

/// Errors returned by the resolver.
///
/// `Unsupported` is the "no phrase available" result: the locale has no
/// template for the combination even after flavour and category fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// No template exists for this combination in any fallback flavour.
    #[error("locale '{locale}' has no {direction} phrase for unit '{unit}' in flavour '{flavour}'")]
    Unsupported {
        locale: String,
        flavour: Flavour,
        unit: TimeUnit,
        direction: Direction,
    },

    /// The magnitude is negative, NaN or infinite.
    #[error("invalid magnitude {value}: expected a finite, non-negative number")]
    InvalidMagnitude { value: f64 },
}

/// A string that does not name any known key of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct UnknownKey {
    /// What was being parsed ("unit", "flavour", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub key: String,
    /// Close matches, closest first.
    pub suggestions: Vec<String>,
}

impl UnknownKey {
    /// Builds the error, computing suggestions from the valid names.
    pub fn new<'a>(
        kind: &'static str,
        key: &str,
        available: impl IntoIterator<Item = &'a str>,
    ) -> UnknownKey {
        let available: Vec<String> = available.into_iter().map(str::to_string).collect();
        UnknownKey {
            kind,
            key: key.to_string(),
            suggestions: compute_suggestions(key, &available),
        }
    }
}

impl Display for UnknownKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "unknown {} '{}'{}",
            self.kind,
            self.key,
            did_you_mean(&self.suggestions)
        )
    }
}

/// Formats a " (did you mean: a, b?)" suffix, or nothing.
fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Compute up to three close matches for `key` among `available`.
///
/// Keys of three characters or fewer accept an edit distance of 1, longer
/// keys accept 2. Results are ordered closest first.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

/// A non-fatal data-quality finding about a locale's tables.
///
/// Each of these is recovered at resolution time by the fallback chain, so
/// they never cause wrong-language output, but they usually point at
/// incomplete locale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// The plural rule produces a category the table does not define, so
    /// `other` is used instead.
    #[error(
        "locale '{locale}': {path} has no '{category}' form (first needed for {example})"
    )]
    MissingCategory {
        locale: String,
        path: String,
        category: PluralCategory,
        example: u32,
    },

    /// A unit/direction is pluralized in one flavour but flat in another.
    #[error(
        "locale '{locale}': {unit}.{direction} is pluralized in '{plural_flavour}' but not in '{flat_flavour}'"
    )]
    InconsistentPlurals {
        locale: String,
        unit: TimeUnit,
        direction: Direction,
        plural_flavour: Flavour,
        flat_flavour: Flavour,
    },

    /// A string is identical to the reference (English) string.
    #[error("locale '{locale}': {path} looks untranslated: \"{text}\"")]
    Untranslated {
        locale: String,
        path: String,
        text: String,
    },

    /// A unit of the `long` table is missing from another flavour.
    #[error("locale '{locale}': flavour '{flavour}' has no '{unit}' entry (falls back to 'long')")]
    MissingUnit {
        locale: String,
        flavour: Flavour,
        unit: TimeUnit,
    },
}
