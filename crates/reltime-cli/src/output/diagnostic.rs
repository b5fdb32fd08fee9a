//! Miette diagnostic wrapper for `.rlt` table errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use reltime::LoadError;
use thiserror::Error;

/// A miette-compatible diagnostic for a table file that failed to load.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(reltime::table))]
pub struct TableDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TableDiagnostic {
    /// Create a diagnostic from a positioned load error.
    ///
    /// Returns `None` for errors without a source position, such as a
    /// missing `long` flavour.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Option<Self> {
        let (line, column, message, help) = match err {
            LoadError::Parse {
                line,
                column,
                message,
                ..
            } => (*line, *column, format!("syntax error: {message}"), None),
            LoadError::Invalid {
                path: key,
                line,
                column,
                message,
                ..
            } => (
                *line,
                *column,
                format!("invalid table: {message}"),
                Some(format!("while reading '{key}'")),
            ),
            _ => return None,
        };

        let offset = byte_offset(content, line, column);
        let width = content
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);

        Some(TableDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, width).into(),
            message,
            help,
        })
    }
}

/// Convert a 1-based line and character column to a byte offset, clamped to
/// the content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = content.get(line_start..).unwrap_or_default();
    let within = rest
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(rest.len(), |(offset, _)| offset);
    line_start + within
}
