//! Parser for `.rlt` locale table files and phrase templates.
//!
//! Parsing is split in two: [`parse_file`] turns a table file into a generic
//! AST of nested maps and strings, and the engine later builds typed phrase
//! tables from it. Templates inside table strings are parsed during that
//! second step with [`parse_template`].

pub mod ast;
pub mod error;
mod file;
mod template;

pub use ast::{Definition, Entry, Node, Span};
pub use error::ParseError;
pub use file::parse_file;
pub use template::parse_template;

/// Calculate line and column from original input and remaining input.
pub(crate) fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let line_start = consumed_str.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed_str[line_start..].chars().count() + 1;
    (line, column)
}
