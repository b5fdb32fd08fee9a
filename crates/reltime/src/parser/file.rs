//! `.rlt` table file parser.
//!
//! A file is a sequence of `name = value;` definitions where a value is a
//! quoted string or a braced map:
//!
//! ```text
//! // English, long flavour
//! long = {
//!     day: {
//!         previous: "yesterday",
//!         past: { one: "{0} day ago", other: "{0} days ago" },
//!     },
//!     now: "now",
//! };
//! ```
//!
//! Inside a string, `\"` is a literal quote and `\\` a literal backslash.
//! There are no other escapes.

use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{Definition, Entry, Node, Span};
use super::calculate_position;
use super::error::ParseError;

/// Parse an entire `.rlt` file into definitions.
///
/// # Example
///
/// ```
/// use reltime::parser::{Node, parse_file};
///
/// let defs = parse_file(r#"long = { now: "now" };"#).unwrap();
/// assert_eq!(defs[0].name, "long");
/// assert!(matches!(defs[0].value, Node::Map(_)));
/// ```
pub fn parse_file(input: &str) -> Result<Vec<Definition>, ParseError> {
    let mut remaining = input;
    let mut definitions = Vec::new();
    loop {
        if skip_ws_and_comments(&mut remaining).is_err() {
            return Err(error_at(input, remaining));
        }
        if remaining.is_empty() {
            return Ok(definitions);
        }
        match definition(input, &mut remaining) {
            Ok(def) => definitions.push(def),
            Err(_) => return Err(error_at(input, remaining)),
        }
    }
}

/// Build the error reported when parsing stopped at `remaining`.
fn error_at(original: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    match remaining.chars().next() {
        None => ParseError::UnexpectedEof { line, column },
        Some(c) => ParseError::Syntax {
            line,
            column,
            message: format!("unexpected character: '{c}'"),
        },
    }
}

fn span_at(original: &str, remaining: &str) -> Span {
    let (line, column) = calculate_position(original, remaining);
    Span { line, column }
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse a definition: name = value ;
fn definition(original: &str, input: &mut &str) -> ModalResult<Definition> {
    let span = span_at(original, *input);
    let name = identifier(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = node(original, input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok(Definition { name, value, span })
}

/// Parse a value: string or map.
fn node(original: &str, input: &mut &str) -> ModalResult<Node> {
    if input.starts_with('{') {
        map(original, input).map(Node::Map)
    } else {
        let span = span_at(original, *input);
        let text = quoted_string(input)?;
        Ok(Node::Text {
            text,
            span: Span {
                line: span.line,
                column: span.column + 1,
            },
        })
    }
}

/// Parse a map: { key: value, ... } with trailing comma support.
fn map(original: &str, input: &mut &str) -> ModalResult<Vec<Entry>> {
    '{'.parse_next(input)?;
    let mut entries = Vec::new();
    loop {
        skip_ws_and_comments(input)?;
        if opt('}').parse_next(input)?.is_some() {
            return Ok(entries);
        }
        entries.push(entry(original, input)?);
        skip_ws_and_comments(input)?;
        if opt(',').parse_next(input)?.is_none() {
            '}'.parse_next(input)?;
            return Ok(entries);
        }
    }
}

/// Parse a single entry: key: value
fn entry(original: &str, input: &mut &str) -> ModalResult<Entry> {
    let span = span_at(original, *input);
    let key = identifier(input)?;
    skip_ws_and_comments(input)?;
    ':'.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = node(original, input)?;
    Ok(Entry { key, value, span })
}

/// Parse a snake_case identifier (lowercase start, alphanumeric + underscore).
fn identifier(input: &mut &str) -> ModalResult<String> {
    if !input.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse a quoted string. Template syntax inside is validated later.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let text: String = repeat(0.., string_char).parse_next(input)?;
    '"'.parse_next(input)?;
    Ok(text)
}

/// Parse one string character; `\"` and `\\` stand for a quote and a
/// backslash.
fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((preceded('\\', one_of(['"', '\\'])), none_of(['"', '\\']))).parse_next(input)
}
