//! Template string parser using winnow.
//!
//! Templates are literal text with at most one `{0}` magnitude placeholder.
//! `{{` and `}}` are escapes for literal braces; any other brace is an error.

use winnow::combinator::alt;
use winnow::prelude::*;
use winnow::token::take_while;

use super::calculate_position;
use super::error::ParseError;
use crate::types::{Segment, Template};

/// Parse a template string.
///
/// # Examples
///
/// ```
/// use reltime::parser::parse_template;
///
/// assert_eq!(parse_template("{0} days ago").unwrap().render(3.0), "3 days ago");
/// assert!(parse_template("{0} of {0}").is_err());
/// assert!(parse_template("{1} days ago").is_err());
/// ```
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    let mut segments: Vec<Segment> = Vec::new();
    let mut has_placeholder = false;

    while !remaining.is_empty() {
        let before = remaining;
        let Ok(parsed) = segment(&mut remaining) else {
            return Err(error_at(input, before));
        };
        match parsed {
            Segment::Magnitude if has_placeholder => {
                let (line, column) = calculate_position(input, before);
                return Err(ParseError::Syntax {
                    line,
                    column,
                    message: "a template may contain at most one {0} placeholder".to_string(),
                });
            }
            Segment::Magnitude => {
                has_placeholder = true;
                segments.push(Segment::Magnitude);
            }
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = segments.last_mut() {
                    prev.push_str(&text);
                } else {
                    segments.push(Segment::Literal(text));
                }
            }
        }
    }

    Ok(Template::from_segments(segments))
}

/// Describe why no segment could be read at `remaining`.
fn error_at(input: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(input, remaining);
    let message = if remaining.starts_with('{') {
        "unknown placeholder: only {0} is supported (use {{ for a literal brace)".to_string()
    } else {
        "unmatched '}' (use }} for a literal brace)".to_string()
    };
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Parse a single template segment.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_run)).parse_next(input)
}

/// Parse escape sequences in templates: {{ }}
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse the magnitude placeholder.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    "{0}".value(Segment::Magnitude).parse_next(input)
}

/// Parse a run of text without braces.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}
