//! Phrase templates with an optional magnitude placeholder.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::parser::{ParseError, parse_template};

/// A piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// The `{0}` placeholder, replaced by the magnitude.
    Magnitude,
}

/// A parsed phrase string such as `"{0} days ago"` or `"yesterday"`.
///
/// A template holds at most one [`Segment::Magnitude`]; the parser rejects
/// anything else, so rendering can never leave placeholder syntax behind.
///
/// # Example
///
/// ```
/// use reltime::Template;
///
/// let template: Template = "in {0} days".parse().unwrap();
/// assert!(template.has_placeholder());
/// assert_eq!(template.render(3.0), "in 3 days");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Builds a template from already-validated segments.
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Template {
        Template { segments }
    }

    /// A template consisting of literal text only.
    pub fn literal(text: impl Into<String>) -> Template {
        let text = text.into();
        if text.is_empty() {
            return Template { segments: vec![] };
        }
        Template {
            segments: vec![Segment::Literal(text)],
        }
    }

    /// The segments of this template.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the template contains the magnitude placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.segments.contains(&Segment::Magnitude)
    }

    /// Substitutes `magnitude` into the placeholder, if there is one.
    pub fn render(&self, magnitude: f64) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Magnitude => output.push_str(&format_magnitude(magnitude)),
            }
        }
        output
    }
}

/// Decimal rendering of a magnitude: integral values print without a
/// fractional part (`3.0` becomes `"3"`).
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude}")
}

impl FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_template(s)
    }
}

/// Writes the template back in table-file syntax (`{0}`, `{{`, `}}`).
impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    f.write_str(&text.replace('{', "{{").replace('}', "}}"))?;
                }
                Segment::Magnitude => f.write_str("{0}")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
