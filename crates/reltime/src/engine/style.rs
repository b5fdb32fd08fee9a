//! Preferred flavour lists.

use serde::Serialize;

use crate::types::Flavour;

/// An ordered list of preferred flavours.
///
/// A style picks the first of its flavours that a locale actually defines;
/// the chosen flavour then falls back to `long` entry by entry as usual.
/// Locales rarely define the extra flavours, so most of them end up on
/// their plain `long` or `short` tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Style {
    pub flavours: Vec<Flavour>,
}

impl Style {
    pub fn new(flavours: impl IntoIterator<Item = Flavour>) -> Style {
        Style {
            flavours: flavours.into_iter().collect(),
        }
    }

    /// A single flavour with no alternatives.
    pub fn only(flavour: Flavour) -> Style {
        Style {
            flavours: vec![flavour],
        }
    }

    /// Bare durations: "3 days", "just now".
    pub fn time() -> Style {
        Style::only(Flavour::LongTime)
    }

    /// The shortest available wording: "3d", "3 days" in short form, or
    /// the narrow table.
    pub fn compact() -> Style {
        Style::new([Flavour::Tiny, Flavour::ShortTime, Flavour::Narrow])
    }
}

/// Idiomatic long wording ("yesterday", "a day ago") where available.
impl Default for Style {
    fn default() -> Self {
        Style::new([Flavour::LongConvenient, Flavour::Long])
    }
}
