//! Core value types shared by the parser, the engine and the CLI.

mod keys;
mod template;

pub use keys::{Direction, Flavour, PluralCategory, TimeUnit};
pub use template::{Segment, Template, format_magnitude};
