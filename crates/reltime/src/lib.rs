//! Locale-aware relative time phrases.
//!
//! Given a calendar unit, a magnitude, a direction and a flavour, `reltime`
//! picks the grammatically correct phrase from a locale's tables: "3 days
//! ago", "in a week", "last year", "сейчас".
//!
//! ```
//! use reltime::{Direction, Flavour, TimeUnit, builtin, resolve};
//!
//! let ru = builtin::locale("ru").unwrap();
//! let phrase = resolve(ru, TimeUnit::Day, 11.0, Direction::Past, Flavour::Long).unwrap();
//! assert_eq!(phrase, "11 дней назад");
//! ```
//!
//! Calendar arithmetic (turning two instants into a unit and a magnitude) and
//! locale negotiation (mapping `"en_US"` to `"en"`) are left to the caller.

pub mod builtin;
pub mod engine;
pub mod parser;
pub mod types;

pub use engine::{
    DirectionalEntry, Forms, LINT_SAMPLE_MAX, LoadError, LoadWarning, Locale, LocaleRegistry,
    PhraseTable, PluralForms, PluralRule, ResolveError, Resolver, Style, UnitEntry, UnknownKey,
    compute_suggestions, lint_locale, lint_untranslated, resolve, resolve_signed, resolve_styled,
};
pub use parser::ParseError;
pub use types::{Direction, Flavour, PluralCategory, Segment, Template, TimeUnit, format_magnitude};
