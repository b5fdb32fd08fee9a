//! Relative-phrase engine.
//!
//! This module holds everything with decision logic: plural rules, the typed
//! phrase tables built from parsed `.rlt` files, locales, and the resolver
//! that turns `(unit, magnitude, direction, flavour)` into a display string.

mod build;
mod error;
mod lint;
mod locale;
mod plural;
mod registry;
mod resolve;
mod style;
mod table;

pub use error::{LoadError, LoadWarning, ResolveError, UnknownKey, compute_suggestions};
pub use lint::{LINT_SAMPLE_MAX, lint_locale, lint_untranslated};
pub use locale::Locale;
pub use plural::PluralRule;
pub use registry::LocaleRegistry;
pub use resolve::{Resolver, resolve, resolve_signed, resolve_styled};
pub use style::Style;
pub use table::{DirectionalEntry, Forms, PhraseTable, PluralForms, UnitEntry};
