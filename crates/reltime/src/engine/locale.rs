//! Locales: a plural rule plus one phrase table per flavour.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use bon::bon;
use serde::Serialize;
use tracing::debug;

use crate::engine::build::build_tables;
use crate::engine::error::LoadError;
use crate::engine::plural::PluralRule;
use crate::engine::table::PhraseTable;
use crate::parser::{ParseError, parse_file};
use crate::types::{Flavour, PluralCategory};

/// Everything the resolver needs to know about one language.
///
/// A locale is immutable once built and is `Send + Sync`, so a single
/// instance can serve any number of threads.
///
/// # Example
///
/// ```
/// use reltime::{Direction, Flavour, Locale, PluralRule, TimeUnit, resolve};
///
/// let locale = Locale::from_source(
///     "en",
///     PluralRule::OneOther,
///     r#"long = { day: { past: { one: "{0} day ago", other: "{0} days ago" } }, };"#,
/// )
/// .unwrap();
///
/// let phrase = resolve(&locale, TimeUnit::Day, 2.0, Direction::Past, Flavour::Long).unwrap();
/// assert_eq!(phrase, "2 days ago");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Locale {
    tag: String,
    plural_rule: PluralRule,
    tables: BTreeMap<Flavour, PhraseTable>,
}

#[bon]
impl Locale {
    /// Assembles a locale from already-built tables.
    ///
    /// Fails with [`LoadError::MissingLongFlavour`] if `tables` has no
    /// [`Flavour::Long`] entry, since every lookup eventually falls back
    /// to it.
    #[builder]
    pub fn new(
        #[builder(into)] tag: String,
        #[builder(default = PluralRule::OneOther)] plural_rule: PluralRule,
        tables: BTreeMap<Flavour, PhraseTable>,
    ) -> Result<Locale, LoadError> {
        if !tables.contains_key(&Flavour::Long) {
            return Err(LoadError::MissingLongFlavour { locale: tag });
        }
        Ok(Locale {
            tag,
            plural_rule,
            tables,
        })
    }
}

impl Locale {
    /// Parses `.rlt` source text into a locale.
    pub fn from_source(
        tag: impl Into<String>,
        plural_rule: PluralRule,
        source: &str,
    ) -> Result<Locale, LoadError> {
        let tag = tag.into();
        let definitions = parse_file(source).map_err(|err| parse_error(&tag, err))?;
        let tables = build_tables(&tag, &definitions)?;
        debug!(locale = %tag, flavours = tables.len(), "built locale tables");
        Locale::builder()
            .tag(tag)
            .plural_rule(plural_rule)
            .tables(tables)
            .build()
    }

    /// Reads and parses a `.rlt` file.
    pub fn from_path(
        tag: impl Into<String>,
        plural_rule: PluralRule,
        path: impl AsRef<Path>,
    ) -> Result<Locale, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Locale::from_source(tag, plural_rule, &source)
    }

    /// The locale's identifier, e.g. `"en"` or `"ar_AE"`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn plural_rule(&self) -> &PluralRule {
        &self.plural_rule
    }

    /// Flavours this locale defines, in declaration order of [`Flavour`].
    pub fn flavours(&self) -> impl Iterator<Item = Flavour> + '_ {
        self.tables.keys().copied()
    }

    pub fn has_flavour(&self, flavour: Flavour) -> bool {
        self.tables.contains_key(&flavour)
    }

    /// The table for exactly `flavour`, without fallback.
    pub fn table(&self, flavour: Flavour) -> Option<&PhraseTable> {
        self.tables.get(&flavour)
    }

    /// Plural category of `magnitude`; unclassified values count as `other`.
    pub fn categorize(&self, magnitude: f64) -> PluralCategory {
        self.plural_rule
            .categorize(magnitude)
            .unwrap_or(PluralCategory::Other)
    }
}

fn parse_error(locale: &str, err: ParseError) -> LoadError {
    let (line, column) = err.position();
    LoadError::Parse {
        locale: locale.to_string(),
        line,
        column,
        message: err.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_long_table() {
        let mut tables = BTreeMap::new();
        tables.insert(Flavour::Short, PhraseTable::default());
        let err = Locale::builder()
            .tag("xx")
            .tables(tables)
            .build()
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingLongFlavour { locale } if locale == "xx"));
    }

    #[test]
    fn locale_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Locale>();
    }
}
