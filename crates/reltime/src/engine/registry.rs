//! A caller-owned collection of locales keyed by tag.

use std::collections::BTreeMap;

use crate::builtin;
use crate::engine::error::LoadError;
use crate::engine::locale::Locale;

/// Locales keyed by their exact tag.
///
/// Lookups are exact: `"en_US"` does not match `"en"`. Callers that need
/// tag negotiation do it before asking the registry.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, Locale>,
}

impl LocaleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in locale.
    pub fn with_builtin() -> Result<Self, LoadError> {
        let mut registry = Self::new();
        for locale in builtin::load_all()? {
            registry.register(locale.clone());
        }
        Ok(registry)
    }

    /// Adds a locale, returning the one previously registered under the
    /// same tag.
    pub fn register(&mut self, locale: Locale) -> Option<Locale> {
        self.locales.insert(locale.tag().to_string(), locale)
    }

    pub fn get(&self, tag: &str) -> Option<&Locale> {
        self.locales.get(tag)
    }

    pub fn remove(&mut self, tag: &str) -> Option<Locale> {
        self.locales.remove(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
