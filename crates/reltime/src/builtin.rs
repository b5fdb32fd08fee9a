//! Locales compiled into the crate.
//!
//! Each locale's `.rlt` source is embedded with `include_str!` and parsed on
//! first request. Parsed locales live for the rest of the process behind a
//! per-locale [`OnceLock`], so after the first lookup every thread reads the
//! same `&'static Locale` without locking.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::engine::{LoadError, Locale, PluralRule, compute_suggestions};

/// Tag and table source of every built-in locale, sorted by tag.
const SOURCES: &[(&str, &str)] = &[
    ("af", include_str!("../locales/af.rlt")),
    ("am", include_str!("../locales/am.rlt")),
    ("ar_AE", include_str!("../locales/ar_AE.rlt")),
    ("as", include_str!("../locales/as.rlt")),
    ("be", include_str!("../locales/be.rlt")),
    ("bg", include_str!("../locales/bg.rlt")),
    ("bn", include_str!("../locales/bn.rlt")),
    ("br", include_str!("../locales/br.rlt")),
    ("bs", include_str!("../locales/bs.rlt")),
    ("bs_Cyrl", include_str!("../locales/bs_Cyrl.rlt")),
    ("ca", include_str!("../locales/ca.rlt")),
    ("cs", include_str!("../locales/cs.rlt")),
    ("cy", include_str!("../locales/cy.rlt")),
    ("da", include_str!("../locales/da.rlt")),
    ("de", include_str!("../locales/de.rlt")),
    ("dsb", include_str!("../locales/dsb.rlt")),
    ("dz", include_str!("../locales/dz.rlt")),
    ("ee", include_str!("../locales/ee.rlt")),
    ("el", include_str!("../locales/el.rlt")),
    ("en", include_str!("../locales/en.rlt")),
    ("es_MX", include_str!("../locales/es_MX.rlt")),
    ("et", include_str!("../locales/et.rlt")),
    ("eu", include_str!("../locales/eu.rlt")),
    ("fa", include_str!("../locales/fa.rlt")),
    ("fi", include_str!("../locales/fi.rlt")),
    ("fil", include_str!("../locales/fil.rlt")),
    ("fo", include_str!("../locales/fo.rlt")),
    ("fr", include_str!("../locales/fr.rlt")),
    ("fur", include_str!("../locales/fur.rlt")),
    ("fy", include_str!("../locales/fy.rlt")),
    ("ga", include_str!("../locales/ga.rlt")),
    ("gd", include_str!("../locales/gd.rlt")),
    ("gl", include_str!("../locales/gl.rlt")),
    ("gu", include_str!("../locales/gu.rlt")),
    ("he", include_str!("../locales/he.rlt")),
    ("hi", include_str!("../locales/hi.rlt")),
    ("hr", include_str!("../locales/hr.rlt")),
    ("hsb", include_str!("../locales/hsb.rlt")),
    ("hu", include_str!("../locales/hu.rlt")),
    ("hy", include_str!("../locales/hy.rlt")),
    ("id", include_str!("../locales/id.rlt")),
    ("is", include_str!("../locales/is.rlt")),
    ("it", include_str!("../locales/it.rlt")),
    ("ja", include_str!("../locales/ja.rlt")),
    ("jgo", include_str!("../locales/jgo.rlt")),
    ("ka", include_str!("../locales/ka.rlt")),
    ("kea", include_str!("../locales/kea.rlt")),
    ("kk", include_str!("../locales/kk.rlt")),
    ("kl", include_str!("../locales/kl.rlt")),
    ("km", include_str!("../locales/km.rlt")),
    ("kn", include_str!("../locales/kn.rlt")),
    ("ko", include_str!("../locales/ko.rlt")),
    ("kok", include_str!("../locales/kok.rlt")),
    ("ksh", include_str!("../locales/ksh.rlt")),
    ("ky", include_str!("../locales/ky.rlt")),
    ("lb", include_str!("../locales/lb.rlt")),
    ("lkt", include_str!("../locales/lkt.rlt")),
    ("lo", include_str!("../locales/lo.rlt")),
    ("lt", include_str!("../locales/lt.rlt")),
    ("lv", include_str!("../locales/lv.rlt")),
    ("mk", include_str!("../locales/mk.rlt")),
    ("ml", include_str!("../locales/ml.rlt")),
    ("mn", include_str!("../locales/mn.rlt")),
    ("mr", include_str!("../locales/mr.rlt")),
    ("ms", include_str!("../locales/ms.rlt")),
    ("mt", include_str!("../locales/mt.rlt")),
    ("my", include_str!("../locales/my.rlt")),
    ("mzn", include_str!("../locales/mzn.rlt")),
    ("nb", include_str!("../locales/nb.rlt")),
    ("ne", include_str!("../locales/ne.rlt")),
    ("nl", include_str!("../locales/nl.rlt")),
    ("nn", include_str!("../locales/nn.rlt")),
    ("or", include_str!("../locales/or.rlt")),
    ("pa", include_str!("../locales/pa.rlt")),
    ("pl", include_str!("../locales/pl.rlt")),
    ("ps", include_str!("../locales/ps.rlt")),
    ("pt", include_str!("../locales/pt.rlt")),
    ("ro", include_str!("../locales/ro.rlt")),
    ("ru", include_str!("../locales/ru.rlt")),
    ("sah", include_str!("../locales/sah.rlt")),
    ("sd", include_str!("../locales/sd.rlt")),
    ("se", include_str!("../locales/se.rlt")),
    ("se_FI", include_str!("../locales/se_FI.rlt")),
    ("si", include_str!("../locales/si.rlt")),
    ("sk", include_str!("../locales/sk.rlt")),
    ("sl", include_str!("../locales/sl.rlt")),
    ("sq", include_str!("../locales/sq.rlt")),
    ("sr", include_str!("../locales/sr.rlt")),
    ("sr_Latn", include_str!("../locales/sr_Latn.rlt")),
    ("sv", include_str!("../locales/sv.rlt")),
    ("sw", include_str!("../locales/sw.rlt")),
    ("ta", include_str!("../locales/ta.rlt")),
    ("te", include_str!("../locales/te.rlt")),
    ("th", include_str!("../locales/th.rlt")),
    ("ti", include_str!("../locales/ti.rlt")),
    ("tk", include_str!("../locales/tk.rlt")),
    ("to", include_str!("../locales/to.rlt")),
    ("tr", include_str!("../locales/tr.rlt")),
    ("ug", include_str!("../locales/ug.rlt")),
    ("uk", include_str!("../locales/uk.rlt")),
    ("ur", include_str!("../locales/ur.rlt")),
    ("ur_IN", include_str!("../locales/ur_IN.rlt")),
    ("uz", include_str!("../locales/uz.rlt")),
    ("uz_Cyrl", include_str!("../locales/uz_Cyrl.rlt")),
    ("vi", include_str!("../locales/vi.rlt")),
    ("wae", include_str!("../locales/wae.rlt")),
    ("yi", include_str!("../locales/yi.rlt")),
    ("yue_Hans", include_str!("../locales/yue_Hans.rlt")),
    ("yue_Hant", include_str!("../locales/yue_Hant.rlt")),
    ("zh_Hans_HK", include_str!("../locales/zh_Hans_HK.rlt")),
    ("zh_Hant", include_str!("../locales/zh_Hant.rlt")),
    ("zh_Hant_MO", include_str!("../locales/zh_Hant_MO.rlt")),
    ("zu", include_str!("../locales/zu.rlt")),
];

const COUNT: usize = SOURCES.len();

static CACHE: [OnceLock<Locale>; COUNT] = [const { OnceLock::new() }; COUNT];

/// Tags of all built-in locales, sorted.
pub fn tags() -> impl Iterator<Item = &'static str> {
    SOURCES.iter().map(|(tag, _)| *tag)
}

/// The `.rlt` source of a built-in locale.
pub fn source(tag: &str) -> Option<&'static str> {
    SOURCES
        .iter()
        .find(|(candidate, _)| *candidate == tag)
        .map(|(_, source)| *source)
}

/// The built-in locale for `tag`, parsed on first use.
///
/// Lookups are exact (`"en_US"` does not find `"en"`). Returns `None` for
/// unknown tags, and for a locale whose data fails to load, which is logged.
pub fn locale(tag: &str) -> Option<&'static Locale> {
    match load(tag) {
        Ok(locale) => Some(locale),
        Err(LoadError::UnknownLocale { .. }) => None,
        Err(err) => {
            warn!(locale = tag, error = %err, "built-in locale failed to load");
            None
        }
    }
}

/// Like [`locale`], but reports why a locale is unavailable.
pub fn load(tag: &str) -> Result<&'static Locale, LoadError> {
    let Some(index) = SOURCES.iter().position(|(candidate, _)| *candidate == tag) else {
        let available: Vec<String> = tags().map(str::to_string).collect();
        return Err(LoadError::UnknownLocale {
            locale: tag.to_string(),
            suggestions: compute_suggestions(tag, &available),
        });
    };
    let cell = &CACHE[index];
    if let Some(locale) = cell.get() {
        return Ok(locale);
    }
    let (tag, source) = SOURCES[index];
    let parsed = Locale::from_source(tag, PluralRule::for_tag(tag), source)?;
    debug!(locale = tag, "loaded built-in locale");
    Ok(cell.get_or_init(|| parsed))
}

/// Loads every built-in locale, stopping at the first failure.
pub fn load_all() -> Result<Vec<&'static Locale>, LoadError> {
    tags().map(load).collect()
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn tags_are_sorted_and_unique() {
        let tags: Vec<&str> = tags().collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn repeated_lookups_share_one_instance() {
        let first = locale("de").unwrap();
        let second = locale("de").unwrap();
        assert!(ptr::eq(first, second));
    }

    #[test]
    fn unknown_tag_suggests_builtin_tags() {
        assert!(locale("xx_YY").is_none());
        let LoadError::UnknownLocale { suggestions, .. } = load("enn").unwrap_err() else {
            panic!("expected UnknownLocale");
        };
        assert!(suggestions.iter().any(|tag| tag == "en"));
    }
}
