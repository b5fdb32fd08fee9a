//! Tests over the complete built-in locale set.

use std::thread;

use reltime::{
    Direction, Flavour, LoadWarning, Locale, LocaleRegistry, PluralRule, TimeUnit, builtin,
    lint_locale, resolve,
};

// =========================================================================
// Loading
// =========================================================================

#[test]
fn every_builtin_locale_loads() {
    let locales = builtin::load_all().unwrap();
    assert_eq!(locales.len(), builtin::tags().count());
    for locale in locales {
        assert!(locale.has_flavour(Flavour::Long), "{} lacks long", locale.tag());
        assert_eq!(*locale.plural_rule(), PluralRule::for_tag(locale.tag()));
    }
}

#[test]
fn builtin_set_includes_reference_locales() {
    for tag in ["en", "ru", "ar_AE", "cy", "ja", "ko", "zh_Hant"] {
        assert!(builtin::locale(tag).is_some(), "missing {tag}");
    }
    assert!(builtin::locale("en_US").is_none());
}

#[test]
fn builtin_set_covers_every_source_language() {
    assert_eq!(builtin::tags().count(), 113);
    for tag in [
        "ca", "da", "el", "fi", "hu", "id", "nb", "th", "ta", "uz", "zh_Hans_HK", "yue_Hans",
        "bs_Cyrl", "sr_Latn",
    ] {
        assert!(builtin::locale(tag).is_some(), "missing {tag}");
    }
}

#[test]
fn added_locales_use_their_plural_families() {
    let rule = |tag| builtin::locale(tag).unwrap().plural_rule().clone();
    assert_eq!(rule("be"), PluralRule::Slavic);
    assert_eq!(rule("bs_Cyrl"), PluralRule::Slavic);
    assert_eq!(rule("hsb"), PluralRule::Slavic);
    assert_eq!(rule("gu"), PluralRule::ZeroOrOne);
    assert_eq!(rule("th"), PluralRule::Constant);
    assert_eq!(rule("lo"), PluralRule::Unclassified);
    assert_eq!(rule("fi"), PluralRule::OneOther);
}

#[test]
fn sources_round_trip_through_the_parser() {
    for tag in builtin::tags() {
        let source = builtin::source(tag).unwrap();
        let parsed = Locale::from_source(tag, PluralRule::for_tag(tag), source).unwrap();
        assert_eq!(&parsed, builtin::locale(tag).unwrap(), "{tag}");
    }
    assert!(builtin::source("en_US").is_none());
}

#[test]
fn registry_with_builtin_holds_every_tag() {
    let registry = LocaleRegistry::with_builtin().unwrap();
    let tags: Vec<&str> = registry.tags().collect();
    let builtin_tags: Vec<&str> = builtin::tags().collect();
    assert_eq!(tags, builtin_tags);
}

// =========================================================================
// Rendering
// =========================================================================

#[test]
fn every_entry_renders_without_placeholder_residue() {
    for locale in builtin::load_all().unwrap() {
        for flavour in locale.flavours() {
            let table = locale.table(flavour).unwrap();
            for (unit, entry) in table.entries() {
                for &direction in Direction::ALL {
                    for magnitude in [0.0, 1.0, 2.0, 3.0, 5.0, 11.0, 21.0, 102.0] {
                        if entry
                            .template(direction, locale.categorize(magnitude))
                            .is_none()
                        {
                            continue;
                        }
                        let phrase = resolve(locale, unit, magnitude, direction, flavour)
                            .unwrap_or_else(|err| panic!("{}: {err}", locale.tag()));
                        assert!(
                            !phrase.contains("{0}"),
                            "{} {flavour}.{unit}.{direction}: {phrase}",
                            locale.tag()
                        );
                        assert!(!phrase.is_empty());
                    }
                }
            }
        }
    }
}

#[test]
fn every_numeric_phrase_shows_its_magnitude() {
    for locale in builtin::load_all().unwrap() {
        for &unit in &[TimeUnit::Year, TimeUnit::Month, TimeUnit::Day, TimeUnit::Hour] {
            for direction in [Direction::Past, Direction::Future] {
                let phrase = resolve(locale, unit, 37.0, direction, Flavour::Long)
                    .unwrap_or_else(|err| panic!("{}: {err}", locale.tag()));
                assert!(phrase.contains("37"), "{}: {phrase}", locale.tag());
            }
        }
    }
}

#[test]
fn plural_maps_cover_every_category_their_rule_produces() {
    for locale in builtin::load_all().unwrap() {
        let missing: Vec<LoadWarning> = lint_locale(locale)
            .into_iter()
            .filter(|warning| matches!(warning, LoadWarning::MissingCategory { .. }))
            .collect();
        assert!(missing.is_empty(), "{}: {missing:?}", locale.tag());
    }
}

#[test]
fn narrow_matches_long_for_units_narrow_lacks() {
    for locale in builtin::load_all().unwrap() {
        let (Some(long), Some(narrow)) = (
            locale.table(Flavour::Long),
            locale.table(Flavour::Narrow),
        ) else {
            continue;
        };
        for unit in long.units().filter(|unit| narrow.get(*unit).is_none()) {
            let from_narrow = resolve(locale, unit, 2.0, Direction::Past, Flavour::Narrow);
            let from_long = resolve(locale, unit, 2.0, Direction::Past, Flavour::Long);
            assert_eq!(from_narrow, from_long, "{} {unit}", locale.tag());
        }
    }
}

// =========================================================================
// Concurrency
// =========================================================================

#[test]
fn concurrent_readers_share_a_locale() {
    let en = builtin::locale("en").unwrap();
    let expected = resolve(en, TimeUnit::Day, 3.0, Direction::Past, Flavour::Long).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..200)
                        .map(|_| resolve(en, TimeUnit::Day, 3.0, Direction::Past, Flavour::Long))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for phrase in handle.join().unwrap() {
                assert_eq!(phrase.as_deref(), Ok(expected.as_str()));
            }
        }
    });
}

#[test]
fn concurrent_first_lookups_agree() {
    let tags: Vec<&str> = builtin::tags().collect();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    tags.iter()
                        .map(|tag| builtin::locale(tag).map(|locale| locale.tag().to_string()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            let loaded = handle.join().unwrap();
            assert!(loaded.iter().all(Option::is_some));
        }
    });
}
