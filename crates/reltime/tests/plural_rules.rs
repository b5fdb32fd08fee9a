//! Tests for per-language plural classification.

use reltime::PluralCategory::{Few, Many, One, Other, Two, Zero};
use reltime::{LoadError, PluralCategory, PluralRule};

fn categories(rule: &PluralRule, values: &[f64]) -> Vec<Option<PluralCategory>> {
    values.iter().map(|value| rule.categorize(*value)).collect()
}

fn expect(rule: &PluralRule, cases: &[(f64, PluralCategory)]) {
    for (value, category) in cases {
        assert_eq!(
            rule.categorize(*value),
            Some(*category),
            "{rule:?} classified {value}"
        );
    }
}

// =========================================================================
// Simple Families
// =========================================================================

#[test]
fn one_other_only_singles_out_one() {
    expect(
        &PluralRule::OneOther,
        &[(0.0, Other), (1.0, One), (2.0, Other), (21.0, Other), (1.5, Other)],
    );
}

#[test]
fn zero_or_one_includes_zero_and_fractions() {
    expect(
        &PluralRule::ZeroOrOne,
        &[(0.0, One), (0.5, One), (1.0, One), (2.0, Other), (11.0, Other)],
    );
}

#[test]
fn below_two_covers_one_and_a_half() {
    expect(
        &PluralRule::BelowTwo,
        &[(0.0, One), (1.0, One), (1.5, One), (2.0, Other), (100.0, Other)],
    );
}

#[test]
fn constant_is_always_other() {
    let rule = PluralRule::Constant;
    assert!(categories(&rule, &[0.0, 1.0, 2.0, 11.0, 101.0]).iter().all(|c| *c == Some(Other)));
}

#[test]
fn unclassified_returns_none() {
    assert_eq!(PluralRule::Unclassified.categorize(1.0), None);
    assert_eq!(PluralRule::Unclassified.categorize(5.0), None);
}

#[test]
fn zero_one_other_and_one_two_other() {
    expect(&PluralRule::ZeroOneOther, &[(0.0, Zero), (1.0, One), (2.0, Other)]);
    expect(&PluralRule::OneTwoOther, &[(0.0, Other), (1.0, One), (2.0, Two), (3.0, Other)]);
}

// =========================================================================
// Digit-Based Families
// =========================================================================

#[test]
fn slavic_uses_last_digits_with_teen_band() {
    expect(
        &PluralRule::Slavic,
        &[
            (1.0, One),
            (2.0, Few),
            (4.0, Few),
            (5.0, Many),
            (11.0, Many),
            (12.0, Many),
            (14.0, Many),
            (21.0, One),
            (22.0, Few),
            (25.0, Many),
            (111.0, Many),
            (0.0, Many),
        ],
    );
}

#[test]
fn polish_excludes_teens_from_few() {
    expect(
        &PluralRule::Polish,
        &[
            (1.0, One),
            (2.0, Few),
            (12.0, Many),
            (21.0, Many),
            (22.0, Few),
            (0.0, Many),
        ],
    );
}

#[test]
fn czech_has_few_for_two_to_four() {
    expect(
        &PluralRule::Czech,
        &[(1.0, One), (3.0, Few), (5.0, Other), (22.0, Other)],
    );
}

#[test]
fn arabic_bands_by_last_two_digits() {
    expect(
        &PluralRule::Arabic,
        &[
            (0.0, Zero),
            (1.0, One),
            (2.0, Two),
            (3.0, Few),
            (10.0, Few),
            (11.0, Many),
            (99.0, Many),
            (100.0, Other),
            (102.0, Other),
            (103.0, Few),
            (111.0, Many),
        ],
    );
}

#[test]
fn hebrew_marks_round_tens_as_many() {
    expect(
        &PluralRule::Hebrew,
        &[
            (1.0, One),
            (2.0, Two),
            (3.0, Other),
            (10.0, Other),
            (11.0, Other),
            (20.0, Many),
            (100.0, Many),
        ],
    );
}

#[test]
fn welsh_special_cases_small_values() {
    expect(
        &PluralRule::Welsh,
        &[
            (0.0, Zero),
            (1.0, One),
            (2.0, Two),
            (3.0, Few),
            (4.0, Other),
            (6.0, Many),
            (7.0, Other),
        ],
    );
}

#[test]
fn irish_and_scottish_gaelic_ranges() {
    expect(
        &PluralRule::Irish,
        &[(1.0, One), (2.0, Two), (5.0, Few), (8.0, Many), (11.0, Other)],
    );
    expect(
        &PluralRule::ScottishGaelic,
        &[
            (1.0, One),
            (11.0, One),
            (2.0, Two),
            (12.0, Two),
            (7.0, Few),
            (19.0, Few),
            (20.0, Other),
        ],
    );
}

#[test]
fn breton_follows_last_digits() {
    expect(
        &PluralRule::Breton,
        &[
            (1.0, One),
            (21.0, One),
            (11.0, Other),
            (71.0, Other),
            (2.0, Two),
            (12.0, Other),
            (3.0, Few),
            (9.0, Few),
            (19.0, Other),
            (5.0, Other),
            (1_000_000.0, Many),
            (0.0, Other),
        ],
    );
}

#[test]
fn baltic_and_icelandic_rules() {
    expect(
        &PluralRule::Icelandic,
        &[(0.0, Zero), (1.0, One), (21.0, One), (11.0, Many), (5.0, Many)],
    );
    expect(
        &PluralRule::Lithuanian,
        &[(0.0, Zero), (1.0, One), (31.0, One), (11.0, Many), (7.0, Many)],
    );
    expect(
        &PluralRule::Latvian,
        &[(0.0, Zero), (1.0, One), (31.0, One), (11.0, Other), (7.0, Many)],
    );
}

#[test]
fn maltese_and_romanian_rules() {
    expect(
        &PluralRule::Maltese,
        &[(0.0, Few), (1.0, One), (5.0, Few), (15.0, Many), (20.0, Other)],
    );
    expect(
        &PluralRule::Romanian,
        &[(0.0, Few), (1.0, One), (19.0, Few), (20.0, Other), (101.0, Other), (102.0, Few)],
    );
}

// =========================================================================
// Tag Mapping
// =========================================================================

#[test]
fn builtin_tags_map_to_their_families() {
    assert_eq!(PluralRule::for_tag("en"), PluralRule::OneOther);
    assert_eq!(PluralRule::for_tag("ru"), PluralRule::Slavic);
    assert_eq!(PluralRule::for_tag("ar_AE"), PluralRule::Arabic);
    assert_eq!(PluralRule::for_tag("fr"), PluralRule::BelowTwo);
    assert_eq!(PluralRule::for_tag("hi"), PluralRule::ZeroOrOne);
    assert_eq!(PluralRule::for_tag("ja"), PluralRule::Constant);
    assert_eq!(PluralRule::for_tag("ko"), PluralRule::Unclassified);
    assert_eq!(PluralRule::for_tag("dsb"), PluralRule::Czech);
}

#[test]
fn unknown_tags_default_to_one_other() {
    assert_eq!(PluralRule::for_tag("tlh"), PluralRule::OneOther);
}

// =========================================================================
// CLDR Rules
// =========================================================================

#[test]
fn cldr_rule_matches_slavic_family_for_russian() {
    let cldr = PluralRule::cldr("ru").unwrap();
    for value in 0..=120 {
        let value = f64::from(value);
        assert_eq!(cldr.categorize(value), PluralRule::Slavic.categorize(value), "{value}");
    }
}

#[test]
fn cldr_rule_for_english() {
    let cldr = PluralRule::cldr("en").unwrap();
    assert_eq!(cldr.categorize(1.0), Some(One));
    assert_eq!(cldr.categorize(2.0), Some(Other));
}

#[test]
fn cldr_rule_sees_fraction_digits() {
    let cldr = PluralRule::cldr("en").unwrap();
    assert_eq!(cldr.categorize(1.5), Some(Other));
    assert_eq!(cldr.categorize(1.5), PluralRule::OneOther.categorize(1.5));

    // French `one` covers 0 <= i < 2, so 1.5 stays in `one`.
    let cldr = PluralRule::cldr("fr").unwrap();
    assert_eq!(cldr.categorize(1.5), Some(One));
    assert_eq!(cldr.categorize(2.5), Some(Other));
}

#[test]
fn cldr_rejects_malformed_language() {
    let err = PluralRule::cldr("not a language!").unwrap_err();
    assert!(matches!(err, LoadError::UnknownLanguage { language } if language == "not a language!"));
}

#[test]
fn rules_display_in_snake_case() {
    assert_eq!(PluralRule::ScottishGaelic.to_string(), "scottish_gaelic");
    assert_eq!(PluralRule::Cldr("ru".to_string()).to_string(), "cldr(ru)");
}
