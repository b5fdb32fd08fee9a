//! Per-language plural classification.
//!
//! Every built-in locale maps onto one [`PluralRule`] family. The families
//! reproduce the CLDR cardinal rules for the values that appear in relative
//! time phrases; digit-based rules operate on the truncated magnitude, exact
//! and range checks on the magnitude itself. Custom locales can instead opt
//! into the full CLDR data shipped with `icu_plurals` via
//! [`PluralRule::cldr`].
//!
//! ICU rule objects are cached per thread per language and built lazily on
//! first use.

use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_locale_core::Locale as IcuLocale;
use icu_plurals::{PluralCategory as IcuCategory, PluralOperands, PluralRuleType, PluralRules};
use serde::Serialize;
use tracing::warn;

use super::error::LoadError;
use crate::types::{PluralCategory, format_magnitude};

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language identifier.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// A language's cardinal plural rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// 1 is `one`, everything else `other`.
    OneOther,
    /// 0 through 1 inclusive is `one`.
    ZeroOrOne,
    /// 0 up to but excluding 2 is `one`.
    BelowTwo,
    /// East Slavic and most South Slavic languages.
    Slavic,
    Polish,
    /// Czech, Slovak, Slovenian and Lower Sorbian.
    Czech,
    Arabic,
    Hebrew,
    Welsh,
    Irish,
    ScottishGaelic,
    Breton,
    Icelandic,
    Lithuanian,
    Latvian,
    Maltese,
    Romanian,
    /// 0 is `zero`, 1 is `one`.
    ZeroOneOther,
    /// 1 is `one`, 2 is `two`.
    OneTwoOther,
    /// Languages without grammatical number: always `other`.
    Constant,
    /// No classification is available; callers treat this as `other`.
    Unclassified,
    /// CLDR data for the given language, evaluated with ICU4X.
    Cldr(String),
}

impl Display for PluralRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            PluralRule::OneOther => "one_other",
            PluralRule::ZeroOrOne => "zero_or_one",
            PluralRule::BelowTwo => "below_two",
            PluralRule::Slavic => "slavic",
            PluralRule::Polish => "polish",
            PluralRule::Czech => "czech",
            PluralRule::Arabic => "arabic",
            PluralRule::Hebrew => "hebrew",
            PluralRule::Welsh => "welsh",
            PluralRule::Irish => "irish",
            PluralRule::ScottishGaelic => "scottish_gaelic",
            PluralRule::Breton => "breton",
            PluralRule::Icelandic => "icelandic",
            PluralRule::Lithuanian => "lithuanian",
            PluralRule::Latvian => "latvian",
            PluralRule::Maltese => "maltese",
            PluralRule::Romanian => "romanian",
            PluralRule::ZeroOneOther => "zero_one_other",
            PluralRule::OneTwoOther => "one_two_other",
            PluralRule::Constant => "constant",
            PluralRule::Unclassified => "unclassified",
            PluralRule::Cldr(language) => return write!(f, "cldr({language})"),
        };
        f.write_str(name)
    }
}

impl PluralRule {
    /// The rule used by a built-in locale tag.
    ///
    /// Unknown tags use [`PluralRule::OneOther`].
    pub fn for_tag(tag: &str) -> PluralRule {
        match tag {
            "am" | "as" | "bn" | "fa" | "gu" | "hi" | "kn" | "mr" | "pa" | "zu" => {
                PluralRule::ZeroOrOne
            }
            "fr" | "hy" => PluralRule::BelowTwo,
            "be" | "bs" | "bs_Cyrl" | "hr" | "hsb" | "ru" | "sr" | "sr_Latn" | "uk" => {
                PluralRule::Slavic
            }
            "pl" => PluralRule::Polish,
            "cs" | "dsb" | "sk" | "sl" => PluralRule::Czech,
            "ar_AE" => PluralRule::Arabic,
            "he" => PluralRule::Hebrew,
            "cy" => PluralRule::Welsh,
            "ga" => PluralRule::Irish,
            "gd" => PluralRule::ScottishGaelic,
            "br" => PluralRule::Breton,
            "is" => PluralRule::Icelandic,
            "lt" => PluralRule::Lithuanian,
            "lv" => PluralRule::Latvian,
            "mt" => PluralRule::Maltese,
            "ro" => PluralRule::Romanian,
            "ksh" => PluralRule::ZeroOneOther,
            "se" => PluralRule::OneTwoOther,
            "id" | "ja" | "ms" | "my" | "mzn" | "sah" | "se_FI" | "si" | "th" | "yue_Hans"
            | "yue_Hant" | "zh_Hans_HK" | "zh_Hant" | "zh_Hant_MO" => PluralRule::Constant,
            "dz" | "kea" | "km" | "ko" | "kok" | "lkt" | "lo" => PluralRule::Unclassified,
            _ => PluralRule::OneOther,
        }
    }

    /// A rule backed by ICU4X CLDR data for `language` (a BCP-47 tag such
    /// as `"pt"` or `"sr-Latn"`).
    pub fn cldr(language: &str) -> Result<PluralRule, LoadError> {
        let unknown = || LoadError::UnknownLanguage {
            language: language.to_string(),
        };
        let locale: IcuLocale = language.parse().map_err(|_| unknown())?;
        PluralRules::try_new(locale.into(), PluralRuleType::Cardinal.into())
            .map_err(|_| unknown())?;
        Ok(PluralRule::Cldr(language.to_string()))
    }

    /// Classifies a non-negative magnitude.
    ///
    /// Returns `None` only for [`PluralRule::Unclassified`] and for CLDR
    /// rules whose data cannot be loaded.
    pub fn categorize(&self, magnitude: f64) -> Option<PluralCategory> {
        let m = magnitude;
        let n = m.trunc() as i64;
        let mod10 = n % 10;
        let mod100 = n % 100;

        let category = match self {
            PluralRule::OneOther => {
                if m == 1.0 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::ZeroOrOne => {
                if (0.0..=1.0).contains(&m) {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::BelowTwo => {
                if (0.0..2.0).contains(&m) {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::Slavic => match (mod10, mod100) {
                (_, 11..=14) => PluralCategory::Many,
                (1, _) => PluralCategory::One,
                (2..=4, _) => PluralCategory::Few,
                _ => PluralCategory::Many,
            },
            PluralRule::Polish => {
                if m == 1.0 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Czech => match m {
                1.0 => PluralCategory::One,
                2.0 | 3.0 | 4.0 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            PluralRule::Arabic => match m {
                0.0 => PluralCategory::Zero,
                1.0 => PluralCategory::One,
                2.0 => PluralCategory::Two,
                _ if (3..=10).contains(&mod100) => PluralCategory::Few,
                _ if mod100 >= 11 => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
            PluralRule::Hebrew => {
                if m == 1.0 {
                    PluralCategory::One
                } else if m == 2.0 {
                    PluralCategory::Two
                } else if !(3.0..=10.0).contains(&m) && mod10 == 0 {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::Welsh => match m {
                0.0 => PluralCategory::Zero,
                1.0 => PluralCategory::One,
                2.0 => PluralCategory::Two,
                3.0 => PluralCategory::Few,
                6.0 => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
            PluralRule::Irish => match n {
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                3..=6 => PluralCategory::Few,
                7..=10 => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
            PluralRule::ScottishGaelic => match n {
                1 | 11 => PluralCategory::One,
                2 | 12 => PluralCategory::Two,
                3..=10 | 13..=19 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            PluralRule::Breton => {
                if mod10 == 1 && !matches!(mod100, 11 | 71 | 91) {
                    PluralCategory::One
                } else if mod10 == 2 && !matches!(mod100, 12 | 72 | 92) {
                    PluralCategory::Two
                } else if matches!(mod10, 3 | 4 | 9)
                    && !matches!(mod100, 10..=19 | 70..=79 | 90..=99)
                {
                    PluralCategory::Few
                } else if n != 0 && n % 1_000_000 == 0 {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::Icelandic => {
                if m == 0.0 {
                    PluralCategory::Zero
                } else if m == 1.0 || (mod10 == 1 && mod100 != 11) {
                    PluralCategory::One
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Lithuanian | PluralRule::Latvian => {
                if m == 0.0 {
                    PluralCategory::Zero
                } else if m == 1.0 || (mod10 == 1 && mod100 != 11) {
                    PluralCategory::One
                } else if mod10 == 1 && *self == PluralRule::Latvian {
                    PluralCategory::Other
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Maltese => {
                if m == 1.0 {
                    PluralCategory::One
                } else if m == 0.0 || (2.0..=10.0).contains(&m) {
                    PluralCategory::Few
                } else if (11.0..=19.0).contains(&m) {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::Romanian => {
                if m == 0.0 {
                    PluralCategory::Few
                } else if m == 1.0 {
                    PluralCategory::One
                } else if (2..=19).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::ZeroOneOther => match m {
                0.0 => PluralCategory::Zero,
                1.0 => PluralCategory::One,
                _ => PluralCategory::Other,
            },
            PluralRule::OneTwoOther => match m {
                1.0 => PluralCategory::One,
                2.0 => PluralCategory::Two,
                _ => PluralCategory::Other,
            },
            PluralRule::Constant => PluralCategory::Other,
            PluralRule::Unclassified => return None,
            PluralRule::Cldr(language) => return cldr_category(language, m),
        };
        Some(category)
    }
}

/// Evaluates the ICU4X rule for `language`, building it on first use in
/// this thread.
///
/// The magnitude is passed as its decimal text so that fraction digits
/// reach the rule's `v`, `f` and `t` operands.
fn cldr_category(language: &str, magnitude: f64) -> Option<PluralCategory> {
    let Ok(operands) = format_magnitude(magnitude).parse::<PluralOperands>() else {
        warn!(language, magnitude, "magnitude has no plural operands");
        return None;
    };
    PLURAL_RULES_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        let index = match cache.iter().position(|(lang, _)| lang == language) {
            Some(index) => index,
            None => {
                let Some(rules) = build_rules(language) else {
                    warn!(language, "no CLDR plural data; leaving magnitude unclassified");
                    return None;
                };
                cache.push((language.to_string(), rules));
                cache.len() - 1
            }
        };
        Some(category_from_icu(cache[index].1.category_for(operands)))
    })
}

fn build_rules(language: &str) -> Option<PluralRules> {
    let locale: IcuLocale = language.parse().ok()?;
    PluralRules::try_new(locale.into(), PluralRuleType::Cardinal.into()).ok()
}

fn category_from_icu(category: IcuCategory) -> PluralCategory {
    match category {
        IcuCategory::Zero => PluralCategory::Zero,
        IcuCategory::One => PluralCategory::One,
        IcuCategory::Two => PluralCategory::Two,
        IcuCategory::Few => PluralCategory::Few,
        IcuCategory::Many => PluralCategory::Many,
        IcuCategory::Other => PluralCategory::Other,
    }
}
