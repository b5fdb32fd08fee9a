//! Data-quality lints for locale tables.
//!
//! None of these findings breaks resolution: the resolver recovers each one
//! through category or flavour fallback. They point at gaps in a locale's
//! data that are worth filling in.

use std::collections::BTreeMap;

use crate::engine::error::LoadWarning;
use crate::engine::locale::Locale;
use crate::engine::table::{Forms, PhraseTable, PluralForms, UnitEntry};
use crate::types::{Direction, Flavour, PluralCategory, Segment, Template, TimeUnit};

/// Largest magnitude sampled when checking plural coverage.
pub const LINT_SAMPLE_MAX: u32 = 200;

/// Runs every lint that needs only the locale itself.
pub fn lint_locale(locale: &Locale) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    lint_missing_categories(locale, &mut warnings);
    lint_inconsistent_plurals(locale, &mut warnings);
    lint_missing_units(locale, &mut warnings);
    warnings
}

/// Reports strings identical to the same entry of `reference`, usually
/// the English locale.
///
/// Only templates with literal letters are compared, so `"{0}"` alone or
/// punctuation never counts as untranslated.
pub fn lint_untranslated(locale: &Locale, reference: &Locale) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    if locale.tag() == reference.tag() {
        return warnings;
    }
    for flavour in locale.flavours() {
        let (Some(table), Some(reference_table)) = (locale.table(flavour), reference.table(flavour))
        else {
            continue;
        };
        let reference_templates: BTreeMap<String, &Template> =
            templates(flavour, reference_table).into_iter().collect();
        for (path, template) in templates(flavour, table) {
            if reference_templates.get(&path) == Some(&template) && has_letters(template) {
                warnings.push(LoadWarning::Untranslated {
                    locale: locale.tag().to_string(),
                    path,
                    text: template.to_string(),
                });
            }
        }
    }
    warnings
}

fn lint_missing_categories(locale: &Locale, warnings: &mut Vec<LoadWarning>) {
    // First magnitude producing each category.
    let mut examples: Vec<(PluralCategory, u32)> = Vec::new();
    for value in 0..=LINT_SAMPLE_MAX {
        let Some(category) = locale.plural_rule().categorize(f64::from(value)) else {
            continue;
        };
        if !examples.iter().any(|(seen, _)| *seen == category) {
            examples.push((category, value));
        }
    }

    for flavour in locale.flavours() {
        let Some(table) = locale.table(flavour) else {
            continue;
        };
        for (path, forms) in plural_maps(flavour, table) {
            for &(category, example) in &examples {
                if forms.get(category).is_none() {
                    warnings.push(LoadWarning::MissingCategory {
                        locale: locale.tag().to_string(),
                        path: path.clone(),
                        category,
                        example,
                    });
                }
            }
        }
    }
}

fn lint_inconsistent_plurals(locale: &Locale, warnings: &mut Vec<LoadWarning>) {
    for &unit in TimeUnit::ALL {
        for direction in [Direction::Past, Direction::Future] {
            let mut plural_flavour = None;
            let mut flat_flavour = None;
            for flavour in locale.flavours() {
                let Some(entry) = locale.table(flavour).and_then(|table| table.get(unit)) else {
                    continue;
                };
                if entry.is_plural(direction) {
                    plural_flavour.get_or_insert(flavour);
                } else if entry
                    .template(direction, PluralCategory::Other)
                    .is_some_and(Template::has_placeholder)
                {
                    flat_flavour.get_or_insert(flavour);
                }
            }
            if let (Some(plural_flavour), Some(flat_flavour)) = (plural_flavour, flat_flavour) {
                warnings.push(LoadWarning::InconsistentPlurals {
                    locale: locale.tag().to_string(),
                    unit,
                    direction,
                    plural_flavour,
                    flat_flavour,
                });
            }
        }
    }
}

fn lint_missing_units(locale: &Locale, warnings: &mut Vec<LoadWarning>) {
    let Some(long) = locale.table(Flavour::Long) else {
        return;
    };
    for flavour in locale.flavours().filter(|flavour| *flavour != Flavour::Long) {
        let Some(table) = locale.table(flavour) else {
            continue;
        };
        for unit in long.units().filter(|unit| table.get(*unit).is_none()) {
            warnings.push(LoadWarning::MissingUnit {
                locale: locale.tag().to_string(),
                flavour,
                unit,
            });
        }
    }
}

/// Every plural map in a table with its dotted path.
fn plural_maps(flavour: Flavour, table: &PhraseTable) -> Vec<(String, &PluralForms)> {
    let mut maps = Vec::new();
    for (unit, entry) in table.entries() {
        match entry {
            UnitEntry::Fixed(_) => {}
            UnitEntry::Counted(forms) => maps.push((format!("{flavour}.{unit}"), forms)),
            UnitEntry::Directional(directional) => {
                for direction in [Direction::Past, Direction::Future] {
                    if let Some(Forms::Plural(forms)) = directional.forms(direction) {
                        maps.push((format!("{flavour}.{unit}.{direction}"), forms));
                    }
                }
            }
        }
    }
    maps
}

/// Every template in a table with its dotted path.
fn templates(flavour: Flavour, table: &PhraseTable) -> Vec<(String, &Template)> {
    let mut found = Vec::new();
    for (unit, entry) in table.entries() {
        let prefix = format!("{flavour}.{unit}");
        match entry {
            UnitEntry::Fixed(template) => found.push((prefix, template)),
            UnitEntry::Counted(forms) => push_forms(&prefix, forms, &mut found),
            UnitEntry::Directional(directional) => {
                let periods = [
                    (Direction::Previous, &directional.previous),
                    (Direction::Current, &directional.current),
                    (Direction::Next, &directional.next),
                ];
                for (direction, template) in periods {
                    if let Some(template) = template {
                        found.push((format!("{prefix}.{direction}"), template));
                    }
                }
                for direction in [Direction::Past, Direction::Future] {
                    match directional.forms(direction) {
                        Some(Forms::Fixed(template)) => {
                            found.push((format!("{prefix}.{direction}"), template));
                        }
                        Some(Forms::Plural(forms)) => {
                            push_forms(&format!("{prefix}.{direction}"), forms, &mut found);
                        }
                        None => {}
                    }
                }
            }
        }
    }
    found
}

fn push_forms<'a>(prefix: &str, forms: &'a PluralForms, found: &mut Vec<(String, &'a Template)>) {
    for (category, template) in forms.categories() {
        found.push((format!("{prefix}.{category}"), template));
    }
}

fn has_letters(template: &Template) -> bool {
    template.segments().iter().any(|segment| match segment {
        Segment::Literal(text) => text.chars().any(char::is_alphabetic),
        Segment::Magnitude => false,
    })
}
