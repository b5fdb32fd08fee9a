//! Typed phrase tables.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Direction, PluralCategory, Template, TimeUnit};

/// The phrases of one flavour, keyed by unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhraseTable {
    entries: BTreeMap<TimeUnit, UnitEntry>,
}

impl PhraseTable {
    pub fn new(entries: BTreeMap<TimeUnit, UnitEntry>) -> PhraseTable {
        PhraseTable { entries }
    }

    pub fn get(&self, unit: TimeUnit) -> Option<&UnitEntry> {
        self.entries.get(&unit)
    }

    pub fn insert(&mut self, unit: TimeUnit, entry: UnitEntry) -> Option<UnitEntry> {
        self.entries.insert(unit, entry)
    }

    /// Units with an entry, largest first.
    pub fn units(&self) -> impl Iterator<Item = TimeUnit> + '_ {
        self.entries.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (TimeUnit, &UnitEntry)> + '_ {
        self.entries.iter().map(|(unit, entry)| (*unit, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a table says about one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitEntry {
    /// The same text for every direction, e.g. `now: "now"` or
    /// `year: "{0}yr"`.
    Fixed(Template),
    /// A direction-agnostic count such as `{ one: "{0} day", other: "{0} days" }`.
    Counted(PluralForms),
    /// Separate phrases per direction.
    Directional(DirectionalEntry),
}

impl UnitEntry {
    /// The template this entry provides for `direction`, if any.
    ///
    /// Period directions never take a magnitude, so a fixed template that
    /// contains a placeholder does not answer them.
    pub fn template(&self, direction: Direction, category: PluralCategory) -> Option<&Template> {
        match self {
            UnitEntry::Fixed(template) => {
                if direction.is_period() && template.has_placeholder() {
                    None
                } else {
                    Some(template)
                }
            }
            UnitEntry::Counted(forms) => {
                if direction.is_period() {
                    None
                } else {
                    Some(forms.select(category))
                }
            }
            UnitEntry::Directional(entry) => entry.template(direction, category),
        }
    }

    /// Whether the entry distinguishes plural categories for `direction`.
    pub fn is_plural(&self, direction: Direction) -> bool {
        match self {
            UnitEntry::Fixed(_) => false,
            UnitEntry::Counted(_) => !direction.is_period(),
            UnitEntry::Directional(entry) => {
                matches!(entry.forms(direction), Some(Forms::Plural(_)))
            }
        }
    }
}

/// Phrases for the whole-period and the numeric directions of one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectionalEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past: Option<Forms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future: Option<Forms>,
}

impl DirectionalEntry {
    pub fn template(&self, direction: Direction, category: PluralCategory) -> Option<&Template> {
        match direction {
            Direction::Previous => self.previous.as_ref(),
            Direction::Current => self.current.as_ref(),
            Direction::Next => self.next.as_ref(),
            Direction::Past | Direction::Future => {
                self.forms(direction).map(|forms| forms.select(category))
            }
        }
    }

    /// The numeric forms for `Past` or `Future`; `None` for period directions.
    pub fn forms(&self, direction: Direction) -> Option<&Forms> {
        match direction {
            Direction::Past => self.past.as_ref(),
            Direction::Future => self.future.as_ref(),
            Direction::Previous | Direction::Current | Direction::Next => None,
        }
    }
}

/// A numeric direction's phrases: one template, or one per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Forms {
    Fixed(Template),
    Plural(PluralForms),
}

impl Forms {
    pub fn select(&self, category: PluralCategory) -> &Template {
        match self {
            Forms::Fixed(template) => template,
            Forms::Plural(forms) => forms.select(category),
        }
    }
}

/// Templates per plural category. `other` is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluralForms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub few: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub many: Option<Template>,
    pub other: Template,
}

impl PluralForms {
    /// Forms with only the mandatory `other` template.
    pub fn new(other: Template) -> PluralForms {
        PluralForms {
            zero: None,
            one: None,
            two: None,
            few: None,
            many: None,
            other,
        }
    }

    /// The template stored for exactly `category`, if any.
    pub fn get(&self, category: PluralCategory) -> Option<&Template> {
        match category {
            PluralCategory::Zero => self.zero.as_ref(),
            PluralCategory::One => self.one.as_ref(),
            PluralCategory::Two => self.two.as_ref(),
            PluralCategory::Few => self.few.as_ref(),
            PluralCategory::Many => self.many.as_ref(),
            PluralCategory::Other => Some(&self.other),
        }
    }

    /// Mutable slot for a category; `None` for `other`, which is set at
    /// construction.
    pub(crate) fn slot_mut(&mut self, category: PluralCategory) -> Option<&mut Option<Template>> {
        match category {
            PluralCategory::Zero => Some(&mut self.zero),
            PluralCategory::One => Some(&mut self.one),
            PluralCategory::Two => Some(&mut self.two),
            PluralCategory::Few => Some(&mut self.few),
            PluralCategory::Many => Some(&mut self.many),
            PluralCategory::Other => None,
        }
    }

    /// The template for `category`, falling back to `other`.
    pub fn select(&self, category: PluralCategory) -> &Template {
        self.get(category).unwrap_or(&self.other)
    }

    /// Every category with a template, `other` last.
    pub fn categories(&self) -> impl Iterator<Item = (PluralCategory, &Template)> + '_ {
        PluralCategory::ALL
            .iter()
            .filter_map(|category| self.get(*category).map(|template| (*category, template)))
    }
}
