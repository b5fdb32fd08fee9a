//! Conversion of parsed `.rlt` definitions into typed phrase tables.
//!
//! The parser accepts any nesting of maps and strings; this module checks
//! the shape (`flavour → unit → direction → category`), key names and
//! templates, and reports the first problem with its dotted path and source
//! position.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::engine::error::{LoadError, UnknownKey};
use crate::engine::table::{DirectionalEntry, Forms, PhraseTable, PluralForms, UnitEntry};
use crate::parser::{Definition, Entry, Node, ParseError, Span, parse_template};
use crate::types::{Direction, Flavour, PluralCategory, Template, TimeUnit};

/// Builds one phrase table per flavour definition.
pub(crate) fn build_tables(
    locale: &str,
    definitions: &[Definition],
) -> Result<BTreeMap<Flavour, PhraseTable>, LoadError> {
    let builder = TableBuilder { locale };
    let mut tables = BTreeMap::new();
    for definition in definitions {
        let path = definition.name.as_str();
        let flavour: Flavour = builder.key(path, &definition.name, definition.span)?;
        if tables.contains_key(&flavour) {
            return Err(builder.invalid(path, definition.span, "duplicate flavour definition"));
        }
        let Node::Map(entries) = &definition.value else {
            return Err(builder.invalid(
                path,
                definition.span,
                "a flavour must be a map of units",
            ));
        };
        let table = builder.table(path, entries, definition.span)?;
        tables.insert(flavour, table);
    }
    Ok(tables)
}

struct TableBuilder<'a> {
    locale: &'a str,
}

/// What the keys of a unit map turned out to be.
enum UnitShape {
    Directions,
    Categories,
}

impl TableBuilder<'_> {
    fn table(&self, path: &str, entries: &[Entry], span: Span) -> Result<PhraseTable, LoadError> {
        self.require_entries(path, entries, span)?;
        let mut table = PhraseTable::default();
        for entry in entries {
            let path = format!("{path}.{}", entry.key);
            let unit: TimeUnit = self.key(&path, &entry.key, entry.span)?;
            let unit_entry = self.unit_entry(&path, &entry.value, entry.span)?;
            if table.insert(unit, unit_entry).is_some() {
                return Err(self.invalid(&path, entry.span, "duplicate unit"));
            }
        }
        Ok(table)
    }

    fn unit_entry(&self, path: &str, node: &Node, span: Span) -> Result<UnitEntry, LoadError> {
        let entries = match node {
            Node::Text { text, span } => {
                return Ok(UnitEntry::Fixed(self.template(path, text, *span)?));
            }
            Node::Map(entries) => entries,
        };
        self.require_entries(path, entries, span)?;
        match self.unit_shape(path, entries)? {
            UnitShape::Categories => Ok(UnitEntry::Counted(self.plural_forms(path, entries, span)?)),
            UnitShape::Directions => Ok(UnitEntry::Directional(self.directional(path, entries)?)),
        }
    }

    /// Decides whether a unit map is keyed by direction or by category.
    fn unit_shape(&self, path: &str, entries: &[Entry]) -> Result<UnitShape, LoadError> {
        let is_direction = |entry: &Entry| entry.key.parse::<Direction>().is_ok();
        let is_category = |entry: &Entry| entry.key.parse::<PluralCategory>().is_ok();

        if entries.iter().any(is_direction) && entries.iter().any(is_category) {
            return Err(self.invalid(
                path,
                entries[0].span,
                "cannot mix direction keys and plural category keys in one map",
            ));
        }
        if entries.iter().any(is_category) {
            for entry in entries {
                let path = format!("{path}.{}", entry.key);
                self.key::<PluralCategory>(&path, &entry.key, entry.span)?;
            }
            return Ok(UnitShape::Categories);
        }
        for entry in entries {
            let path = format!("{path}.{}", entry.key);
            self.key::<Direction>(&path, &entry.key, entry.span)?;
        }
        Ok(UnitShape::Directions)
    }

    fn directional(&self, path: &str, entries: &[Entry]) -> Result<DirectionalEntry, LoadError> {
        let mut directional = DirectionalEntry::default();
        for entry in entries {
            let path = format!("{path}.{}", entry.key);
            let direction: Direction = self.key(&path, &entry.key, entry.span)?;
            let duplicate = match direction {
                Direction::Previous => {
                    let template = self.period_template(&path, &entry.value, entry.span)?;
                    directional.previous.replace(template).is_some()
                }
                Direction::Current => {
                    let template = self.period_template(&path, &entry.value, entry.span)?;
                    directional.current.replace(template).is_some()
                }
                Direction::Next => {
                    let template = self.period_template(&path, &entry.value, entry.span)?;
                    directional.next.replace(template).is_some()
                }
                Direction::Past => {
                    let forms = self.forms(&path, &entry.value, entry.span)?;
                    directional.past.replace(forms).is_some()
                }
                Direction::Future => {
                    let forms = self.forms(&path, &entry.value, entry.span)?;
                    directional.future.replace(forms).is_some()
                }
            };
            if duplicate {
                return Err(self.invalid(&path, entry.span, "duplicate direction"));
            }
        }
        Ok(directional)
    }

    fn period_template(&self, path: &str, node: &Node, span: Span) -> Result<Template, LoadError> {
        let Node::Text { text, span } = node else {
            return Err(self.invalid(
                path,
                span,
                "previous/current/next phrases cannot vary by plural category",
            ));
        };
        let template = self.template(path, text, *span)?;
        if template.has_placeholder() {
            return Err(self.invalid(
                path,
                *span,
                "previous/current/next phrases cannot contain the {0} placeholder",
            ));
        }
        Ok(template)
    }

    fn forms(&self, path: &str, node: &Node, span: Span) -> Result<Forms, LoadError> {
        match node {
            Node::Text { text, span } => Ok(Forms::Fixed(self.template(path, text, *span)?)),
            Node::Map(entries) => {
                self.require_entries(path, entries, span)?;
                Ok(Forms::Plural(self.plural_forms(path, entries, span)?))
            }
        }
    }

    fn plural_forms(&self, path: &str, entries: &[Entry], span: Span) -> Result<PluralForms, LoadError> {
        let mut other = None;
        let mut forms = Vec::new();
        for entry in entries {
            let path = format!("{path}.{}", entry.key);
            let category: PluralCategory = self.key(&path, &entry.key, entry.span)?;
            let Node::Text { text, span } = &entry.value else {
                return Err(self.invalid(
                    &path,
                    entry.span,
                    "too deeply nested: expected a phrase string",
                ));
            };
            let template = self.template(&path, text, *span)?;
            if category == PluralCategory::Other {
                if other.replace(template).is_some() {
                    return Err(self.invalid(&path, entry.span, "duplicate plural category"));
                }
            } else {
                forms.push((category, template, path, entry.span));
            }
        }
        let Some(other) = other else {
            return Err(self.invalid(path, span, "plural forms must include 'other'"));
        };
        let mut plural = PluralForms::new(other);
        for (category, template, path, span) in forms {
            let Some(slot) = plural.slot_mut(category) else {
                continue;
            };
            if slot.replace(template).is_some() {
                return Err(self.invalid(&path, span, "duplicate plural category"));
            }
        }
        Ok(plural)
    }

    fn template(&self, path: &str, text: &str, span: Span) -> Result<Template, LoadError> {
        parse_template(text).map_err(|err| {
            let (line, column) = err.position();
            let position = if line == 1 {
                Span {
                    line: span.line,
                    column: span.column + column - 1,
                }
            } else {
                Span {
                    line: span.line + line - 1,
                    column,
                }
            };
            let message = match err {
                ParseError::Syntax { message, .. } => message,
                ParseError::UnexpectedEof { .. } => "unterminated placeholder".to_string(),
            };
            self.invalid(path, position, message)
        })
    }

    fn key<K>(&self, path: &str, key: &str, span: Span) -> Result<K, LoadError>
    where
        K: FromStr<Err = UnknownKey>,
    {
        key.parse()
            .map_err(|err: UnknownKey| self.invalid(path, span, err.to_string()))
    }

    fn require_entries(&self, path: &str, entries: &[Entry], span: Span) -> Result<(), LoadError> {
        if entries.is_empty() {
            return Err(self.invalid(path, span, "empty map"));
        }
        Ok(())
    }

    fn invalid(&self, path: &str, span: Span, message: impl Into<String>) -> LoadError {
        LoadError::Invalid {
            locale: self.locale.to_string(),
            path: path.to_string(),
            line: span.line,
            column: span.column,
            message: message.into(),
        }
    }
}
