//! Tests for building typed phrase tables from `.rlt` sources.

use reltime::{
    Direction, Flavour, Forms, LoadError, Locale, PluralCategory, PluralRule, TimeUnit, UnitEntry,
};

fn load(source: &str) -> Result<Locale, LoadError> {
    Locale::from_source("xx", PluralRule::OneOther, source)
}

/// Unwraps an `Invalid` error into `(path, line, column, message)`.
fn invalid(source: &str) -> (String, usize, usize, String) {
    match load(source).unwrap_err() {
        LoadError::Invalid {
            locale,
            path,
            line,
            column,
            message,
        } => {
            assert_eq!(locale, "xx");
            (path, line, column, message)
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

// =========================================================================
// Entry Shapes
// =========================================================================

#[test]
fn builds_each_entry_shape() {
    let locale = load(
        r#"
        long = {
            day: {
                previous: "yesterday",
                past: { one: "{0} day ago", other: "{0} days ago" },
                future: "in {0} days",
            },
            hour: { one: "{0} hour", other: "{0} hours" },
            now: "now",
        };
    "#,
    )
    .unwrap();
    let table = locale.table(Flavour::Long).unwrap();

    let Some(UnitEntry::Directional(day)) = table.get(TimeUnit::Day) else {
        panic!("day should be directional");
    };
    assert_eq!(day.previous.as_ref().unwrap().to_string(), "yesterday");
    assert!(day.current.is_none());
    assert!(matches!(day.past, Some(Forms::Plural(_))));
    assert!(matches!(day.future, Some(Forms::Fixed(_))));

    assert!(matches!(table.get(TimeUnit::Hour), Some(UnitEntry::Counted(_))));
    assert!(matches!(table.get(TimeUnit::Now), Some(UnitEntry::Fixed(_))));
    assert!(table.get(TimeUnit::Year).is_none());
}

#[test]
fn plural_forms_keep_declared_categories() {
    let locale = load(
        r#"long = { day: { past: { one: "a", few: "b", other: "c" } } };"#,
    )
    .unwrap();
    let entry = locale.table(Flavour::Long).unwrap().get(TimeUnit::Day).unwrap();
    let template = |category| entry.template(Direction::Past, category).unwrap().to_string();
    assert_eq!(template(PluralCategory::One), "a");
    assert_eq!(template(PluralCategory::Few), "b");
    assert_eq!(template(PluralCategory::Many), "c");
}

#[test]
fn flavours_are_listed_in_key_order() {
    let locale = load(
        r#"
        narrow = { now: "now" };
        long = { now: "now" };
        short = { now: "now" };
    "#,
    )
    .unwrap();
    let flavours: Vec<Flavour> = locale.flavours().collect();
    assert_eq!(flavours, vec![Flavour::Long, Flavour::Short, Flavour::Narrow]);
}

// =========================================================================
// Load Errors
// =========================================================================

#[test]
fn missing_long_flavour_is_rejected() {
    let err = load(r#"short = { now: "now" };"#).unwrap_err();
    assert!(matches!(err, LoadError::MissingLongFlavour { locale } if locale == "xx"));
}

#[test]
fn syntax_errors_become_parse_errors() {
    let err = load("long = {").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Parse { line: 1, column: 9, .. }
    ));
}

#[test]
fn unknown_flavour_suggests_alternatives() {
    let (path, line, column, message) = invalid(r#"lnog = { now: "now" };"#);
    assert_eq!(path, "lnog");
    assert_eq!((line, column), (1, 1));
    assert_eq!(message, "unknown flavour 'lnog' (did you mean: long?)");
}

#[test]
fn unknown_unit_reports_dotted_path() {
    let (path, line, column, message) = invalid("long = {\n    dayy: \"x\",\n};");
    assert_eq!(path, "long.dayy");
    assert_eq!((line, column), (2, 5));
    assert_eq!(message, "unknown unit 'dayy' (did you mean: day?)");
}

#[test]
fn unknown_direction_is_reported() {
    let (path, _, _, message) = invalid(r#"long = { day: { pats: "x" } };"#);
    assert_eq!(path, "long.day.pats");
    assert!(message.contains("did you mean: past"));
}

#[test]
fn unknown_category_is_reported() {
    let (path, _, _, message) = invalid(r#"long = { day: { past: { one: "a", oter: "b" } } };"#);
    assert_eq!(path, "long.day.past.oter");
    assert!(message.starts_with("unknown plural category 'oter'"));
}

#[test]
fn duplicate_keys_are_rejected() {
    let (path, _, _, message) = invalid(r#"long = { now: "a", now: "b" };"#);
    assert_eq!(path, "long.now");
    assert_eq!(message, "duplicate unit");

    let (path, _, _, message) = invalid(r#"long = { day: { past: "a", past: "b" } };"#);
    assert_eq!(path, "long.day.past");
    assert_eq!(message, "duplicate direction");

    let (_, _, _, message) = invalid(r#"long = { now: "a" }; long = { now: "b" };"#);
    assert_eq!(message, "duplicate flavour definition");
}

#[test]
fn mixed_direction_and_category_keys_are_rejected() {
    let (path, _, _, message) = invalid(r#"long = { day: { past: "a", other: "b" } };"#);
    assert_eq!(path, "long.day");
    assert!(message.contains("cannot mix"));
}

#[test]
fn plural_map_without_other_is_rejected() {
    let (path, _, _, message) = invalid(r#"long = { day: { past: { one: "{0} day ago" } } };"#);
    assert_eq!(path, "long.day.past");
    assert_eq!(message, "plural forms must include 'other'");
}

#[test]
fn nesting_below_categories_is_rejected() {
    let (path, _, _, message) =
        invalid(r#"long = { day: { past: { other: { other: "x" } } } };"#);
    assert_eq!(path, "long.day.past.other");
    assert!(message.contains("too deeply nested"));
}

#[test]
fn period_phrases_cannot_take_a_magnitude() {
    let (path, _, _, message) = invalid(r#"long = { day: { current: "day {0}" } };"#);
    assert_eq!(path, "long.day.current");
    assert!(message.contains("cannot contain the {0} placeholder"));

    let (_, _, _, message) = invalid(r#"long = { day: { current: { other: "today" } } };"#);
    assert!(message.contains("cannot vary by plural category"));
}

#[test]
fn flavour_must_be_a_map() {
    let (path, _, _, message) = invalid(r#"long = "now";"#);
    assert_eq!(path, "long");
    assert_eq!(message, "a flavour must be a map of units");
}

#[test]
fn empty_maps_are_rejected() {
    let (path, _, _, message) = invalid(r#"long = { day: {} };"#);
    assert_eq!(path, "long.day");
    assert_eq!(message, "empty map");
}

#[test]
fn template_errors_point_into_the_string() {
    let (path, line, column, message) = invalid(r#"long = { now: "{1}" };"#);
    assert_eq!(path, "long.now");
    assert_eq!((line, column), (1, 16));
    assert!(message.contains("unknown placeholder"));

    let (_, line, column, _) = invalid(r#"long = { now: "a {0} b {0}" };"#);
    assert_eq!((line, column), (1, 24));
}
