//! Tests for the column naming convention.

use mmm_model::{Role, infer_role, is_valid_column_name, parse_column_name};
use proptest::prelude::*;

#[test]
fn infer_role_matches_name_prefix() {
    assert_eq!(infer_role("media__tv__spend"), Some(Role::Media));
    assert_eq!(infer_role("target__sales"), Some(Role::Target));
    assert_eq!(infer_role("date"), Some(Role::Date));
    assert_eq!(infer_role("TV Spend"), None);
}

#[test]
fn parse_column_name_splits_role_and_parts() {
    let parsed = parse_column_name("media__tv__spend").expect("valid name");
    assert_eq!(parsed.role, Role::Media);
    assert_eq!(parsed.parts, vec!["tv".to_string(), "spend".to_string()]);
}

#[test]
fn parse_succeeds_exactly_when_name_is_valid() {
    let names = [
        "date",
        "target__sales",
        "media__tv__spend",
        "control__price_index",
        "event__black_friday",
        "baseline__seasonality__fourier__p7__k1__sin",
        "id__geo",
        "target",
        "sales__total",
        "media__",
        "media____spend",
        "Media__tv",
        "media__Tv",
        "media__tv spend",
        "",
    ];
    for name in names {
        assert_eq!(
            parse_column_name(name).is_some(),
            is_valid_column_name(name),
            "parse/is_valid disagree on {name:?}"
        );
    }
}

// lowercase-letter-led, [a-z0-9_]*, no leading/trailing/double underscore
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}(_[a-z0-9]{1,4}){0,2}"
}

proptest! {
    #[test]
    fn generated_convention_names_always_parse(
        role in prop::sample::select(&Role::ALLOWED[..]),
        segments in prop::collection::vec(segment_strategy(), 1..4),
    ) {
        let name = format!("{}__{}", role.as_str(), segments.join("__"));
        let parsed = parse_column_name(&name);
        prop_assert!(parsed.is_some(), "expected {name:?} to parse");
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.role, role);
        prop_assert_eq!(parsed.parts, segments);
    }

    #[test]
    fn names_without_separator_never_parse(token in "[a-z]{1,12}") {
        if token != "date" {
            prop_assert!(parse_column_name(&token).is_none());
        }
    }
}
