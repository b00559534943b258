//! Tests for condition matching and group evaluation.

use bomkit_core::types::{AttributeMap, AttributeValue};
use bomkit_resolver::rules::{group_conditions, is_applicable, matches, Condition};

fn attrs(pairs: &[(&str, AttributeValue)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn text(s: &str) -> AttributeValue {
    AttributeValue::Text(s.to_string())
}

#[test]
fn operator_table_cases() {
    assert!(matches(Some(&text("5")), ">", "3"));
    assert!(matches(Some(&text("abc")), ">", "3"));
    assert!(matches(Some(&text("red")), "IN", r#"["red","blue"]"#));
    assert!(matches(Some(&text("7")), "BETWEEN", "1,10"));
    assert!(!matches(Some(&text("7")), "BETWEEN", "1,10,20"));
    assert!(!matches(None, "IS NOT NULL", ""));
    assert!(!matches(Some(&AttributeValue::Null), "IS NOT NULL", "anything"));
}

#[test]
fn keyword_operators_ignore_case() {
    assert!(matches(Some(&text("red")), "in", "red,blue"));
    assert!(matches(Some(&text("4")), "between", "1,10"));
    assert!(matches(Some(&text("x")), "is not null", ""));
}

#[test]
fn unknown_operator_never_matches() {
    assert!(!matches(Some(&text("red")), "LIKE", "red"));
    assert!(!matches(Some(&text("red")), "!=", "blue"));
}

#[test]
fn equality_is_textual() {
    assert!(matches(Some(&AttributeValue::Number(1200.0)), "=", "1200"));
    assert!(!matches(Some(&AttributeValue::Number(1200.0)), "=", "1200.0"));
    assert!(matches(Some(&AttributeValue::Boolean(true)), "=", "true"));
    assert!(!matches(Some(&text("Red")), "=", "red"));
}

#[test]
fn large_integer_attributes_compare_exactly() {
    let serial = AttributeValue::decode(Some("12345678901234567")).unwrap();
    assert!(matches(Some(&serial), "=", "12345678901234567"));
    assert!(matches(Some(&serial), "IN", "[12345678901234567, 1]"));
    assert!(!matches(Some(&serial), "=", "12345678901234568"));
}

#[test]
fn no_conditions_is_applicable() {
    let groups = group_conditions(Vec::new());
    assert!(is_applicable(1, &groups, &AttributeMap::new()));
    assert!(is_applicable(1, &groups, &attrs(&[("color", text("red"))])));
}

#[test]
fn partially_satisfied_group_excludes() {
    let groups = group_conditions(vec![
        Condition::new(1, "color", "=", "red"),
        Condition::new(1, "width", ">", "1000"),
    ]);
    let a = attrs(&[("color", text("red")), ("width", AttributeValue::Number(600.0))]);
    assert!(!is_applicable(1, &groups, &a));
}

#[test]
fn second_group_can_satisfy() {
    let groups = group_conditions(vec![
        Condition::new(1, "color", "=", "blue"),
        Condition::new(2, "color", "=", "red"),
        Condition::new(2, "width", "BETWEEN", "500,1500"),
    ]);
    let a = attrs(&[("color", text("red")), ("width", AttributeValue::Number(1200.0))]);
    assert!(is_applicable(1, &groups, &a));
}

#[test]
fn no_group_satisfied_excludes() {
    let groups = group_conditions(vec![
        Condition::new(1, "color", "=", "blue"),
        Condition::new(2, "color", "IN", r#"["green","white"]"#),
    ]);
    assert!(!is_applicable(1, &groups, &attrs(&[("color", text("red"))])));
}

#[test]
fn unknown_operator_fails_only_its_group() {
    let groups = group_conditions(vec![
        Condition::new(1, "color", "LIKE", "r%"),
        Condition::new(2, "color", "=", "red"),
    ]);
    assert!(is_applicable(1, &groups, &attrs(&[("color", text("red"))])));
}

#[test]
fn groups_iterate_in_ascending_id() {
    let groups = group_conditions(vec![
        Condition::new(9, "a", "=", "1"),
        Condition::new(2, "b", "=", "2"),
        Condition::new(5, "c", "=", "3"),
    ]);
    let ids: Vec<i64> = groups.keys().copied().collect();
    assert_eq!(ids, vec![2, 5, 9]);
}

#[test]
fn missing_attribute_routes_to_fallbacks() {
    let groups = group_conditions(vec![Condition::new(1, "finish", "IS NOT NULL", "")]);
    assert!(!is_applicable(1, &groups, &AttributeMap::new()));

    let groups = group_conditions(vec![Condition::new(1, "finish", "=", "")]);
    assert!(is_applicable(1, &groups, &AttributeMap::new()));
}
