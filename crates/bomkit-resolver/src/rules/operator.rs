//! The fixed operator table and its coercion rules.
//!
//! | Operator      | Semantics                                                        |
//! |---------------|------------------------------------------------------------------|
//! | `=`           | text equality                                                    |
//! | `>` `<`       | numeric when both sides parse as floats, else lexicographic text |
//! | `IN`          | operand is a JSON list, a JSON scalar, or comma-separated text   |
//! | `BETWEEN`     | operand is `low,high`; inclusive numeric range                   |
//! | `IS NOT NULL` | value present and non-empty as text                              |
//!
//! Keyword operators match case-insensitively. A missing attribute reads as
//! the empty string and never parses as a number.

use std::cmp::Ordering;
use std::fmt;

use bomkit_core::types::AttributeValue;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Gt,
    Lt,
    In,
    Between,
    IsNotNull,
    /// Anything outside the table. Always evaluates false.
    Unknown(String),
}

impl Operator {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_uppercase().as_str() {
            "=" => Self::Eq,
            ">" => Self::Gt,
            "<" => Self::Lt,
            "IN" => Self::In,
            "BETWEEN" => Self::Between,
            "IS NOT NULL" => Self::IsNotNull,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Evaluate against an instance value (`None` when the attribute is absent).
    pub fn evaluate(&self, value: Option<&AttributeValue>, operand: &str) -> bool {
        match self {
            Self::Eq => text_of(value) == operand,
            Self::Gt => compare(value, operand) == Ordering::Greater,
            Self::Lt => compare(value, operand) == Ordering::Less,
            Self::In => {
                let text = text_of(value);
                in_list(operand).iter().any(|candidate| *candidate == text)
            }
            Self::Between => between(value, operand),
            Self::IsNotNull => value.is_some_and(|v| !v.to_text().is_empty()),
            Self::Unknown(_) => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => f.write_str("="),
            Self::Gt => f.write_str(">"),
            Self::Lt => f.write_str("<"),
            Self::In => f.write_str("IN"),
            Self::Between => f.write_str("BETWEEN"),
            Self::IsNotNull => f.write_str("IS NOT NULL"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

fn text_of(value: Option<&AttributeValue>) -> String {
    value.map(AttributeValue::to_text).unwrap_or_default()
}

fn parse_f64(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Numeric ordering when both sides parse, lexicographic text otherwise.
/// Incomparable numbers (NaN) order as equal, so neither `>` nor `<` holds.
fn compare(value: Option<&AttributeValue>, operand: &str) -> Ordering {
    match (value.and_then(AttributeValue::as_f64), parse_f64(operand)) {
        (Some(lhs), Some(rhs)) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
        _ => text_of(value).as_str().cmp(operand),
    }
}

/// Candidate texts of an `IN` operand.
fn in_list(operand: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(operand) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| AttributeValue::from_json(item).to_text())
            .collect(),
        Ok(scalar) => vec![AttributeValue::from_json(scalar).to_text()],
        Err(_) => operand.split(',').map(|s| s.trim().to_string()).collect(),
    }
}

/// Inclusive range check. Any malformed part yields false.
fn between(value: Option<&AttributeValue>, operand: &str) -> bool {
    let parts: Vec<&str> = operand.split(',').collect();
    let [low, high] = parts.as_slice() else {
        return false;
    };
    match (
        parse_f64(low),
        parse_f64(high),
        value.and_then(AttributeValue::as_f64),
    ) {
        (Some(low), Some(high), Some(v)) => low <= v && v <= high,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> AttributeValue {
        AttributeValue::Text(s.to_string())
    }

    #[test]
    fn parse_is_case_insensitive_for_keywords() {
        assert_eq!(Operator::parse("in"), Operator::In);
        assert_eq!(Operator::parse(" Between "), Operator::Between);
        assert_eq!(Operator::parse("is  not   null"), Operator::IsNotNull);
        assert_eq!(Operator::parse("LIKE"), Operator::Unknown("LIKE".into()));
        assert_eq!(Operator::parse(">="), Operator::Unknown(">=".into()));
    }

    #[test]
    fn numeric_greater_than() {
        assert!(Operator::Gt.evaluate(Some(&text("5")), "3"));
        assert!(!Operator::Gt.evaluate(Some(&text("5")), "30"));
        assert!(Operator::Lt.evaluate(Some(&AttributeValue::Number(2.5)), "10"));
    }

    #[test]
    fn greater_than_falls_back_to_text_order() {
        // "abc" does not parse; 'a' sorts after '3'.
        assert!(Operator::Gt.evaluate(Some(&text("abc")), "3"));
        // Text order, not numeric: "10" < "9".
        assert!(Operator::Lt.evaluate(Some(&text("10x")), "9"));
    }

    #[test]
    fn missing_value_compares_as_empty_text() {
        assert!(!Operator::Gt.evaluate(None, "3"));
        assert!(Operator::Lt.evaluate(None, "3"));
        assert!(Operator::Eq.evaluate(None, ""));
    }

    #[test]
    fn in_accepts_json_list_scalar_or_csv() {
        assert!(Operator::In.evaluate(Some(&text("red")), r#"["red","blue"]"#));
        assert!(!Operator::In.evaluate(Some(&text("green")), r#"["red","blue"]"#));
        assert!(Operator::In.evaluate(Some(&AttributeValue::Number(5.0)), "[4, 5, 6]"));
        assert!(Operator::In.evaluate(Some(&text("red")), r#""red""#));
        assert!(Operator::In.evaluate(Some(&text("blue")), "red, blue ,green"));
    }

    #[test]
    fn between_inclusive_and_strict_about_format() {
        assert!(Operator::Between.evaluate(Some(&text("7")), "1,10"));
        assert!(Operator::Between.evaluate(Some(&text("10")), "1, 10"));
        assert!(!Operator::Between.evaluate(Some(&text("7")), "1,10,20"));
        assert!(!Operator::Between.evaluate(Some(&text("7")), "1"));
        assert!(!Operator::Between.evaluate(Some(&text("7")), "a,10"));
        assert!(!Operator::Between.evaluate(Some(&text("seven")), "1,10"));
        assert!(!Operator::Between.evaluate(None, "1,10"));
    }

    #[test]
    fn is_not_null() {
        assert!(!Operator::IsNotNull.evaluate(None, ""));
        assert!(!Operator::IsNotNull.evaluate(Some(&AttributeValue::Null), ""));
        assert!(!Operator::IsNotNull.evaluate(Some(&text("")), ""));
        assert!(Operator::IsNotNull.evaluate(Some(&AttributeValue::Boolean(false)), ""));
        assert!(Operator::IsNotNull.evaluate(Some(&AttributeValue::Number(0.0)), ""));
    }

    #[test]
    fn unknown_is_false() {
        let op = Operator::parse("LIKE");
        assert!(op.is_unknown());
        assert!(!op.evaluate(Some(&text("red")), "red"));
    }
}
