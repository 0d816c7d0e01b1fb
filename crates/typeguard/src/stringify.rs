//! Short debug rendering of raw values for error messages.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Renders an optional raw value. Absent values render as `<undefined>`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use typeguard::stringify::stringify;
///
/// assert_eq!(stringify(None), "<undefined>");
/// assert_eq!(stringify(Some(&json!(null))), "<null>");
/// assert_eq!(stringify(Some(&json!("abc"))), "'abc'");
/// assert_eq!(stringify(Some(&json!([1, "x", true]))), "[1, 'x', <true>]");
/// ```
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None => "<undefined>".to_owned(),
        Some(value) => stringify_value(value),
    }
}

/// Renders a present raw value.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => "<null>".to_owned(),
        Value::Bool(b) => format!("<{b}>"),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{s}'"),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(stringify_value).collect();
            format!("[{}]", items.join(", "))
        }
        // Compact JSON; `Value`'s Display cannot fail.
        Value::Object(_) => value.to_string(),
    }
}

/// Renders a timestamp as ISO-8601 with milliseconds, e.g.
/// `2021-03-01T00:00:00.000Z`.
pub fn stringify_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), "<null>")]
    #[case(json!(true), "<true>")]
    #[case(json!(false), "<false>")]
    #[case(json!(42), "42")]
    #[case(json!(-1.5), "-1.5")]
    #[case(json!("hi"), "'hi'")]
    #[case(json!([]), "[]")]
    #[case(json!([null, [1, 2]]), "[<null>, [1, 2]]")]
    #[case(json!({"a": 1}), r#"{"a":1}"#)]
    fn renders(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(stringify(Some(&value)), expected);
    }

    #[test]
    fn renders_absent() {
        assert_eq!(stringify(None), "<undefined>");
    }

    #[test]
    fn renders_datetime() {
        let dt = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(stringify_datetime(&dt), "2021-03-01T00:00:00.000Z");
    }
}
