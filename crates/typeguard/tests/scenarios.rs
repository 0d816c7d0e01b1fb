//! End-to-end behaviour of the built-in validators and their variants.

use std::thread;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use typeguard::prelude::*;

fn cx() -> Coercer<ValidationError> {
    Coercer::standard()
}

// ============================================================================
// PRIMITIVES
// ============================================================================

#[test]
fn int_from_padded_string() {
    assert_eq!(required_int().coerce(Some(&json!("-00001")), &cx()).unwrap(), -1);
}

#[test]
fn int_rejects_decimal_string() {
    let err = required_int().coerce(Some(&json!("1.5")), &cx()).unwrap_err();
    assert_eq!(
        err.message,
        "Invalid value format: '1.5' does not look like a valid integer string"
    );
    assert_eq!(err.code.as_deref(), Some("invalid_format"));
}

#[test]
fn array_below_min_length() {
    let err = required_array()
        .min_length(3)
        .coerce(Some(&json!([1, 2])), &cx())
        .unwrap_err();
    assert_eq!(err.code.as_deref(), Some("out_of_range"));
}

#[test]
fn bool_short_token() {
    assert!(required_bool().coerce(Some(&json!("T")), &cx()).unwrap());
}

#[test]
fn defined_object_paths() {
    let found = defined_object()
        .path(["a", "b"])
        .coerce(Some(&json!({"a": {"b": 1}})), &cx())
        .unwrap();
    assert_eq!(found, json!(1));

    let err = defined_object()
        .path(["a", "b"])
        .coerce(Some(&json!({"a": {}})), &cx())
        .unwrap_err();
    assert_eq!(err.to_string(), "[a/b] Missing path segment b");
}

#[test]
fn literal_wrong_vs_missing() {
    let allowed = required_literal(vec![1_i64, 2, 3]);
    let wrong = allowed.coerce(Some(&json!(5)), &cx()).unwrap_err();
    let missing = allowed.coerce(None, &cx()).unwrap_err();
    assert_eq!(wrong.code.as_deref(), Some("literal_mismatch"));
    assert_eq!(missing.code.as_deref(), Some("missing_value"));
    assert_ne!(wrong.message, missing.message);
}

#[test]
fn simple_date_seconds_equal_millis() {
    let seconds = required_simple_date().coerce(Some(&json!(1_700_000_000)), &cx());
    let millis = required_simple_date().coerce(Some(&json!(1_700_000_000_000_i64)), &cx());
    assert_eq!(seconds.unwrap(), millis.unwrap());
}

#[test]
fn tag_rendering() {
    let tag = Tag::make("root", None).next("items").next(3_usize).next("name");
    assert_eq!(tag.to_string(), "root/items[3]/name");
}

// ============================================================================
// VARIANTS
// ============================================================================

#[rstest]
#[case::string(required_string().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::non_empty(non_empty_string().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::bool(required_bool().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::int(required_int().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::float(required_float().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::array(required_array().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::object(defined_object().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::date(required_simple_date().optional().coerce(None, &cx()).map(|v| v.is_none()))]
#[case::literal(required_literal(vec!["a"]).optional().coerce(None, &cx()).map(|v| v.is_none()))]
fn optional_passes_absent(#[case] result: Result<bool, ValidationError>) {
    assert_eq!(result, Ok(true));
}

#[rstest]
#[case::string(required_string().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none()))]
#[case::non_empty(non_empty_string().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none()))]
#[case::bool(required_bool().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none()))]
#[case::int(required_int().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none()))]
#[case::float(required_float().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none()))]
#[case::date(
    required_simple_date().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none())
)]
#[case::array(required_array().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none()))]
#[case::object(defined_object().nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none()))]
#[case::literal(
    required_literal(vec![1_i64]).nullable().coerce(Some(&Value::Null), &cx()).map(|v| v.is_none())
)]
fn nullable_passes_null(#[case] result: Result<bool, ValidationError>) {
    assert_eq!(result, Ok(true));
}

#[rstest]
#[case(None)]
#[case(Some(json!(null)))]
fn optional_nullable_normalizes_empty(#[case] raw: Option<Value>) {
    let float = required_float().optional_nullable();
    let date = required_simple_date().optional_nullable();
    assert_eq!(float.coerce(raw.as_ref(), &cx()).unwrap(), None);
    assert_eq!(date.coerce(raw.as_ref(), &cx()).unwrap(), None);
}

#[test]
fn variants_keep_inner_errors() {
    let inner = required_int().max_value(5).tag("limit");
    let expected = inner.coerce(Some(&json!(6)), &cx()).unwrap_err();
    for err in [
        inner.clone().optional().coerce(Some(&json!(6)), &cx()).unwrap_err(),
        inner.clone().nullable().coerce(Some(&json!(6)), &cx()).unwrap_err(),
        inner.optional_nullable().coerce(Some(&json!(6)), &cx()).unwrap_err(),
    ] {
        assert_eq!(err, expected);
    }
}

#[test]
fn coercer_helpers_match_combinators() {
    let cx = cx();
    let rule = required_bool();
    assert_eq!(cx.required(&rule, Some(&json!("F"))).unwrap(), false);
    assert_eq!(cx.optional(&rule, None).unwrap(), None);
    assert_eq!(cx.nullable(&rule, Some(&Value::Null)).unwrap(), None);
    assert_eq!(cx.optional_nullable(&rule, Some(&json!(true))).unwrap(), Some(true));
}

// ============================================================================
// NESTED INPUT
// ============================================================================

#[test]
fn element_tags_locate_failures() {
    let payload = json!({ "ports": [80, "443", "http"] });
    let root = Tag::new("payload").next("ports");
    let items = required_array().tag(&root).coerce(payload.get("ports"), &cx()).unwrap();

    let errors: Vec<String> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            required_int()
                .tag(root.next(index))
                .coerce(Some(item), &cx())
                .err()
                .map(|err| err.to_string())
        })
        .collect();

    assert_eq!(
        errors,
        vec![
            "[payload/ports[2]] Invalid value format: 'http' does not look like a valid integer string"
                .to_owned()
        ]
    );
}

#[test]
fn custom_error_type() {
    #[derive(Debug, PartialEq)]
    struct FieldError {
        field: String,
        code: String,
    }

    let cx = Coercer::new(|_message: String, options: &ErrorOptions| FieldError {
        field: options.tag.as_ref().map(ToString::to_string).unwrap_or_default(),
        code: options.code.as_deref().unwrap_or_default().to_owned(),
    });

    let err = required_string().tag("user").coerce(Some(&json!(1)), &cx).unwrap_err();
    assert_eq!(
        err,
        FieldError {
            field: "user".to_owned(),
            code: "invalid_format".to_owned(),
        }
    );
}

#[test]
fn coercer_is_shareable_across_threads() {
    let cx = cx();
    let rule = required_int().min_value(0);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4_i64)
            .map(|n| {
                let cx = cx.clone();
                let rule = &rule;
                scope.spawn(move || rule.coerce(Some(&json!(n - 1)), &cx).is_ok())
            })
            .collect();
        let accepted: Vec<bool> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(accepted, vec![false, true, true, true]);
    });
}

// ============================================================================
// CONFIGURED RULES
// ============================================================================

#[test]
fn rule_tag_from_bare_segment() {
    let rule: RequiredInt = serde_json::from_value(json!({ "tag": "age", "min_value": 0 })).unwrap();
    let err = rule.coerce(Some(&json!(-1)), &cx()).unwrap_err();
    assert_eq!(err.tag.as_ref().map(ToString::to_string).as_deref(), Some("age"));
}

#[test]
fn rule_tag_must_not_be_empty() {
    assert!(serde_json::from_value::<ErrorOptions>(json!({ "tag": [] })).is_err());
    assert!(serde_json::from_value::<RequiredInt>(json!({ "tag": [] })).is_err());
    let options: ErrorOptions = serde_json::from_value(json!({ "tag": ["body", 1] })).unwrap();
    let tag = options.tag.unwrap();
    assert_eq!(tag.value(), &TagValue::Index(1));
    assert_eq!(tag.to_string(), "body[1]");
}
