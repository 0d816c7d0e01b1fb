//! Failing through the global coercer before any error function is installed.

use serde_json::json;
use typeguard::prelude::*;

#[test]
fn nothing_installed_by_default() {
    assert!(!is_error_function_set());
}

#[test]
fn success_does_not_need_an_error_function() {
    let cx = Coercer::global();
    assert_eq!(required_int().coerce(Some(&json!(3)), &cx).unwrap(), 3);
}

#[test]
#[should_panic(expected = "no error function installed")]
fn failure_panics() {
    let cx = Coercer::global();
    let _ = required_int().coerce(Some(&json!("x")), &cx);
}
