use lexo_core::errors::{ErrorInfo, LexoError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("symbol", 'a')
        .with_context("remaining", 3)
}

#[test]
fn order_error_surface() {
    let err = LexoError::Order(sample_info("cycle-detected", "no ready symbol"));
    assert_eq!(err.code(), "cycle-detected");
    assert!(err.is_malformed_order());
    assert!(!err.is_invariant_violation());
    assert_eq!(err.info().context.get("symbol"), Some(&"a".to_string()));
}

#[test]
fn invariant_error_surface() {
    let err = LexoError::invariant("in-degree-underflow", "count below zero");
    assert!(err.is_invariant_violation());
    assert!(!err.is_malformed_order());
}

#[test]
fn context_is_attached_without_changing_family() {
    let err = LexoError::order("self-precedence", "symbol precedes itself")
        .with_context("symbol", 'x')
        .with_hint("check for duplicated words");
    match &err {
        LexoError::Order(info) => {
            assert_eq!(info.context.get("symbol"), Some(&"x".to_string()));
            assert_eq!(info.hint.as_deref(), Some("check for duplicated words"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn display_lists_context_and_hint() {
    let err = LexoError::Order(
        ErrorInfo::new("cycle-detected", "no ready symbol")
            .with_context("cycle", "a -> b -> a")
            .with_hint("words are not sorted"),
    );
    assert_eq!(
        err.to_string(),
        "malformed input order: no ready symbol (code: cycle-detected) \
         | context: [cycle=a -> b -> a] | hint: words are not sorted"
    );
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = LexoError::order("cycle-detected", "no ready symbol");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Order");
    assert_eq!(json["detail"]["code"], "cycle-detected");
    let decoded: LexoError = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, err);
}
