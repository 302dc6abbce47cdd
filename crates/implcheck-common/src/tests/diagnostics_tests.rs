use super::*;

#[test]
fn test_format_message_replaces_positional_args() {
    let text = format_message(diagnostic_messages::TYPE_MUST_IMPLEMENT_INTERFACE, &["Foo", "Shape"]);
    assert_eq!(text, "Foo must implement Shape.");
}

#[test]
fn test_format_message_leaves_missing_args() {
    assert_eq!(format_message("{0} and {1}", &["a"]), "a and {1}");
}

#[test]
fn test_every_code_has_a_template() {
    let codes = [
        diagnostic_codes::MARKER_VALUE_MUST_BE_AN_INTERFACE,
        diagnostic_codes::TYPE_MUST_IMPLEMENT_INTERFACE,
        diagnostic_codes::INTERFACE_DOES_NOT_HAVE_METHOD,
        diagnostic_codes::CIRCULAR_BASE_REFERENCE,
        diagnostic_codes::CANNOT_FIND_NAME,
    ];
    for code in codes {
        assert!(get_diagnostic_message(code).is_some(), "missing template for {code}");
        assert_eq!(get_diagnostic_category(code), Some(DiagnosticCategory::Error));
    }
    assert_eq!(
        get_diagnostic_category(diagnostic_codes::IS_DECLARED_HERE),
        Some(DiagnosticCategory::Message)
    );
    assert_eq!(DIAGNOSTIC_MESSAGES.len(), codes.len() + 1);
}

#[test]
fn test_from_code_fills_template() {
    let diag = Diagnostic::from_code(
        "Shapes.java".to_string(),
        10,
        4,
        diagnostic_codes::INTERFACE_DOES_NOT_HAVE_METHOD,
        &["Shape", "area()"],
    );
    assert_eq!(diag.message_text, "Shape doesn't have \"area()\" method.");
    assert_eq!(diag.code, 9003);
    assert_eq!(diag.category, DiagnosticCategory::Error);
    assert!(diag.related_information.is_empty());
}

#[test]
fn test_related_information_serialization() {
    let diag = Diagnostic::error("A.java".to_string(), 0, 1, "msg".to_string(), 9002);
    let plain = serde_json::to_value(&diag).expect("serialize");
    assert!(plain.get("related_information").is_none());

    let with_related =
        diag.with_related("B.java".to_string(), 5, 3, "declared here".to_string());
    let json = serde_json::to_value(&with_related).expect("serialize");
    assert_eq!(json["related_information"][0]["file"], "B.java");
    assert_eq!(json["related_information"][0]["category"], "Message");
}
