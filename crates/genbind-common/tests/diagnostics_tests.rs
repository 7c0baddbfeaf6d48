use super::*;

#[test]
fn test_format_message_replaces_all_occurrences() {
    let text = format_message(diagnostic_messages::NOT_A_DIRECT_ANCESTOR, &["Orders", "Repo"]);
    assert_eq!(
        text,
        "'Orders' does not directly extend or implement 'Repo'. Either declare 'Repo' directly on 'Orders' or supply the binding for 'Orders' explicitly."
    );
}

#[test]
fn test_format_message_leaves_missing_placeholders() {
    assert_eq!(format_message("{0} and {1}", &["a"]), "a and {1}");
}

#[test]
fn test_every_code_has_a_template() {
    for code in [
        diagnostic_codes::NOT_A_DIRECT_ANCESTOR,
        diagnostic_codes::RESOLUTION_MUST_START_AT_INTERMEDIATE,
        diagnostic_codes::TYPE_ARGUMENT_IS_NOT_CONCRETE,
        diagnostic_codes::PARAMETER_INDEX_OUT_OF_RANGE,
    ] {
        let message = get_diagnostic_message(code).expect("template exists");
        assert_eq!(message.category, DiagnosticCategory::Error);
        assert!(get_message_template(code).is_some_and(|t| t.contains("{0}")));
    }
    assert!(get_diagnostic_message(1).is_none());
}

#[test]
fn test_diagnostic_serializes_without_empty_fields() {
    let diag = Diagnostic::error(9001, "msg", "Orders", "Repo");
    let json = serde_json::to_value(&diag).expect("serializes");
    assert_eq!(json["code"], 9001);
    assert_eq!(json["category"], "error");
    assert!(json.get("related").is_none());
    assert!(json.get("param_index").is_none());

    let diag = diag.with_param_index(1).with_related("Mid");
    let json = serde_json::to_value(&diag).expect("serializes");
    assert_eq!(json["param_index"], 1);
    assert_eq!(json["related"][0], "Mid");
}

#[test]
fn test_format_message_copies_braces_in_arguments() {
    assert_eq!(
        format_message("'{0}' vs '{1}'", &["Weird{1}", "Repo"]),
        "'Weird{1}' vs 'Repo'"
    );
    assert_eq!(format_message("{0}{1}", &["{1}", "{0}"]), "{1}{0}");
}

#[test]
fn test_format_message_keeps_stray_braces() {
    assert_eq!(format_message("{} {x} {0", &["a"]), "{} {x} {0");
    assert_eq!(format_message("{{0}}", &["a"]), "{a}");
}
