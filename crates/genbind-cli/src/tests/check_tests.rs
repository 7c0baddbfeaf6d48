use genbind_common::diagnostics::diagnostic_codes;
use genbind_resolver::BindingResolver;

use crate::check::{Binding, check_table};
use crate::table_file::parse_table;

const TABLE: &str = r#"
{
  "types": [
    { "name": "User", "kind": "class" },
    { "name": "Long", "kind": "class" },
    { "name": "Repository", "kind": "interface", "type_params": ["T", "ID"] },
    { "name": "UserRepo", "kind": "class",
      "implements": [ { "name": "Repository", "args": ["User", "Long"] },
                      { "name": "Repository", "args": ["Long", "Long"] } ] },
    { "name": "BaseRepo", "kind": "class", "type_params": ["T"],
      "implements": [ { "name": "Repository", "args": ["T", "Long"] } ] }
  ]
}
"#;

#[test]
fn test_check_collects_bindings_and_diagnostics() {
    let table = parse_table(TABLE).expect("valid table");
    let resolver = BindingResolver::new(&table);
    let report = check_table(&resolver);

    assert_eq!(
        report.bindings,
        vec![
            Binding {
                subtype: "UserRepo".to_string(),
                ancestor: "Repository".to_string(),
                param_index: 0,
                resolved: "User".to_string(),
            },
            Binding {
                subtype: "UserRepo".to_string(),
                ancestor: "Repository".to_string(),
                param_index: 1,
                resolved: "Long".to_string(),
            },
            Binding {
                subtype: "BaseRepo".to_string(),
                ancestor: "Repository".to_string(),
                param_index: 1,
                resolved: "Long".to_string(),
            },
        ]
    );

    assert!(report.has_errors());
    assert_eq!(report.diagnostics.len(), 1);
    let diag = &report.diagnostics[0];
    assert_eq!(diag.code, diagnostic_codes::TYPE_ARGUMENT_IS_NOT_CONCRETE);
    assert_eq!(diag.subtype, "BaseRepo");
    assert_eq!(diag.param_index, Some(0));
}

#[test]
fn test_render_text() {
    let table = parse_table(TABLE).expect("valid table");
    let resolver = BindingResolver::new(&table);
    let text = check_table(&resolver).render_text();

    assert!(text.starts_with("UserRepo -> Repository[0] = User\n"));
    assert!(text.contains("error[GB9003]: Type argument 0 of 'Repository' declared by 'BaseRepo' is 'T'"));
}

#[test]
fn test_clean_table_has_no_errors() {
    let table = parse_table(
        r#"{ "types": [
            { "name": "User", "kind": "class" },
            { "name": "Base", "kind": "class", "type_params": ["T"] },
            { "name": "Sub", "kind": "class", "extends": { "name": "Base", "args": ["User"] } }
        ] }"#,
    )
    .expect("valid table");
    let resolver = BindingResolver::new(&table);
    let report = check_table(&resolver);

    assert!(!report.has_errors());
    assert_eq!(report.bindings.len(), 1);
    let json = serde_json::to_value(&report).expect("serializes");
    assert_eq!(json["bindings"][0]["resolved"], "User");
    assert_eq!(json["diagnostics"].as_array().map(Vec::len), Some(0));
}
