//! Tests for filters that arrive as JSON request bodies

use crate::fixtures::{Employee, matching_ids};
use filter_engine::build_predicate;
use model::filter::parameter::FilterParameterList;

#[test]
fn test_build_from_json_parameters() {
    let json = r#"[
        { "columnName": "active", "value": "true" },
        { "columnName": "salary", "value": "4000", "operator": "GreaterOrEqual" },
        { "columnName": "age", "value": "", "operator": "LessOrEqual", "connector": "Or" },
        { "columnName": "name", "value": "Chen", "connector": "Or" }
    ]"#;

    let list: FilterParameterList = serde_json::from_str(json).unwrap();
    let predicate = build_predicate::<Employee>(&list).unwrap();

    assert_eq!(matching_ids(&predicate), vec![1, 3, 4]);
}

#[test]
fn test_expression_serializes() {
    let json = r#"[{ "columnName": "id", "value": "2", "operator": "NotEqual" }]"#;
    let list: FilterParameterList = serde_json::from_str(json).unwrap();
    let predicate = build_predicate::<Employee>(&list).unwrap();

    let rendered = serde_json::to_value(predicate.expression()).unwrap();
    assert_eq!(
        rendered,
        serde_json::json!({
            "Comparison": { "column": "id", "op": "NotEqual", "value": { "Int": 2 } }
        })
    );
}

#[test]
fn test_null_values_are_skipped() {
    let json = r#"[
        { "columnName": "department", "value": null, "connector": "OrElse" },
        { "columnName": "name", "value": "Brian" },
        { "columnName": "age", "value": null, "operator": "GreaterThanOrEqual" },
        { "columnName": "name", "value": "Dana", "connector": "OrElse" }
    ]"#;

    let list: FilterParameterList = serde_json::from_str(json).unwrap();
    let predicate = build_predicate::<Employee>(&list).unwrap();

    assert_eq!(predicate.expression().term_count(), 2);
    assert_eq!(matching_ids(&predicate), vec![2, 4]);
}

#[test]
fn test_all_null_values_is_absent() {
    let json = r#"[{ "columnName": "id", "value": null }]"#;
    let list: FilterParameterList = serde_json::from_str(json).unwrap();
    assert!(build_predicate::<Employee>(&list).is_none());
}
