//! Tests for how parameters are folded into one predicate

use crate::fixtures::{Employee, matching_ids, staff};
use filter_engine::{FilterError, PredicateBuilder, build_predicate};
use model::filter::parameter::{
    ComparisonOperator, Connector, FilterParameter, FilterParameterList,
};

#[test]
fn test_empty_list_is_absent() {
    assert!(build_predicate::<Employee>(&FilterParameterList::new()).is_none());
}

#[test]
fn test_all_empty_values_is_absent() {
    let list = FilterParameterList::new()
        .and("name", ComparisonOperator::Equal, "")
        .or("age", ComparisonOperator::GreaterOrEqual, "");
    assert!(build_predicate::<Employee>(&list).is_none());
}

#[test]
fn test_single_equal_matches_exactly() {
    let list = FilterParameterList::new().and("name", ComparisonOperator::Equal, "Chen");
    let predicate = build_predicate::<Employee>(&list).unwrap();

    for employee in staff() {
        assert_eq!(predicate.matches(&employee), employee.name == "Chen");
    }
}

#[test]
fn test_and_is_conjunction() {
    let list = FilterParameterList::new()
        .and("active", ComparisonOperator::Equal, "true")
        .and("age", ComparisonOperator::GreaterOrEqual, "29");
    let predicate = build_predicate::<Employee>(&list).unwrap();

    for employee in staff() {
        assert_eq!(
            predicate.matches(&employee),
            employee.active && employee.age >= 29
        );
    }
    assert_eq!(matching_ids(&predicate), vec![1, 4]);
}

#[test]
fn test_or_is_disjunction() {
    let list = FilterParameterList::new()
        .and("age", ComparisonOperator::LessOrEqual, "24")
        .or("salary", ComparisonOperator::GreaterOrEqual, "6000");
    let predicate = build_predicate::<Employee>(&list).unwrap();

    for employee in staff() {
        assert_eq!(
            predicate.matches(&employee),
            employee.age <= 24 || employee.salary >= 6000.0
        );
    }
    assert_eq!(matching_ids(&predicate), vec![2, 3]);
}

#[test]
fn test_unparseable_value_poisons_whole_list() {
    let list = FilterParameterList::new()
        .and("name", ComparisonOperator::Equal, "Ada")
        .or("age", ComparisonOperator::Equal, "abc")
        .or("active", ComparisonOperator::Equal, "true");
    assert!(build_predicate::<Employee>(&list).is_none());
}

#[test]
fn test_first_connector_is_ignored() {
    let as_and = FilterParameterList::from(vec![
        FilterParameter::new("active", "true").with_connector(Connector::And),
        FilterParameter::new("age", "41").with_connector(Connector::Or),
    ]);
    let as_or = FilterParameterList::from(vec![
        FilterParameter::new("active", "true").with_connector(Connector::Or),
        FilterParameter::new("age", "41").with_connector(Connector::Or),
    ]);

    let a = build_predicate::<Employee>(&as_and).unwrap();
    let b = build_predicate::<Employee>(&as_or).unwrap();
    assert_eq!(a.expression(), b.expression());
    assert_eq!(matching_ids(&a), vec![1, 2, 3, 4]);
}

#[test]
fn test_each_term_uses_its_own_connector() {
    // (!active || age == 24) && rating >= 3
    let list = FilterParameterList::new()
        .and("active", ComparisonOperator::Equal, "false")
        .or("age", ComparisonOperator::Equal, "24")
        .and("rating", ComparisonOperator::GreaterOrEqual, "3");
    let predicate = build_predicate::<Employee>(&list).unwrap();

    assert_eq!(matching_ids(&predicate), vec![2, 3]);
    assert_eq!(
        predicate.to_string(),
        "p => (((p.active == false) OrElse (p.age == 24)) AndAlso (p.rating >= 3))"
    );
}

#[test]
fn test_fold_is_left_associative() {
    // a || b && c folds as (a || b) && c, not a || (b && c)
    let list = FilterParameterList::new()
        .and("name", ComparisonOperator::Equal, "Chen")
        .or("name", ComparisonOperator::Equal, "Ada")
        .and("active", ComparisonOperator::Equal, "true");
    let predicate = build_predicate::<Employee>(&list).unwrap();

    assert_eq!(matching_ids(&predicate), vec![1]);
}

#[test]
fn test_empty_values_between_terms_are_skipped() {
    let list = FilterParameterList::new()
        .and("name", ComparisonOperator::Equal, "Dana")
        .or("unknown_column", ComparisonOperator::Equal, "")
        .or("name", ComparisonOperator::Equal, "Ada");
    let predicate = build_predicate::<Employee>(&list).unwrap();

    assert_eq!(predicate.expression().term_count(), 2);
    assert_eq!(matching_ids(&predicate), vec![1, 4]);
}

#[test]
fn test_try_build_reports_reason() {
    let builder = PredicateBuilder::default();
    let list = FilterParameterList::new().and("salary", ComparisonOperator::Equal, "lots");

    let err = builder.try_build::<Employee>(&list).unwrap_err();
    assert!(matches!(err, FilterError::InvalidValue { ref column, .. } if column == "salary"));
    assert_eq!(
        err.to_string(),
        "Failed to parse value 'lots' for column 'salary' as double"
    );
}

#[test]
fn test_predicate_as_closure() {
    let list = FilterParameterList::new().and("id", ComparisonOperator::NotEqual, "2");
    let keep = build_predicate::<Employee>(&list).unwrap().into_fn();

    let kept: Vec<i32> = staff().into_iter().filter(|e| keep(e)).map(|e| e.id).collect();
    assert_eq!(kept, vec![1, 3, 4]);
}
