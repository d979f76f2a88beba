
use common::{condition, employees, field_paths, names};
use gridsieve_core::{evaluate_condition, filter_records, FilterValue, Operator};

fn active_is_true() -> gridsieve_core::FilterCondition {
    condition("isActive", Operator::Is, FilterValue::Boolean { value: true })
}

fn department_is_engineering() -> gridsieve_core::FilterCondition {
    condition("department", Operator::Is, FilterValue::SingleSelect { value: "Engineering".to_string() })
}

#[test]
fn test_empty_condition_set_is_identity() {
    let records = employees();
    let out = filter_records(records.clone(), &[], &field_paths());
    assert_eq!(out, records);
}

#[test]
fn test_result_is_a_subset_satisfying_the_condition() {
    let records = employees();
    let c = condition("projects", Operator::LessThanOrEqual, FilterValue::Number { value: 3.0 });

    let out = filter_records(records.clone(), &[c.clone()], &field_paths());
    for record in &out {
        assert!(records.contains(record));
        assert!(evaluate_condition(record, &c, None));
    }
    for record in records.iter().filter(|r| !out.contains(r)) {
        assert!(!evaluate_condition(record, &c, None));
    }
}

#[test]
fn test_and_decomposes_into_sequential_intersection() {
    let both = filter_records(employees(), &[department_is_engineering(), active_is_true()], &field_paths());
    let sequential = filter_records(
        filter_records(employees(), &[department_is_engineering()], &field_paths()),
        &[active_is_true()],
        &field_paths(),
    );
    assert_eq!(both, sequential);
    assert_eq!(names(&both), vec!["Alice Nguyen", "Bruno Costa", "Eli Ford"]);

    // Condition order does not change the result set.
    let swapped = filter_records(employees(), &[active_is_true(), department_is_engineering()], &field_paths());
    assert_eq!(both, swapped);
}

#[test]
fn test_matching_records_keep_input_order() {
    let out = filter_records(employees(), &[active_is_true()], &field_paths());
    assert_eq!(names(&out), vec!["Alice Nguyen", "Bruno Costa", "Dana Müller", "Eli Ford"]);
}

#[test]
fn test_contradictory_conditions_match_nothing() {
    let out = filter_records(
        employees(),
        &[
            condition("projects", Operator::GreaterThan, FilterValue::Number { value: 3.0 }),
            condition("projects", Operator::LessThan, FilterValue::Number { value: 3.0 }),
        ],
        &field_paths(),
    );
    assert!(out.is_empty());
}
