
use common::{condition, employees, field_paths, names};
use gridsieve_core::{
    filter_records, FieldPathMap, FilterError, FilterIterator, FilterResult, FilterValue, Operator,
};
use serde_json::json;

#[test]
fn test_absent_fields_exclude_under_every_family() {
    let sparse = vec![json!({ "id": 99 })];

    let conditions = [
        condition("name", Operator::Contains, FilterValue::Text { value: "a".to_string() }),
        condition("projects", Operator::LessThan, FilterValue::Number { value: 100.0 }),
        condition(
            "joinDate",
            Operator::Between,
            FilterValue::Date { start_date: "2000-01-01".to_string(), end_date: "2030-01-01".to_string() },
        ),
        condition("salary", Operator::Between, FilterValue::Amount { min_amount: 0.0, max_amount: 1e9 }),
        condition("department", Operator::IsNot, FilterValue::SingleSelect { value: "Sales".to_string() }),
        condition("skills", Operator::NotIn, FilterValue::MultiSelect { values: vec!["React".to_string()] }),
        condition("isActive", Operator::Is, FilterValue::Boolean { value: false }),
    ];

    // Absence is monotone: even negated operators cannot rescue a record
    // whose field is missing.
    for c in conditions {
        assert!(
            filter_records(sparse.clone(), &[c.clone()], &field_paths()).is_empty(),
            "{} should exclude a record without the field",
            c.operator
        );
    }
}

#[test]
fn test_null_fields_behave_like_missing_ones() {
    let nulled = vec![json!({ "name": null, "address": { "city": null } })];

    let by_name = condition("name", Operator::DoesNotContain, FilterValue::Text { value: "zzz".to_string() });
    assert!(filter_records(nulled.clone(), &[by_name], &field_paths()).is_empty());

    let by_city = condition("city", Operator::Contains, FilterValue::Text { value: "ber".to_string() });
    assert!(filter_records(nulled, &[by_city], &field_paths()).is_empty());
}

#[test]
fn test_unknown_field_key_without_mapping_resolves_as_absent() {
    // A condition referencing a key outside the catalog still runs; the
    // resolver just finds nothing.
    let ghost = condition("favoriteColor", Operator::Equals, FilterValue::Text { value: "blue".to_string() });
    assert!(filter_records(employees(), &[ghost], &field_paths()).is_empty());
}

#[test]
fn test_operator_outside_family_fails_closed() {
    let miswired = condition("role", Operator::GreaterThan, FilterValue::Text { value: "a".to_string() });
    assert!(filter_records(employees(), &[miswired.clone()], &field_paths()).is_empty());

    // The strict iterator names the fault instead of swallowing it.
    let results: Vec<_> =
        FilterIterator::new(employees().into_iter(), vec![miswired], field_paths()).collect();
    assert!(results.iter().all(|r| matches!(
        r,
        FilterResult::Error(_, FilterError::OperatorMismatch { operator: Operator::GreaterThan, .. })
    )));
}

#[test]
fn test_coercion_failures_exclude_without_error() {
    let dirty = vec![json!({ "name": "Pat", "salary": "confidential", "joinDate": "someday" })];

    let by_salary =
        condition("salary", Operator::Between, FilterValue::Amount { min_amount: 0.0, max_amount: 1e9 });
    let by_date = condition(
        "joinDate",
        Operator::Between,
        FilterValue::Date { start_date: "2000-01-01".to_string(), end_date: "2030-01-01".to_string() },
    );

    // Lenient: excluded. Strict: still not an error - bad data, not bad wiring.
    assert!(filter_records(dirty.clone(), &[by_salary.clone()], &field_paths()).is_empty());
    let results: Vec<_> =
        FilterIterator::new(dirty.into_iter(), vec![by_salary, by_date], field_paths()).collect();
    assert!(matches!(results[0], FilterResult::Skip(_)));
}

#[test]
fn test_date_between_covers_boundary_days() {
    let range = condition(
        "joinDate",
        Operator::Between,
        FilterValue::Date { start_date: "2020-07-30".to_string(), end_date: "2021-02-01".to_string() },
    );
    // Eli joined exactly on the start day, Bruno exactly on the end day.
    let matched = filter_records(employees(), &[range], &field_paths());
    assert_eq!(names(&matched), vec!["Bruno Costa", "Eli Ford"]);
}

#[test]
fn test_amount_range_is_exact_while_date_range_widens() {
    let records = vec![json!({
        "invoiced": 200,
        "billedOn": "2024-03-31T18:45:00"
    })];

    // 200 sits on the amount bound: included, but nothing past it.
    let on_bound =
        condition("invoiced", Operator::Between, FilterValue::Amount { min_amount: 100.0, max_amount: 200.0 });
    assert_eq!(filter_records(records.clone(), &[on_bound], &FieldPathMap::new()).len(), 1);
    let past_bound =
        condition("invoiced", Operator::Between, FilterValue::Amount { min_amount: 100.0, max_amount: 199.0 });
    assert!(filter_records(records.clone(), &[past_bound], &FieldPathMap::new()).is_empty());

    // An evening timestamp still lands inside a range ending that calendar
    // day, because the date family widens the end bound to end of day.
    let same_day = condition(
        "billedOn",
        Operator::Between,
        FilterValue::Date { start_date: "2024-03-01".to_string(), end_date: "2024-03-31".to_string() },
    );
    assert_eq!(filter_records(records, &[same_day], &FieldPathMap::new()).len(), 1);
}

#[test]
fn test_multi_select_on_non_sequence_field_fails_closed() {
    // Pointing a multiSelect condition at a scalar field is a config bug;
    // both operators refuse to match.
    let scalar_in = condition("role", Operator::In, FilterValue::MultiSelect { values: vec!["React".to_string()] });
    let scalar_not_in =
        condition("role", Operator::NotIn, FilterValue::MultiSelect { values: vec!["React".to_string()] });
    assert!(filter_records(employees(), &[scalar_in], &field_paths()).is_empty());
    assert!(filter_records(employees(), &[scalar_not_in], &field_paths()).is_empty());
}

#[test]
fn test_multi_select_in_and_not_in_partition_sequence_records() {
    let values = FilterValue::MultiSelect { values: vec!["React".to_string(), "SQL".to_string()] };
    let chosen = filter_records(
        employees(),
        &[condition("skills", Operator::In, values.clone())],
        &field_paths(),
    );
    let rest = filter_records(
        employees(),
        &[condition("skills", Operator::NotIn, values)],
        &field_paths(),
    );

    // Every record's skills field is a sequence, so in/notIn partition the
    // roster exactly.
    assert_eq!(chosen.len() + rest.len(), employees().len());
    assert!(chosen.iter().all(|r| !rest.contains(r)));
    assert_eq!(names(&chosen), vec!["Alice Nguyen", "Dana Müller"]);
}

#[test]
fn test_filtering_never_mutates_records() {
    let records = employees();
    let _ = filter_records(
        records.clone(),
        &[condition("department", Operator::Is, FilterValue::SingleSelect { value: "Sales".to_string() })],
        &field_paths(),
    );
    assert_eq!(records, employees());
}
