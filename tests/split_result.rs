use anyhow::Result;
use pipeflow::testing::*;
use pipeflow::*;

#[test]
fn results_are_partitioned_preserving_relative_order() {
    let input: Vec<Result<i32, String>> = vec![
        Ok(1),
        Err("error1".to_string()),
        Ok(2),
        Err("error2".to_string()),
        Ok(3),
    ];
    let (errors, values) = as_data_flow(input) | split_result();

    assert_flow_yields(values, &[1, 2, 3]);
    assert_flow_yields(errors, &["error1".to_string(), "error2".to_string()]);
}

#[test]
fn all_successes_leave_the_failure_flow_empty() {
    let input: Vec<Result<i32, String>> = vec![Ok(1), Ok(2)];
    let (errors, values) = as_data_flow(input) | split_result();

    assert!((errors | as_vec()).is_empty());
    assert_eq!(values | as_vec(), vec![1, 2]);
}

#[test]
fn all_failures_leave_the_success_flow_empty() {
    let input: Vec<Result<i32, &str>> = vec![Err("error1"), Err("error2")];
    let (errors, values) = as_data_flow(input) | split_result();

    assert!((values | as_vec()).is_empty());
    assert_eq!(errors | as_vec(), vec!["error1", "error2"]);
}

#[test]
fn fallible_transform_then_split() -> Result<()> {
    let names = vec!["good-department", "bad department", "", "another-good-department"];

    let (failures, departments) = as_data_flow(names)
        | transform(parse_department)
        | split_result();

    let mut report = Vec::new();
    let _ = (failures | write_to(&mut report, '.'))?;
    assert_eq!(
        String::from_utf8(report)?,
        "Department name contains space.Department name is empty."
    );

    assert_eq!(
        departments | as_vec(),
        vec![
            Department { name: "good-department".to_string() },
            Department { name: "another-good-department".to_string() },
        ]
    );
    Ok(())
}

#[test]
fn split_result_with_applies_the_function_first() {
    let (bad, good) = as_data_flow(vec!["10", "x", "30", ""])
        | split_result_with(|s: &str| s.parse::<u16>());

    assert_eq!(good | as_vec(), vec![10, 30]);
    let messages: Vec<String> = bad.map(|e| e.to_string()).collect();
    assert_eq!(messages.len(), 2);
    assert_none(&messages, String::is_empty);
}

#[test]
fn both_outputs_are_independent_owning_flows() {
    let (errors, values) = {
        let input: Vec<Result<u8, char>> = vec![Ok(1), Err('e'), Ok(2)];
        as_data_flow(&input)
            | transform(|r: &Result<u8, char>| *r)
            | split_result()
    };
    // The source vector is gone; both flows still yield.
    assert_eq!(values.len(), 2);
    assert_eq!(errors.len(), 1);
}
