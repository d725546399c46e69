use pipeflow::testing::*;
use pipeflow::*;

#[test]
fn counts_by_element_in_first_occurrence_order() {
    let words = vec!["a", "b", "c", "d", "a", "a", "b", "d"];
    let counts = as_data_flow(words.clone()) | aggregate_by_element(0usize, Count) | as_vec();

    assert_eq!(counts, vec![("a", 3), ("b", 2), ("c", 1), ("d", 2)]);
    assert_first_occurrence_order(&counts, &words);
}

#[test]
fn aggregate_by_key_with_a_closure_aggregator() {
    let students = sample_students();
    let names_per_group = as_data_flow(&students)
        | aggregate_by_key(
            String::new(),
            |acc: &mut String, s: &Student| acc.push_str(&s.name),
            |s: &&Student| s.group_id,
        )
        | as_vec();

    assert_eq!(
        names_per_group,
        vec![
            (0, "a".to_string()),
            (1, "be".to_string()),
            (2, "c".to_string()),
            (3, "d".to_string()),
        ]
    );
}

#[test]
fn sum_min_max_and_collect_per_key() {
    let readings = vec![("x", 3), ("y", 10), ("x", 1), ("x", 7), ("y", 4)];
    let region = |r: &(&'static str, i32)| r.0;

    let sums = as_data_flow(readings.clone())
        | aggregate_by_key(0, |acc: &mut i32, (_, v): (&str, i32)| *acc += v, region)
        | as_vec();
    assert_eq!(sums, vec![("x", 11), ("y", 14)]);

    let values = readings;
    let min = as_data_flow(values.clone())
        | aggregate_by_key(None, Min, |kv: &(&'static str, i32)| kv.0)
        | as_vec();
    let max = as_data_flow(values.clone())
        | aggregate_by_key(None, Max, |kv: &(&'static str, i32)| kv.0)
        | as_vec();
    assert_eq!(min, vec![("x", Some(("x", 1))), ("y", Some(("y", 4)))]);
    assert_eq!(max, vec![("x", Some(("x", 7))), ("y", Some(("y", 10)))]);

    let collected = as_data_flow(values)
        | aggregate_by_key(Vec::new(), Collect, |kv: &(&'static str, i32)| kv.0)
        | as_vec();
    assert_eq!(
        collected,
        vec![
            ("x", vec![("x", 3), ("x", 1), ("x", 7)]),
            ("y", vec![("y", 10), ("y", 4)]),
        ]
    );
}

#[test]
fn sum_over_a_view_accumulates_owned_values() {
    let amounts = vec![2.5f64, 1.0, 2.5];
    let totals = as_data_flow(&amounts)
        | aggregate_by_key(0.0f64, Sum, |_: &&f64| "all")
        | as_vec();
    assert_eq!(totals, vec![("all", 6.0)]);
}

#[test]
fn many_distinct_keys_keep_input_order() {
    let keys: Vec<String> = numbered_lines("k", 300).into_iter().rev().collect();
    let counts = as_data_flow(keys.clone()) | aggregate_by_element(0u64, Count) | as_vec();

    assert_first_occurrence_order(&counts, &keys);
    assert_all(&counts, |(_, n)| *n == 1);
}

#[test]
fn aggregation_is_unordered_equal_to_a_manual_tally() {
    let data = TestDataBuilder::<i32>::new()
        .add_repeated(7, 3)
        .add_range(1..=3)
        .add_value(7)
        .build();
    let counts = as_data_flow(data) | aggregate_by_element(0usize, Count) | as_vec();
    assert_kv_collections_equal(counts, vec![(1, 1), (2, 1), (3, 1), (7, 4)]);
}
