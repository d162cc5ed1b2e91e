use std::collections::HashSet;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array};
use arrow::record_batch::RecordBatch;
use rstest::rstest;
use upset_data::{
    connector_spans, melt, Intersections, MembershipTable, SetLookup, SortBy, SortOrder,
    UpSetDataError,
};

fn sample_table() -> MembershipTable {
    let batch = RecordBatch::try_from_iter(vec![
        ("set1", Arc::new(Int64Array::from(vec![1, 0, 1, 1])) as ArrayRef),
        ("set2", Arc::new(Int64Array::from(vec![1, 1, 0, 1])) as ArrayRef),
        ("set3", Arc::new(Int64Array::from(vec![0, 1, 1, 1])) as ArrayRef),
    ])
    .unwrap();
    MembershipTable::new(batch)
}

fn mutations_table() -> MembershipTable {
    let columns: Vec<(&str, Vec<i64>)> = vec![
        ("Alpha", vec![1, 1, 1, 0, 1, 0, 1, 0]),
        ("Beta", vec![1, 0, 1, 1, 0, 1, 1, 0]),
        ("Gamma", vec![0, 1, 1, 1, 0, 1, 1, 0]),
        ("Delta", vec![0, 0, 1, 1, 1, 1, 1, 0]),
        ("Kappa", vec![0, 1, 0, 1, 1, 0, 1, 1]),
        ("Omicron", vec![0, 0, 0, 1, 1, 1, 1, 1]),
    ];
    let batch = RecordBatch::try_from_iter(
        columns
            .into_iter()
            .map(|(name, values)| (name, Arc::new(Int64Array::from(values)) as ArrayRef)),
    )
    .unwrap();
    MembershipTable::new(batch)
}

fn sets(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_sample_groups_into_four_intersections() {
    let result = Intersections::compute(
        &sample_table(),
        &sets(&["set1", "set2", "set3"]),
        SortBy::Frequency,
        SortOrder::Ascending,
    )
    .unwrap();

    assert_eq!(result.len(), 4);
    assert!(result.combinations().iter().all(|c| c.count == 1));

    let degrees: Vec<_> = result.combinations().iter().map(|c| c.degree).collect();
    assert_eq!(degrees, vec![2, 2, 2, 3]);

    // Ties keep the pattern enumeration order
    let patterns: Vec<_> = result
        .combinations()
        .iter()
        .map(|c| result.member_sets(c).join("&"))
        .collect();
    assert_eq!(
        patterns,
        vec!["set2&set3", "set1&set3", "set1&set2", "set1&set2&set3"]
    );
}

#[rstest]
#[case(SortBy::Frequency, SortOrder::Ascending)]
#[case(SortBy::Frequency, SortOrder::Descending)]
#[case(SortBy::Degree, SortOrder::Ascending)]
#[case(SortBy::Degree, SortOrder::Descending)]
fn test_sort_and_degree_invariants(#[case] sort_by: SortBy, #[case] sort_order: SortOrder) {
    let table = mutations_table();
    let names = sets(&["Alpha", "Beta", "Gamma", "Delta", "Kappa", "Omicron"]);
    let result = Intersections::compute(&table, &names, sort_by, sort_order).unwrap();

    // One combination per distinct non-empty row pattern
    let distinct: HashSet<Vec<bool>> = table
        .memberships(&names)
        .unwrap()
        .into_iter()
        .filter(|row| row.iter().any(|m| *m))
        .collect();
    assert_eq!(result.len(), distinct.len());

    let keys: Vec<usize> = result
        .combinations()
        .iter()
        .map(|c| match sort_by {
            SortBy::Frequency => c.count,
            SortBy::Degree => c.degree,
        })
        .collect();
    for pair in keys.windows(2) {
        match sort_order {
            SortOrder::Ascending => assert!(pair[0] <= pair[1], "{keys:?}"),
            SortOrder::Descending => assert!(pair[0] >= pair[1], "{keys:?}"),
        }
    }

    for (id, combination) in result.combinations().iter().enumerate() {
        assert_eq!(combination.id, id);
        assert_eq!(
            combination.degree,
            combination.membership.iter().filter(|m| **m).count()
        );
    }

    let total: usize = result.combinations().iter().map(|c| c.count).sum();
    assert_eq!(total, table.num_rows());
}

#[test]
fn test_melt_emits_one_row_per_set_and_intersection() {
    let names = sets(&["set1", "set2", "set3"]);
    let result =
        Intersections::compute(&sample_table(), &names, SortBy::Degree, SortOrder::Descending)
            .unwrap();
    let rows = melt(&result);

    assert_eq!(rows.len(), 12);
    assert!(rows[..4].iter().all(|row| row.set == "set1"));
    assert!(rows[8..].iter().all(|row| row.set == "set3"));

    // Descending degree puts the triple intersection first
    let first: Vec<_> = rows.iter().filter(|row| row.intersection_id == 0).collect();
    assert_eq!(first.len(), 3);
    assert!(first.iter().all(|row| row.degree == 3 && row.is_intersect == 1));

    let lookup = SetLookup::new(&names, None);
    let spans = connector_spans(&rows, &lookup);
    assert_eq!(spans[&0], (1, 3));
    let set1_set3 = result
        .combinations()
        .iter()
        .find(|c| c.membership == vec![true, false, true])
        .unwrap();
    assert_eq!(spans[&set1_set3.id], (1, 3));
}

#[test]
fn test_unknown_set_is_missing_key() {
    let err = Intersections::compute(
        &sample_table(),
        &sets(&["set1", "set9"]),
        SortBy::Frequency,
        SortOrder::Ascending,
    )
    .unwrap_err();
    assert!(matches!(err, UpSetDataError::MissingKey(name) if name == "set9"));
}

#[test]
fn test_empty_table_has_no_intersections() {
    let batch = RecordBatch::try_from_iter(vec![(
        "a",
        Arc::new(Int64Array::from(Vec::<i64>::new())) as ArrayRef,
    )])
    .unwrap();
    let result = Intersections::compute(
        &MembershipTable::new(batch),
        &sets(&["a"]),
        SortBy::Frequency,
        SortOrder::Ascending,
    )
    .unwrap();
    assert!(result.is_empty());
    assert!(melt(&result).is_empty());
}
