use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::UpSetDataError;
use crate::sort::{SortBy, SortOrder};
use crate::table::MembershipTable;

/// One distinct pattern of set memberships observed in the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    /// Dense identifier in final display order
    pub id: usize,
    /// Position in the lexicographic enumeration of patterns, before sorting
    pub source_index: usize,
    /// One flag per set, in set-list order
    pub membership: Vec<bool>,
    /// Number of table rows with this pattern
    pub count: usize,
    /// Number of sets this pattern belongs to
    pub degree: usize,
}

impl Combination {
    fn sort_key(&self, sort_by: SortBy) -> usize {
        match sort_by {
            SortBy::Frequency => self.count,
            SortBy::Degree => self.degree,
        }
    }
}

/// Distinct, sorted intersections of a membership table
#[derive(Debug, Clone)]
pub struct Intersections {
    sets: Vec<String>,
    combinations: Vec<Combination>,
}

impl Intersections {
    /// Group `table` by the `sets` columns and count each membership pattern.
    ///
    /// Patterns are enumerated in lexicographic order of their membership
    /// vector (first set most significant), stably sorted by the requested key,
    /// and the empty pattern (degree 0) is dropped before identifiers are
    /// assigned.
    pub fn compute(
        table: &MembershipTable,
        sets: &[String],
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> Result<Self, UpSetDataError> {
        validate_sets(sets)?;

        let mut groups: BTreeMap<Vec<bool>, usize> = BTreeMap::new();
        for row in table.memberships(sets)? {
            *groups.entry(row).or_default() += 1;
        }

        let mut combinations: Vec<Combination> = groups
            .into_iter()
            .enumerate()
            .map(|(source_index, (membership, count))| {
                let degree = membership.iter().filter(|member| **member).count();
                Combination {
                    id: source_index,
                    source_index,
                    membership,
                    count,
                    degree,
                }
            })
            .collect();

        combinations.sort_by(|a, b| {
            sort_order.apply(a.sort_key(sort_by).cmp(&b.sort_key(sort_by)))
        });
        combinations.retain(|combination| combination.degree != 0);
        for (id, combination) in combinations.iter_mut().enumerate() {
            combination.id = id;
        }

        tracing::debug!(
            "Aggregated {} rows into {} intersections over {} sets",
            table.num_rows(),
            combinations.len(),
            sets.len()
        );

        Ok(Self {
            sets: sets.to_vec(),
            combinations,
        })
    }

    pub fn sets(&self) -> &[String] {
        &self.sets
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Names of the sets a combination belongs to, in set-list order
    pub fn member_sets(&self, combination: &Combination) -> Vec<&str> {
        self.sets
            .iter()
            .zip(&combination.membership)
            .filter(|(_, member)| **member)
            .map(|(set, _)| set.as_str())
            .collect()
    }

    /// Total number of elements in each set, in set-list order
    pub fn set_sizes(&self) -> Vec<(String, usize)> {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| {
                let size = self
                    .combinations
                    .iter()
                    .filter(|combination| combination.membership[i])
                    .map(|combination| combination.count)
                    .sum();
                (set.clone(), size)
            })
            .collect()
    }
}

/// The set list must be a non-empty sequence of distinct names
pub fn validate_sets(sets: &[String]) -> Result<(), UpSetDataError> {
    if sets.is_empty() {
        return Err(UpSetDataError::InvalidArgument(
            "sets must contain at least one set name".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for set in sets {
        if !seen.insert(set.as_str()) {
            return Err(UpSetDataError::InvalidArgument(format!(
                "set '{set}' appears more than once in sets"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{ArrayRef, Int64Array};
    use arrow::record_batch::RecordBatch;
    use std::sync::Arc;

    fn table(columns: &[(&str, Vec<i64>)]) -> MembershipTable {
        let batch = RecordBatch::try_from_iter(
            columns
                .iter()
                .map(|(name, values)| {
                    (*name, Arc::new(Int64Array::from(values.clone())) as ArrayRef)
                }),
        )
        .unwrap();
        MembershipTable::new(batch)
    }

    fn names(sets: &[&str]) -> Vec<String> {
        sets.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_degree_zero_pattern_is_dropped() {
        let table = table(&[("a", vec![0, 0, 1]), ("b", vec![0, 1, 1])]);
        let sets = names(&["a", "b"]);
        let result =
            Intersections::compute(&table, &sets, SortBy::Frequency, SortOrder::Ascending).unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.combinations().iter().all(|c| c.degree > 0));
        let ids: Vec<_> = result.combinations().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_descending_frequency_keeps_ties_in_source_order() {
        let table = table(&[
            ("a", vec![1, 1, 1, 0, 1]),
            ("b", vec![0, 0, 1, 1, 1]),
        ]);
        let sets = names(&["a", "b"]);
        let result = Intersections::compute(&table, &sets, SortBy::Frequency, SortOrder::Descending)
            .unwrap();

        let summary: Vec<_> = result
            .combinations()
            .iter()
            .map(|c| (c.membership.clone(), c.count))
            .collect();
        assert_eq!(
            summary,
            vec![
                (vec![true, false], 2),
                (vec![true, true], 2),
                (vec![false, true], 1),
            ]
        );
    }

    #[test]
    fn test_member_sets_and_set_sizes() {
        let table = table(&[
            ("a", vec![1, 1, 0]),
            ("b", vec![1, 0, 1]),
            ("c", vec![0, 0, 1]),
        ]);
        let sets = names(&["a", "b", "c"]);
        let result =
            Intersections::compute(&table, &sets, SortBy::Degree, SortOrder::Ascending).unwrap();

        let last = result.combinations().last().unwrap();
        assert_eq!(last.degree, 2);
        assert_eq!(
            result.set_sizes(),
            vec![("a".to_string(), 2), ("b".to_string(), 2), ("c".to_string(), 1)]
        );
        assert_eq!(result.member_sets(&result.combinations()[0]), vec!["a"]);
    }

    #[test]
    fn test_validate_sets() {
        assert!(matches!(
            validate_sets(&[]),
            Err(UpSetDataError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_sets(&names(&["a", "b", "a"])),
            Err(UpSetDataError::InvalidArgument(msg)) if msg.contains("'a'")
        ));
        assert!(validate_sets(&names(&["a", "b"])).is_ok());
    }
}
