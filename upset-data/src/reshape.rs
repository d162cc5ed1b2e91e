use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::Intersections;

/// One (intersection, set) pair after unpivoting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongFormRow {
    pub intersection_id: usize,
    pub count: usize,
    pub degree: usize,
    pub set: String,
    pub is_intersect: u8,
}

/// Unpivot every intersection into one row per set column.
///
/// Rows are emitted set-major: every intersection for the first set, then
/// every intersection for the second set, and so on.
pub fn melt(intersections: &Intersections) -> Vec<LongFormRow> {
    let mut rows = Vec::with_capacity(intersections.len() * intersections.sets().len());
    for (i, set) in intersections.sets().iter().enumerate() {
        for combination in intersections.combinations() {
            rows.push(LongFormRow {
                intersection_id: combination.id,
                count: combination.count,
                degree: combination.degree,
                set: set.clone(),
                is_intersect: u8::from(combination.membership[i]),
            });
        }
    }
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetLookupEntry {
    pub set: String,
    pub abbre: String,
    /// 1-based position in the caller's set list
    pub order: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbbreviationRow {
    pub set: String,
    pub set_abbre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub set: String,
    pub set_order: usize,
}

/// Per-set display label and display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLookup {
    entries: Vec<SetLookupEntry>,
}

impl SetLookup {
    /// Align `abbreviations` positionally with `sets`.
    ///
    /// A list whose length differs from `sets` is dropped with a warning and
    /// the set names are used as labels instead.
    pub fn new(sets: &[String], abbreviations: Option<&[String]>) -> Self {
        let abbreviations = match abbreviations {
            Some(abbre) if abbre.len() == sets.len() => abbre,
            Some(abbre) => {
                tracing::warn!(
                    "Dropping the abbreviation list because its length ({}) differs from \
                     the number of sets ({})",
                    abbre.len(),
                    sets.len()
                );
                sets
            }
            None => sets,
        };

        let entries = sets
            .iter()
            .zip(abbreviations)
            .enumerate()
            .map(|(i, (set, abbre))| SetLookupEntry {
                set: set.clone(),
                abbre: abbre.clone(),
                order: i + 1,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SetLookupEntry] {
        &self.entries
    }

    pub fn abbreviation(&self, set: &str) -> Option<&str> {
        self.entry(set).map(|entry| entry.abbre.as_str())
    }

    pub fn order(&self, set: &str) -> Option<usize> {
        self.entry(set).map(|entry| entry.order)
    }

    /// Character count of the first set's label, which decides the label
    /// style of every set
    pub fn leading_abbreviation_chars(&self) -> usize {
        self.entries
            .first()
            .map(|entry| entry.abbre.chars().count())
            .unwrap_or(0)
    }

    pub fn abbreviation_table(&self) -> Vec<AbbreviationRow> {
        self.entries
            .iter()
            .map(|entry| AbbreviationRow {
                set: entry.set.clone(),
                set_abbre: entry.abbre.clone(),
            })
            .collect()
    }

    pub fn order_table(&self) -> Vec<OrderRow> {
        self.entries
            .iter()
            .map(|entry| OrderRow {
                set: entry.set.clone(),
                set_order: entry.order,
            })
            .collect()
    }

    fn entry(&self, set: &str) -> Option<&SetLookupEntry> {
        self.entries.iter().find(|entry| entry.set == set)
    }
}

/// Span of set orders each intersection's connecting line covers.
///
/// For every intersection, the minimum and maximum set order among its member
/// rows. Non-member rows never widen the span.
pub fn connector_spans(
    rows: &[LongFormRow],
    lookup: &SetLookup,
) -> BTreeMap<usize, (usize, usize)> {
    let mut spans: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for row in rows.iter().filter(|row| row.is_intersect == 1) {
        let Some(order) = lookup.order(&row.set) else {
            continue;
        };
        spans
            .entry(row.intersection_id)
            .and_modify(|(lo, hi)| {
                *lo = (*lo).min(order);
                *hi = (*hi).max(order);
            })
            .or_insert((order, order));
    }
    spans
}
