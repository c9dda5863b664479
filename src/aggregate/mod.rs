//! Statistics aggregation engine.
//!
//! Three request-scoped computations over already-materialized records:
//! - merging sparse per-entity counters into one total
//! - ranking a merged record into a chart series over configured categories
//! - resolving per-category best records across entities
//!
//! All of them are pure folds over their inputs; every call starts from empty
//! accumulators, so concurrent callers need no coordination.

use std::collections::HashMap;

use crate::models::{BestRecord, ChartCategory, ChartEntry, StatRecord, TimedRecord};

/// Merge a collection of counter records into one total.
///
/// The result's key set is the union of all inputs; each key's value is the
/// sum of its values across every record that defines it. An explicit fold:
/// later records may introduce keys earlier ones never mention. Commutative
/// and associative, so input order does not matter. An empty input yields an
/// empty record.
pub fn merge_all<'a, I>(records: I) -> StatRecord
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    let mut total = StatRecord::new();
    for record in records {
        total.merge(record);
    }
    total
}

/// Build a descending-ranked chart series over a configured category list.
///
/// One entry per category, reading 0 for keys the record does not define.
/// The sort is stable, so entries with equal values keep the category list's
/// order.
pub fn chart_series(record: &StatRecord, categories: &[ChartCategory]) -> Vec<ChartEntry> {
    let mut series: Vec<ChartEntry> = categories
        .iter()
        .map(|category| ChartEntry::new(category.label.clone(), record.get(&category.key)))
        .collect();

    series.sort_by(|a, b| b.value.cmp(&a.value));
    series
}

/// Resolve the record holder for every category observed across `entries`.
///
/// Traversal follows input order. A later entry takes a record only when its
/// value is strictly smaller, so the earliest-seen holder wins ties. The
/// accumulator starts with no entry per category rather than an infinity
/// sentinel; categories never observed are simply absent from the result.
pub fn best_records<O, I>(entries: I) -> HashMap<String, BestRecord<O>>
where
    O: Clone,
    I: IntoIterator<Item = (O, TimedRecord)>,
{
    let mut best: HashMap<String, BestRecord<O>> = HashMap::new();

    for (owner, record) in entries {
        for (category, value) in record.iter() {
            match best.get_mut(category) {
                Some(current) if value < current.value => {
                    current.value = value;
                    current.owner = owner.clone();
                }
                Some(_) => {}
                None => {
                    best.insert(
                        category.to_string(),
                        BestRecord {
                            value,
                            owner: owner.clone(),
                        },
                    );
                }
            }
        }
    }

    best
}
