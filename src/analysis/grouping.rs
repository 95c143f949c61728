//! Grouped aggregation over job records
//!
//! Partitions records by a categorical key and computes a count or a mean
//! salary per partition. Ordering is deterministic: partitions start in
//! first-appearance order and are stable-sorted descending by value, so ties
//! keep their original relative order.

use rustc_hash::FxHashMap;

use crate::models::JobRecord;

/// Count records per key, sorted descending, truncated to `limit` entries
///
/// Records for which the key extractor returns `None` are excluded. With
/// fewer than `limit` distinct keys, exactly that many entries are returned.
pub fn count_by<'a, I, F>(records: I, key: F, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a JobRecord>,
    F: Fn(&'a JobRecord) -> Option<&'a str>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

    for record in records {
        let Some(k) = key(record) else { continue };
        let entry = counts.entry(k).or_insert(0);
        if *entry == 0 {
            order.push(k);
        }
        *entry += 1;
    }

    let mut result: Vec<(String, usize)> = order
        .into_iter()
        .map(|k| (k.to_string(), counts[k]))
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result.truncate(limit);
    result
}

/// Mean salary per key, sorted descending, truncated to `limit` entries
///
/// Records with a missing key or a missing salary are excluded; keys with
/// no salaried records do not appear at all.
pub fn mean_salary_by<'a, I, F>(records: I, key: F, limit: usize) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a JobRecord>,
    F: Fn(&'a JobRecord) -> Option<&'a str>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut sums: FxHashMap<&str, (f64, usize)> = FxHashMap::default();

    for record in records {
        let (Some(k), Some(salary)) = (key(record), record.salary_usd) else {
            continue;
        };
        let entry = sums.entry(k).or_insert((0.0, 0));
        if entry.1 == 0 {
            order.push(k);
        }
        entry.0 += salary;
        entry.1 += 1;
    }

    let mut result: Vec<(String, f64)> = order
        .into_iter()
        .map(|k| {
            let (sum, count) = sums[k];
            (k.to_string(), sum / count as f64)
        })
        .collect();
    result.sort_by(|a, b| b.1.total_cmp(&a.1));
    result.truncate(limit);
    result
}
