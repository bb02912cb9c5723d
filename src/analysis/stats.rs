//! Small reductions the demographic statistics are built from.
//!
//! Anything that would divide by zero returns `None` instead of NaN.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Label frequencies, highest count first. Equal counts keep the order in
/// which their labels were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCounts {
    entries: Vec<(String, usize)>,
}

impl ValueCounts {
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, n)| (label.as_str(), *n))
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
    }

    /// Most frequent label; the first-seen one on ties.
    pub fn top(&self) -> Option<(&str, usize)> {
        self.iter().next()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ValueCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, n) in &self.entries {
            map.serialize_entry(label, n)?;
        }
        map.end()
    }
}

pub fn value_counts<'a, I>(values: I) -> ValueCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for v in values {
        match index.get(v) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(v, entries.len());
                entries.push((v.to_string(), 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    ValueCounts { entries }
}

/// Arithmetic mean of the present values.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = i64>,
{
    // summed in f64; i64 cells near the limits would overflow
    let (sum, n) = values
        .into_iter()
        .fold((0.0f64, 0usize), |(s, n), v| (s + v as f64, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// `hits / total * 100`, unrounded.
pub fn percentage(hits: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(hits as f64 / total as f64 * 100.0)
    }
}

/// Percentage of `rows` for which `hit` holds.
pub fn rate_where<'a, T: 'a, I, F>(rows: I, hit: F) -> Option<f64>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> bool,
{
    let (hits, total) = rows
        .into_iter()
        .fold((0usize, 0usize), |(h, t), r| (h + hit(r) as usize, t + 1));
    percentage(hits, total)
}

/// Per-group hit percentage, groups in ascending key order.
pub fn group_rates<'a, T: 'a, I, K, F>(rows: I, key: K, hit: F) -> Vec<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a T>,
    K: Fn(&'a T) -> &'a str,
    F: Fn(&T) -> bool,
{
    let mut groups: BTreeMap<&'a str, (usize, usize)> = BTreeMap::new();
    for r in rows {
        let slot = groups.entry(key(r)).or_insert((0, 0));
        slot.0 += hit(r) as usize;
        slot.1 += 1;
    }
    groups
        .into_iter()
        .filter_map(|(k, (hits, total))| percentage(hits, total).map(|p| (k, p)))
        .collect()
}

/// First entry holding the largest value.
pub fn first_max<'a>(rates: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
    rates.iter().fold(None, |best, &(k, v)| match best {
        Some((_, b)) if v <= b => best,
        _ => Some((k, v)),
    })
}

/// Round to one decimal place, ties to even on the exact binary value.
pub fn round1(x: f64) -> f64 {
    format!("{:.1}", x).parse().unwrap_or(x)
}
