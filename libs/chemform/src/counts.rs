//! Element count accumulation

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Mapping from element symbol to total atom count.
///
/// Counts only ever grow while a formula is parsed, and every stored count is at least 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ElementCounts {
    counts: BTreeMap<String, u64>,
}

impl ElementCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` atoms of `symbol`, creating the entry if absent.
    pub(crate) fn add(&mut self, symbol: &str, count: u64) -> Result<()> {
        match self.counts.get_mut(symbol) {
            Some(total) => {
                *total = total.checked_add(count).ok_or(Error::Overflow)?;
            }
            None => {
                self.counts.insert(symbol.to_string(), count);
            }
        }
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(symbol, count)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(symbol, count)| (symbol.as_str(), *count))
    }

    /// Sum of all atom counts, `None` on overflow.
    pub fn total_atoms(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |acc, count| acc.checked_add(*count))
    }

    pub fn into_inner(self) -> BTreeMap<String, u64> {
        self.counts
    }
}

/// Repeated symbols are summed (saturating at `u64::MAX`); zero counts are skipped.
impl<'a> FromIterator<(&'a str, u64)> for ElementCounts {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in iter {
            if count == 0 {
                continue;
            }
            let total: &mut u64 = counts.entry(symbol.to_string()).or_default();
            *total = total.saturating_add(count);
        }
        Self { counts }
    }
}

impl IntoIterator for ElementCounts {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl fmt::Display for ElementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", symbol, count)?;
        }
        Ok(())
    }
}
