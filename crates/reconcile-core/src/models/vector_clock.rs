//! Vector clock for causal ordering between replicas.
//!
//! Each replica (site) owns one logical counter entry. Backed by a
//! `BTreeMap` so iteration and serialization order are the sorted site ids,
//! independent of insertion order.
//!
//! # Examples
//!
//! ```
//! use reconcile_core::VectorClock;
//!
//! let mut a = VectorClock::new();
//! a.increment("site-1");
//! a.increment("site-1");
//!
//! let mut b = VectorClock::new();
//! b.increment("site-2");
//!
//! assert!(a.concurrent_with(&b));
//!
//! let joined = a.join(&b);
//! assert_eq!(joined.get("site-1"), 2);
//! assert_eq!(joined.get("site-2"), 1);
//! assert_eq!(joined.total(), 3);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How two clocks relate under happens-before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CausalOrder {
    /// `self` happens-before `other`.
    Before,
    /// `other` happens-before `self`.
    After,
    Equal,
    Concurrent,
}

/// A vector clock mapping site ids to logical counters.
///
/// Absent entries read as 0. Join is component-wise max.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorClock {
    clocks: BTreeMap<String, u64>,
}

impl VectorClock {
    /// Create an empty vector clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter for `site_id` (0 if absent).
    pub fn get(&self, site_id: &str) -> u64 {
        self.clocks.get(site_id).copied().unwrap_or(0)
    }

    /// Overwrite the entry for `site_id`.
    pub fn set(&mut self, site_id: &str, value: u64) {
        self.clocks.insert(site_id.to_string(), value);
    }

    /// Advance the entry for `site_id` by one and return the new value.
    pub fn increment(&mut self, site_id: &str) -> u64 {
        let entry = self.clocks.entry(site_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }

    /// Component-wise max over the union of both clocks' sites.
    ///
    /// Commutative, associative and idempotent.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        let mut joined = self.clone();
        for (site_id, &other_val) in &other.clocks {
            let entry = joined.clocks.entry(site_id.clone()).or_insert(0);
            *entry = (*entry).max(other_val);
        }
        joined
    }

    /// Sum of all entries.
    pub fn total(&self) -> u64 {
        self.clocks
            .values()
            .fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    /// Returns true if `self` happens-before `other`.
    ///
    /// Every entry of `self` is ≤ the matching entry of `other`, and at least
    /// one is strictly less.
    pub fn happens_before(&self, other: &Self) -> bool {
        let mut at_least_one_less = false;

        for (site_id, &self_val) in &self.clocks {
            let other_val = other.get(site_id);
            if self_val > other_val {
                return false;
            }
            if self_val < other_val {
                at_least_one_less = true;
            }
        }

        // Entries only `other` has are > our implicit 0.
        for (site_id, &other_val) in &other.clocks {
            if !self.clocks.contains_key(site_id) && other_val > 0 {
                at_least_one_less = true;
            }
        }

        at_least_one_less
    }

    /// Returns true if `other` happens-before `self`.
    pub fn dominates(&self, other: &Self) -> bool {
        other.happens_before(self)
    }

    /// Returns true if neither clock happens-before the other and they differ.
    pub fn concurrent_with(&self, other: &Self) -> bool {
        self.compare(other) == CausalOrder::Concurrent
    }

    pub fn compare(&self, other: &Self) -> CausalOrder {
        if self.happens_before(other) {
            CausalOrder::Before
        } else if other.happens_before(self) {
            CausalOrder::After
        } else if self.equivalent(other) {
            CausalOrder::Equal
        } else {
            CausalOrder::Concurrent
        }
    }

    /// Site ids in sorted order.
    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.clocks.keys().map(String::as_str)
    }

    /// `(site id, counter)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.clocks.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    // Equal up to explicit zero entries.
    fn equivalent(&self, other: &Self) -> bool {
        self.clocks.iter().all(|(k, v)| other.get(k) == *v)
            && other.clocks.iter().all(|(k, v)| self.get(k) == *v)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for VectorClock {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            clocks: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
