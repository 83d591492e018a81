//! Score lookup abstraction.
//!
//! The selector never cares which container holds the scores, only that a
//! model identifier can be resolved to a number. `ScoreLookup` covers the
//! std maps and `IndexMap`; `Scoreboard` implements it as well.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// Resolve a model identifier to its error score.
pub trait ScoreLookup<K: ?Sized> {
    /// Score for `id`, or `None` if the mapping has no entry for it.
    fn score(&self, id: &K) -> Option<f64>;
}

impl<K, Q, S> ScoreLookup<Q> for HashMap<K, f64, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn score(&self, id: &Q) -> Option<f64> {
        self.get(id).copied()
    }
}

impl<K, Q> ScoreLookup<Q> for BTreeMap<K, f64>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn score(&self, id: &Q) -> Option<f64> {
        self.get(id).copied()
    }
}

impl<K, Q, S> ScoreLookup<Q> for IndexMap<K, f64, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn score(&self, id: &Q) -> Option<f64> {
        self.get(id).copied()
    }
}

impl<K, T> ScoreLookup<K> for &T
where
    K: ?Sized,
    T: ScoreLookup<K> + ?Sized,
{
    fn score(&self, id: &K) -> Option<f64> {
        (**self).score(id)
    }
}
