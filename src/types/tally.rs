use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

/// Picks the key with the largest value using a strict `>` left fold.
///
/// When several keys share the maximum, the first one yielded wins. Every
/// "favourite" in the report goes through this so ties always break the same way.
pub fn argmax<K, V, I>(pairs: I) -> Option<(K, V)>
where
    V: PartialOrd,
    I: IntoIterator<Item = (K, V)>
{
    pairs.into_iter().fold(None, |best, (key, value)| match best {
        Some((best_key, best_value)) if !(value > best_value) => Some((best_key, best_value)),
        _ => Some((key, value))
    })
}

/// A running total per key that remembers the order in which keys first appeared.
///
/// Iteration, [`Tally::argmax`] and [`Tally::top`] all follow first-insertion order,
/// which is what makes tie-breaks reproducible for a given input sequence.
#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + AddAssign
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new()
        }
    }

    /// Adds `amount` to the running total for `key`, registering the key on first sight.
    pub fn add<Q>(&mut self, key: &Q, amount: V)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized
    {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += amount,
            None => {
                let owned = key.to_owned();
                self.index.insert(owned.clone(), self.entries.len());
                self.entries.push((owned, amount));
            }
        }
    }

    /// Like [`Tally::add`], but folds existing totals through `combine` so the caller
    /// decides how overflow is handled. Returns `None` and leaves the total untouched
    /// when `combine` does.
    pub fn try_add<Q, F>(&mut self, key: &Q, amount: V, combine: F) -> Option<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce(V, V) -> Option<V>
    {
        match self.index.get(key) {
            Some(&position) => {
                let total = &mut self.entries[position].1;
                *total = combine(*total, amount)?;
            }
            None => {
                let owned = key.to_owned();
                self.index.insert(owned.clone(), self.entries.len());
                self.entries.push((owned, amount));
            }
        }

        Some(())
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Key with the highest total, earliest key winning ties.
    pub fn argmax(&self) -> Option<(&K, V)>
    where
        V: PartialOrd
    {
        argmax(self.entries.iter().map(|(key, value)| (key, *value)))
    }

    /// The `count` highest totals in descending order. The sort is stable so equal
    /// totals keep their first-insertion order.
    pub fn top(&self, count: usize) -> Vec<(K, V)>
    where
        V: Ord
    {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked.truncate(count);
        ranked
    }
}

impl<K, V> Default for Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + AddAssign
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Tally<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Serialize, V: Serialize> Serialize for Tally<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;

        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}
