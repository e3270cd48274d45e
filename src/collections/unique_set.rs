use std::{
    borrow::Borrow,
    collections::{HashSet, hash_set},
    fmt::{self, Display},
    hash::Hash,
};

use crate::collections::write_delimited;

/// Hash based set. Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct UniqueSet<T> {
    set: HashSet<T>,
}

impl<T: Hash + Eq> UniqueSet<T> {
    pub fn new() -> Self {
        Self {
            set: HashSet::new(),
        }
    }

    /// Returns false if the value was already present, in which case nothing changes
    pub fn insert(&mut self, value: T) -> bool {
        self.set.insert(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.set.contains(value)
    }

    /// Returns true if the value was present
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.set.remove(value)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.set.iter()
    }
}

impl<T: Hash + Eq> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for UniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

impl<T: Display> Display for UniqueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(f, "[", "]", &self.set)
    }
}
