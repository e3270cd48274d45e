use std::{
    fmt::{self, Display},
    slice,
};

use log::warn;

use crate::collections::{CollectionError, write_delimited};

/// Growable list that keeps insertion order and allows duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Removes the item at `index`, shifting every later item down by one
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        let len = self.items.len();
        if index >= len {
            warn!("List index {index} out of range (len {len})");
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Display> Display for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(f, "[", "]", &self.items)
    }
}
