use std::{
    collections::{VecDeque, vec_deque},
    fmt::{self, Display},
};

use log::warn;

use crate::collections::{CollectionError, write_delimited};

/// Queue served in the order items were added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoQueue<T> {
    order: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Add to the back of the queue
    pub fn enqueue(&mut self, value: T) {
        self.order.push_back(value);
    }

    /// Remove and return the oldest item
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.order.pop_front().ok_or_else(|| {
            warn!("Dequeue on an empty queue");
            CollectionError::Empty
        })
    }

    /// Oldest item, left in place
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.order.front().ok_or_else(|| {
            warn!("Peek on an empty queue");
            CollectionError::Empty
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates from oldest to newest
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.order.iter()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            order: iter.into_iter().collect(),
        }
    }
}

impl<T: Display> Display for FifoQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(f, "[", "]", &self.order)
    }
}
