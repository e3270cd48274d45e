/// Set that ignores duplicate inserts
pub mod unique_set;

/// Insertion ordered list with bound checked positional access
pub mod ordered_list;

/// First in, first out queue
pub mod fifo_queue;

/// Map with unique keys, inserts overwrite
pub mod key_map;

use std::fmt::{self, Display};

use thiserror::Error;

pub use fifo_queue::FifoQueue;
pub use key_map::KeyMap;
pub use ordered_list::OrderedList;
pub use unique_set::UniqueSet;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Collection is empty")]
    Empty,

    #[error("Key not found: {key}")]
    KeyNotFound { key: String },
}

/// Write items as `<open>a, b, c<close>`
pub(crate) fn write_delimited<I>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    close: &str,
    items: I,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    f.write_str(open)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}
