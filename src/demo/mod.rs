/// Uniqueness: duplicate inserts are ignored
pub mod set_demo;

/// Ordering: insertion order kept, duplicates allowed, positional access
pub mod list_demo;

/// FIFO: first added is first served
pub mod queue_demo;

/// Key-value: unique keys, inserting an existing key overwrites
pub mod map_demo;

use std::io::Write;

use log::info;
use thiserror::Error;

use crate::collections::CollectionError;

pub use list_demo::ListReport;
pub use map_demo::MapReport;
pub use queue_demo::QueueReport;
pub use set_demo::SetReport;

/// Fruits every demo starts from
pub const FRUITS: [&str; 4] = ["apple", "banana", "orange", "lemon"];

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Results of every demo in the tour
#[derive(Debug, Clone)]
pub struct TourReport {
    pub set: SetReport,
    pub list: ListReport,
    pub queue: QueueReport,
    pub map: MapReport,
}

/// Run the set, list, queue and map demos in order, separated by blank lines
pub fn run_tour<W: Write>(out: &mut W) -> Result<TourReport, DemoError> {
    let set = set_demo::run(out)?;
    writeln!(out)?;

    let list = list_demo::run(out)?;
    writeln!(out)?;

    let queue = queue_demo::run(out)?;
    writeln!(out)?;

    let map = map_demo::run(out)?;
    out.flush()?;

    info!("Collections tour finished");

    Ok(TourReport {
        set,
        list,
        queue,
        map,
    })
}
