/// Set, list, queue and map wrappers over the standard collections
pub mod collections;

/// The four printed demos and the tour that runs them
pub mod demo;

/// Process wide logger setup
pub mod logging;

mod tests;

pub use collections::CollectionError;
pub use demo::{DemoError, TourReport, run_tour};
