use std::io::Write;

use log::debug;

use crate::{
    collections::UniqueSet,
    demo::{DemoError, FRUITS},
};

#[derive(Debug, Clone)]
pub struct SetReport {
    /// Size after the duplicate insert
    pub size: usize,
    pub contains_apple: bool,
    /// Contents after removing "banana"
    pub after_remove: UniqueSet<String>,
}

pub fn run<W: Write>(out: &mut W) -> Result<SetReport, DemoError> {
    debug!("Starting set demo");
    writeln!(out, "--- Set Example ---")?;

    let mut fruit_set = UniqueSet::new();
    for fruit in FRUITS {
        fruit_set.insert(fruit.to_string());
    }

    // Already present, ignored
    if !fruit_set.insert("lemon".to_string()) {
        debug!("Duplicate 'lemon' ignored by set");
    }

    let size = fruit_set.len();
    writeln!(out, "Size of set: {size}")?;
    writeln!(out, "Set elements: {fruit_set}")?;

    let contains_apple = fruit_set.contains("apple");
    writeln!(out, "Contains 'apple'? {contains_apple}")?;

    fruit_set.remove("banana");
    writeln!(out, "Set after removing 'banana': {fruit_set}")?;

    Ok(SetReport {
        size,
        contains_apple,
        after_remove: fruit_set,
    })
}
