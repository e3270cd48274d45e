use std::io::Write;

use log::debug;

use crate::{
    collections::OrderedList,
    demo::{DemoError, FRUITS},
};

#[derive(Debug, Clone)]
pub struct ListReport {
    pub size: usize,
    pub element_at_2: String,
    pub removed: String,
    pub after_remove: OrderedList<String>,
}

pub fn run<W: Write>(out: &mut W) -> Result<ListReport, DemoError> {
    debug!("Starting list demo");
    writeln!(out, "--- List Example ---")?;

    let mut fruit_list = OrderedList::new();
    for fruit in FRUITS {
        fruit_list.push(fruit.to_string());
    }
    // Lists keep duplicates
    fruit_list.push("lemon".to_string());

    let size = fruit_list.len();
    writeln!(out, "Size of list: {size}")?;
    writeln!(out, "List elements: {fruit_list}")?;

    let element_at_2 = fruit_list.get(2)?.clone();
    writeln!(out, "Element at index 2: {element_at_2}")?;

    let removed = fruit_list.remove(1)?;
    debug!("Removed '{removed}' from index 1");
    writeln!(out, "List after removing element at index 1: {fruit_list}")?;

    Ok(ListReport {
        size,
        element_at_2,
        removed,
        after_remove: fruit_list,
    })
}
