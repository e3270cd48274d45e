use std::io::Write;

use log::debug;

use crate::{collections::KeyMap, demo::DemoError};

/// Calories per fruit
pub const FRUIT_CALORIES: [(&str, u32); 4] = [
    ("apple", 95),
    ("banana", 105),
    ("orange", 62),
    ("lemon", 17),
];

#[derive(Debug, Clone)]
pub struct MapReport {
    pub size: usize,
    pub lemon_calories: u32,
    pub after_remove: KeyMap<String, u32>,
}

pub fn run<W: Write>(out: &mut W) -> Result<MapReport, DemoError> {
    debug!("Starting map demo");
    writeln!(out, "--- Map Example ---")?;

    let mut fruit_calories = KeyMap::new();
    for (fruit, calories) in FRUIT_CALORIES {
        fruit_calories.insert(fruit.to_string(), calories);
    }

    // Existing key, the old value is replaced
    if let Some(old) = fruit_calories.insert("lemon".to_string(), 20) {
        debug!("Overwrote 'lemon' calories {old} with 20");
    }

    let size = fruit_calories.len();
    writeln!(out, "Size of map: {size}")?;

    let lemon_calories = *fruit_calories.get("lemon")?;
    writeln!(out, "Calories in a lemon: {lemon_calories}")?;

    fruit_calories.remove("orange");
    writeln!(out, "Map after removing 'orange': {fruit_calories}")?;

    Ok(MapReport {
        size,
        lemon_calories,
        after_remove: fruit_calories,
    })
}
