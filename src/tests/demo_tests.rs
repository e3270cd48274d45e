use std::collections::HashSet;

use crate::demo::{list_demo, map_demo, queue_demo, run_tour, set_demo};

fn output_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|line| line.to_string())
        .collect()
}

/// Parse `[a, b, c]` into its items
fn bracketed_items(text: &str) -> Vec<String> {
    let inner = text
        .trim()
        .trim_start_matches(['[', '{'])
        .trim_end_matches([']', '}']);
    if inner.is_empty() {
        return vec![];
    }
    inner.split(", ").map(|item| item.to_string()).collect()
}

#[test]
fn test_set_demo() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    let report = set_demo::run(&mut buf)?;

    assert_eq!(report.size, 4, "Duplicate 'lemon' should not be counted");
    assert!(report.contains_apple);

    let remaining: HashSet<&str> = report.after_remove.iter().map(String::as_str).collect();
    assert_eq!(remaining, HashSet::from(["apple", "orange", "lemon"]));

    let lines = output_lines(&buf);
    assert_eq!(lines[0], "--- Set Example ---");
    assert_eq!(lines[1], "Size of set: 4");
    let printed: HashSet<String> = bracketed_items(lines[2].trim_start_matches("Set elements: "))
        .into_iter()
        .collect();
    assert_eq!(printed.len(), 4, "Each fruit should be printed once");
    assert_eq!(lines[3], "Contains 'apple'? true");
    let after: HashSet<String> =
        bracketed_items(lines[4].trim_start_matches("Set after removing 'banana': "))
            .into_iter()
            .collect();
    assert!(!after.contains("banana"));
    assert_eq!(after.len(), 3);
    Ok(())
}

#[test]
fn test_list_demo() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    let report = list_demo::run(&mut buf)?;

    assert_eq!(report.size, 5, "Lists keep duplicates");
    assert_eq!(report.element_at_2, "orange");
    assert_eq!(report.removed, "banana");
    assert_eq!(
        report.after_remove.as_slice(),
        &["apple", "orange", "lemon", "lemon"]
    );

    assert_eq!(
        output_lines(&buf),
        vec![
            "--- List Example ---",
            "Size of list: 5",
            "List elements: [apple, banana, orange, lemon, lemon]",
            "Element at index 2: orange",
            "List after removing element at index 1: [apple, orange, lemon, lemon]",
        ]
    );
    Ok(())
}

#[test]
fn test_queue_demo() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    let report = queue_demo::run(&mut buf)?;

    assert_eq!(report.removed_head, "apple", "First in should be first out");
    assert_eq!(report.next_head, "banana");
    assert_eq!(
        report.remaining.iter().collect::<Vec<_>>(),
        vec!["banana", "orange"]
    );
    assert_eq!(
        report.after_enqueue.iter().collect::<Vec<_>>(),
        vec!["banana", "orange", "lemon"]
    );

    assert_eq!(
        output_lines(&buf),
        vec![
            "--- Queue Example ---",
            "[apple, banana, orange]",
            "Removed head: apple",
            "Next head: banana",
            "Remaining elements: [banana, orange]",
            "Queue after adding 'lemon': [banana, orange, lemon]",
        ]
    );
    Ok(())
}

#[test]
fn test_map_demo() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    let report = map_demo::run(&mut buf)?;

    assert_eq!(report.size, 4, "Overwriting 'lemon' should not add a key");
    assert_eq!(report.lemon_calories, 20, "Second insert should overwrite 17");

    let map = &report.after_remove;
    assert_eq!(map.len(), 3);
    assert!(!map.contains_key("orange"));
    assert_eq!(*map.get("apple")?, 95);
    assert_eq!(*map.get("banana")?, 105);
    assert_eq!(*map.get("lemon")?, 20);

    let lines = output_lines(&buf);
    assert_eq!(lines[0], "--- Map Example ---");
    assert_eq!(lines[1], "Size of map: 4");
    assert_eq!(lines[2], "Calories in a lemon: 20");
    let printed: HashSet<String> =
        bracketed_items(lines[3].trim_start_matches("Map after removing 'orange': "))
            .into_iter()
            .collect();
    let expected: HashSet<String> = ["apple=95", "banana=105", "lemon=20"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(printed, expected);
    Ok(())
}

#[test]
fn test_tour_sections() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    let report = run_tour(&mut buf)?;

    assert_eq!(report.set.size, 4);
    assert_eq!(report.list.size, 5);
    assert_eq!(report.queue.removed_head, "apple");
    assert_eq!(report.map.size, 4);

    let lines = output_lines(&buf);
    let headers: Vec<&str> = lines
        .iter()
        .filter(|line| line.starts_with("---"))
        .map(String::as_str)
        .collect();
    assert_eq!(
        headers,
        vec![
            "--- Set Example ---",
            "--- List Example ---",
            "--- Queue Example ---",
            "--- Map Example ---",
        ],
        "Demos should run in order"
    );

    // 5 + 5 + 6 + 4 demo lines, 3 separators
    assert_eq!(lines.len(), 23);
    assert_eq!(lines.iter().filter(|line| line.is_empty()).count(), 3);
    assert!(!lines.last().is_some_and(|line| line.is_empty()), "No blank line after the last demo");
    Ok(())
}
