use std::io::Write;

use log::debug;

use crate::{collections::FifoQueue, demo::DemoError};

#[derive(Debug, Clone)]
pub struct QueueReport {
    pub removed_head: String,
    pub next_head: String,
    /// Snapshot after the dequeue, before "lemon" is added
    pub remaining: FifoQueue<String>,
    pub after_enqueue: FifoQueue<String>,
}

pub fn run<W: Write>(out: &mut W) -> Result<QueueReport, DemoError> {
    debug!("Starting queue demo");
    writeln!(out, "--- Queue Example ---")?;

    let mut fruit_queue = FifoQueue::new();
    for fruit in ["apple", "banana", "orange"] {
        fruit_queue.enqueue(fruit.to_string());
    }
    writeln!(out, "{fruit_queue}")?;

    let removed_head = fruit_queue.dequeue()?;
    writeln!(out, "Removed head: {removed_head}")?;

    let next_head = fruit_queue.peek()?.clone();
    writeln!(out, "Next head: {next_head}")?;

    writeln!(out, "Remaining elements: {fruit_queue}")?;
    let remaining = fruit_queue.clone();

    fruit_queue.enqueue("lemon".to_string());
    writeln!(out, "Queue after adding 'lemon': {fruit_queue}")?;

    Ok(QueueReport {
        removed_head,
        next_head,
        remaining,
        after_enqueue: fruit_queue,
    })
}
