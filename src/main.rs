use std::io::{self, BufWriter};

use fruit_collections::{demo::run_tour, logging::init_logger};

fn main() -> Result<(), anyhow::Error> {
    init_logger("warn");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_tour(&mut out)?;

    Ok(())
}
