use std::{env, sync::Once};

use flexi_logger::{LogSpecification, Logger};
use log::debug;

static LOGGER_INIT: Once = Once::new();

/// Parse a log specification, falling back to `warn` if it is invalid
pub fn parse_log_spec(spec: &str) -> LogSpecification {
    LogSpecification::parse(spec).unwrap_or_else(|e| {
        eprintln!("Invalid log specification {spec:?}, using \"warn\": {e}");
        LogSpecification::warn()
    })
}

/// Start the stderr logger once per process, the first call wins.
/// `RUST_LOG` overrides `default_spec`.
pub fn init_logger(default_spec: &str) {
    LOGGER_INIT.call_once(|| {
        let spec = match env::var("RUST_LOG") {
            Ok(env_spec) => parse_log_spec(&env_spec),
            Err(_) => parse_log_spec(default_spec),
        };

        // Ignore errors if a logger is already set
        if Logger::with(spec).start().is_ok() {
            debug!("Logger initialized with default spec {default_spec:?}");
        }
    });
}
