use log::{Level, LevelFilter, log_enabled};

use crate::logging::{init_logger, parse_log_spec};

#[test]
fn test_parse_log_spec() {
    let spec = parse_log_spec("debug");
    let filters = spec.module_filters();
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0].module_name, None);
    assert_eq!(filters[0].level_filter, LevelFilter::Debug);
}

#[test]
fn test_parse_log_spec_invalid_falls_back_to_warn() {
    let spec = parse_log_spec("foo=notalevel!!");
    let filters = spec.module_filters();
    assert_eq!(filters.len(), 1, "Invalid spec should fall back to a single global filter");
    assert_eq!(filters[0].module_name, None);
    assert_eq!(filters[0].level_filter, LevelFilter::Warn);
}

#[test]
fn test_init_logger_first_call_wins() {
    init_logger("info");
    // Already initialized, must be a no-op
    init_logger("error");

    if std::env::var_os("RUST_LOG").is_none() {
        assert!(log_enabled!(Level::Info), "First spec should be active");
        assert!(!log_enabled!(Level::Debug), "First spec should filter debug");
    }
}
