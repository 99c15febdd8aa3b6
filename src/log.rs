use log::LevelFilter;

/// Initialize logging for the CLI.
///
/// # Behavior
/// - Default level is `Info`, or `Debug` when `debug_enabled` is set.
/// - `RUST_LOG` overrides the defaults if explicitly set.
/// - Timestamps and module paths are suppressed; the output is meant for a
///   terminal, not log aggregation.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("logger initialized at {level:?} level");
}
