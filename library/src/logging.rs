use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Maps the number of `-v` flags to a level. Warnings are always shown.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Installs the stderr logger. stdout is reserved for index lines, so nothing
/// logged here may end up there.
pub fn init_logging(verbosity: u8) {
    let init_result = SimpleLogger::new()
        .with_level(level_for_verbosity(verbosity))
        .init();
    match init_result {
        Ok(_) => hashgen_debug!("Logging initialized"),
        // Only happens if a logger was already installed, e.g. twice in one process.
        Err(e) => eprintln!("Failed to initialize logging: {}", e),
    }
}
