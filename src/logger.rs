//! Logging initialization (log4rs).

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

/// Initializes the logging system.
///
/// Uses `log4rs.yaml` from the working directory when present; otherwise
/// falls back to a console appender at the level named by
/// `ORDERDESK_LOG_LEVEL` (default `info`).
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    if Path::new("log4rs.yaml").exists() {
        log4rs::init_file("log4rs.yaml", Default::default())?;
        return Ok(());
    }
    init_console()
}

/// Initializes logging from a specific configuration file path.
pub fn init_path(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log4rs::init_file(path, Default::default())?;
    Ok(())
}

fn init_console() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("ORDERDESK_LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::LevelFilter::Info);
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
