//! Basic logger usage example
//!
//! Demonstrates the default stderr logger, an injected file logger and the
//! error pass-through helpers.
//!
//! Run with: cargo run --example basic_usage

use leveled_log::prelude::*;
use leveled_log::{debugf, errorf, infof};

fn open_config(logger: &Logger, path: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| logger.error(e))
        .map_err(LoggerError::from)
}

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    // The default logger writes ERROR and FATAL to stderr
    println!("1. Default logger (threshold ERROR):");
    debugf!("hidden debug line");
    infof!("hidden info line");
    let _ = errorf!("visible error line {}", 1);

    println!("\n2. Raising verbosity and dropping timestamps:");
    let default = default_logger();
    default.set_level(Level::DEBUG);
    default.set_timestamps(false);
    debugf!("debug now visible");
    if leveled_log::global::enabled(Level::DEBUG) {
        let pending: Vec<u32> = (1..=3).collect();
        debugf!("pending jobs {:?}", pending);
    }
    infof!("info now visible");

    println!("\n3. Injected file logger:");
    let dir = std::env::temp_dir().join("leveled_log_demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("app.log");

    let sink = FileSink::new(&path)?;
    println!("   appending to {}", sink.path().display());

    let logger = Logger::builder().level(Level::INFO).build(sink);

    logger.infof(format_args!("writing to {}", path.display()));
    if open_config(&logger, "/definitely/missing.toml").is_err() {
        logger.infof(format_args!("falling back to defaults"));
    }
    logger.close()?;

    print!("{}", std::fs::read_to_string(&path)?);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
