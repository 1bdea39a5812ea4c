//! Logging setup for the sparkfield binary.
//!
//! The library only talks to the `log` facade; binaries decide where it goes.

use crate::error::AppError;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Terminal level for this build: Debug in debug builds, Info in release.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install a terminal logger, plus a trace-level file logger when `file` is given.
pub fn init(file: Option<&Path>) -> Result<(), AppError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = file {
        loggers.push(WriteLogger::new(
            LevelFilter::Trace,
            Config::default(),
            File::create(path)?,
        ));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}
