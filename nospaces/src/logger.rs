// nospaces/src/logger.rs
//! Internal diagnostics setup.
//!
//! Logs go to stderr as `[LEVEL target] message`. `RUST_LOG` is honoured; an
//! explicit level from the command line overrides its global directive.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Level used when neither `RUST_LOG` nor a flag says otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialises the global logger. Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()));

    // Tests initialise repeatedly.
    let _ = builder.try_init();
}
