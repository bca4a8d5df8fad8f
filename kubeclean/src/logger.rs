//! Logging setup for the kubeclean binary.
//!
//! Everything is written to stderr so that stdout only ever carries YAML.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `--verbose` nor `RUST_LOG` say otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger`.
///
/// `RUST_LOG` is the base filter; `level`, when given, overrides it for every
/// target. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}
