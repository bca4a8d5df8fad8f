// kubeclean/src/lib.rs
//! # kubeclean CLI Application
//!
//! This crate provides the command-line front end for `kubeclean-core`: flag
//! parsing, logger setup, and the stdin-to-stdout `clean` command.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::clean::{run_clean, CleanOptions};
