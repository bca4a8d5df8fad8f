// kubeclean/src/commands/mod.rs
//! Command implementations for the kubeclean CLI.

pub mod clean;
