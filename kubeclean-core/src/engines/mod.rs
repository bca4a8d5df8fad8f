// kubeclean-core/src/engines/mod.rs
//! This module contains the sanitization engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `SanitizationEngine` trait.

pub mod field_engine;
