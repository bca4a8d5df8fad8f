//! Document sanitization for kubeclean.
//!
//! This module holds the three transformations a run is built from: raw text
//! substitution before parsing (`substitution`), rule-driven field removal on a
//! parsed resource (`fields`), and recursive empty-value pruning (`pruner`).

pub mod fields;
pub mod pruner;
pub mod substitution;
