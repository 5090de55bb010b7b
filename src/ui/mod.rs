//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, verbosity, and the [`output::Log`] sink
//!
//! # Design
//!
//! All console output goes through this module so quiet and debug modes are
//! handled in one place.

pub mod output;
