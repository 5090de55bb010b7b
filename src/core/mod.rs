//! core
//!
//! Shared building blocks for gitstamp.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema and loading

pub mod config;
