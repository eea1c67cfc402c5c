//! Infrastructure implementations for Taskdeck.
//!
//! SQLite-backed repositories, configuration loading, and data directory
//! resolution. Implements the ports defined in `taskdeck-core`.

pub mod config;
pub mod paths;
pub mod sqlite;
