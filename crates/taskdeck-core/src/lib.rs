//! Business logic and repository trait definitions for Taskdeck.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `taskdeck-types` -- never on
//! `taskdeck-infra` or any database/IO crate.

pub mod repository;
pub mod service;
