//! REST API request handlers.

pub mod task;
