//! Business logic services (use cases).
//!
//! Services orchestrate repository calls and field validation. They depend
//! on traits (ports) -- never on concrete infrastructure implementations.

pub mod task;
