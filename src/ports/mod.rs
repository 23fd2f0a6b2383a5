//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the learning core and the
//! simulated world. Following hexagonal architecture, these traits are owned
//! by the domain and implemented by adapters in the infrastructure layer.

pub mod environment;
pub mod observer;

pub use environment::{Environment, StepOutcome};
pub use observer::Observer;
