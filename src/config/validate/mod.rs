//! Configuration validation
//!
//! Checks an experiment configuration for correctness before any consumer
//! reads it.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, KNOWN_SCORERS};
