//! # Error Types
//!
//! This module defines the error type for the expression search library.
//!
//! Very little in the search itself can fail: malformed genes are skipped,
//! empty decodes and divisions by zero simply score zero fitness, and running
//! out of generations is an ordinary negative outcome. Errors are reserved for
//! invalid configuration, malformed chromosome input and broken selection
//! preconditions.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genexpr::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if (0.0..=1.0).contains(&rate) {
//!         Ok(rate)
//!     } else {
//!         Err(GeneticError::Configuration(format!("rate {} out of range", rate)))
//!     }
//! }
//!
//! assert!(check_rate(0.7).is_ok());
//! assert!(check_rate(1.7).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the expression search library.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a chromosome cannot be built from its input.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// Error that occurs when a selection precondition is violated.
    #[error("Selection error: {0}")]
    Selection(String),
}

/// A specialized Result type for expression search operations.
pub type Result<T> = std::result::Result<T, GeneticError>;
