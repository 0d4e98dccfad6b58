pub mod chromosome;
pub mod decoder;
pub mod error;
pub mod evolution;
pub mod gene;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use decoder::{decode, render_text, render_value, Combine};
pub use error::{GeneticError, Result};
pub use evolution::{search, EvolutionOptions, SearchOutcome};
