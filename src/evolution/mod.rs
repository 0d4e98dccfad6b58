pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::{fitness, Challenge, TargetChallenge};
pub use launcher::{search, EvolutionLauncher, SearchOutcome};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
