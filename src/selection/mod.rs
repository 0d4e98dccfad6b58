pub mod roulette;
pub mod selection_strategy;

pub use roulette::{weighted_random_selection, RouletteWheelSelection};
pub use selection_strategy::SelectionStrategy;
