//! Data models module
//!
//! This module contains the data structures exchanged with the host server

pub mod player;
pub mod population;

// Re-export commonly used models
pub use player::ChatPlayer;
pub use population::PopulationSnapshot;
