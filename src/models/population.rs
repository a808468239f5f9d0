//! Population snapshot model

use serde::{Deserialize, Serialize};

/// The five counters a host exposes about its population
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationSnapshot {
    pub active_players: usize,
    pub max_slots: usize,
    pub sleeping_players: usize,
    pub joining_players: usize,
    pub queued_players: usize,
}

impl PopulationSnapshot {
    /// All counters in reporting order: count, slots, sleepers, joining, queued
    pub fn all(&self) -> [usize; 5] {
        [
            self.active_players,
            self.max_slots,
            self.sleeping_players,
            self.joining_players,
            self.queued_players,
        ]
    }
}
