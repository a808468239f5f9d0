//! Population counters and the display-option collector

use crate::config::DisplayOptions;
use crate::models::PopulationSnapshot;

/// Live population counters provided by the host server
pub trait PopulationSource: Send + Sync {
    fn active_players(&self) -> usize;
    fn max_slots(&self) -> usize;
    fn sleeping_players(&self) -> usize;
    fn joining_players(&self) -> usize;
    fn queued_players(&self) -> usize;

    /// Read all five counters
    fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            active_players: self.active_players(),
            max_slots: self.max_slots(),
            sleeping_players: self.sleeping_players(),
            joining_players: self.joining_players(),
            queued_players: self.queued_players(),
        }
    }
}

impl PopulationSource for PopulationSnapshot {
    fn active_players(&self) -> usize {
        self.active_players
    }

    fn max_slots(&self) -> usize {
        self.max_slots
    }

    fn sleeping_players(&self) -> usize {
        self.sleeping_players
    }

    fn joining_players(&self) -> usize {
        self.joining_players
    }

    fn queued_players(&self) -> usize {
        self.queued_players
    }
}

/// Counters enabled by `options`, in the order count, slots, sleepers,
/// joining, queued. Disabled counters are not read from the host.
pub fn collect_counts(options: &DisplayOptions, source: &dyn PopulationSource) -> Vec<usize> {
    let mut counts = Vec::with_capacity(5);

    if options.show_player_count {
        counts.push(source.active_players());
    }
    if options.show_server_slots {
        counts.push(source.max_slots());
    }
    if options.show_sleepers {
        counts.push(source.sleeping_players());
    }
    if options.show_joining_players {
        counts.push(source.joining_players());
    }
    if options.show_players_in_queue {
        counts.push(source.queued_players());
    }

    counts
}
