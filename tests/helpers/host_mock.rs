//! Fake host services for testing
//!
//! Records every chat delivery and counts how often each population counter
//! is read.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use PopCommand::models::{ChatPlayer, PopulationSnapshot};
use PopCommand::services::{ChatTransport, PopulationSource};

/// A message handed to the chat transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Direct { player_id: String, message: String, avatar_id: u64 },
    Broadcast { message: String, avatar_id: u64 },
}

/// Chat transport that records deliveries instead of sending them
#[derive(Debug, Default)]
pub struct RecordingChat {
    deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    pub fn direct_messages(&self) -> Vec<(String, String)> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Direct { player_id, message, .. } => Some((player_id, message)),
                Delivery::Broadcast { .. } => None,
            })
            .collect()
    }

    pub fn broadcasts(&self) -> Vec<String> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Broadcast { message, .. } => Some(message),
                Delivery::Direct { .. } => None,
            })
            .collect()
    }
}

impl ChatTransport for RecordingChat {
    fn send_message(&self, player: &ChatPlayer, message: &str, avatar_id: u64) {
        self.deliveries.lock().unwrap().push(Delivery::Direct {
            player_id: player.id.clone(),
            message: message.to_string(),
            avatar_id,
        });
    }

    fn broadcast(&self, message: &str, avatar_id: u64) {
        self.deliveries.lock().unwrap().push(Delivery::Broadcast {
            message: message.to_string(),
            avatar_id,
        });
    }
}

/// Population source with fixed counters that tracks reads
#[derive(Debug, Default)]
pub struct FixedPopulation {
    snapshot: PopulationSnapshot,
    reads: [AtomicUsize; 5],
}

impl FixedPopulation {
    pub fn new(snapshot: PopulationSnapshot) -> Self {
        Self {
            snapshot,
            reads: Default::default(),
        }
    }

    /// Reads per counter, in order count, slots, sleepers, joining, queued
    pub fn reads(&self) -> [usize; 5] {
        [0, 1, 2, 3, 4].map(|i| self.reads[i].load(Ordering::SeqCst))
    }

    fn read(&self, index: usize, value: usize) -> usize {
        self.reads[index].fetch_add(1, Ordering::SeqCst);
        value
    }
}

impl PopulationSource for FixedPopulation {
    fn active_players(&self) -> usize {
        self.read(0, self.snapshot.active_players)
    }

    fn max_slots(&self) -> usize {
        self.read(1, self.snapshot.max_slots)
    }

    fn sleeping_players(&self) -> usize {
        self.read(2, self.snapshot.sleeping_players)
    }

    fn joining_players(&self) -> usize {
        self.read(3, self.snapshot.joining_players)
    }

    fn queued_players(&self) -> usize {
        self.read(4, self.snapshot.queued_players)
    }
}
