//! Test data helpers
//!
//! Players, counters and configurations shared by the integration tests.

use PopCommand::config::{DisplayOptions, PluginConfig};
use PopCommand::models::{ChatPlayer, PopulationSnapshot};

pub const TEST_AVATAR: u64 = 76561198000000000;

/// 42 online out of 100 slots, 7 sleeping, 3 joining, 12 queued
pub fn test_population() -> PopulationSnapshot {
    PopulationSnapshot {
        active_players: 42,
        max_slots: 100,
        sleeping_players: 7,
        joining_players: 3,
        queued_players: 12,
    }
}

pub fn test_player() -> ChatPlayer {
    ChatPlayer::new("76561198000000001", "Alice")
}

pub fn test_admin() -> ChatPlayer {
    ChatPlayer::admin("76561198000000002", "Bob")
}

pub fn display_options(flags: [bool; 5]) -> DisplayOptions {
    DisplayOptions {
        show_player_count: flags[0],
        show_server_slots: flags[1],
        show_sleepers: flags[2],
        show_joining_players: flags[3],
        show_players_in_queue: flags[4],
    }
}

pub fn test_config() -> PluginConfig {
    PluginConfig {
        chat_avatar: TEST_AVATAR,
        ..PluginConfig::default()
    }
}
