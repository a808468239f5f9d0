//! Console chat session
//!
//! Feeds `<player_id> <text>` lines to the plugin the way a game server feeds
//! player chat. A failing command is logged and the session keeps serving.

use std::collections::HashSet;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, warn};
use crate::models::ChatPlayer;
use crate::plugin::PopCommandPlugin;
use crate::utils::errors::Result;

/// Counters for one console session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub served: usize,
    pub failed: usize,
    pub ignored: usize,
}

/// Reads chat lines for a plugin
pub struct ConsoleSession<'a> {
    plugin: &'a PopCommandPlugin,
    admins: HashSet<String>,
}

impl<'a> ConsoleSession<'a> {
    pub fn new(plugin: &'a PopCommandPlugin, admins: &[String]) -> Self {
        Self {
            plugin,
            admins: admins.iter().cloned().collect(),
        }
    }

    /// Serve every line until the reader is exhausted. Only read errors end
    /// the session.
    pub async fn serve<R: AsyncBufRead + Unpin>(&self, reader: R) -> Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let Some((player_id, text)) = line.trim().split_once(char::is_whitespace) else {
                warn!(line = %line, "Expected '<player_id> <text>'");
                stats.ignored += 1;
                continue;
            };

            let player = self.player(player_id);
            match self.plugin.handle_chat(&player, text.trim()) {
                Ok(true) => stats.served += 1,
                Ok(false) => {
                    warn!(player_id = %player.id, text = %text, "Not a PopCommand command");
                    stats.ignored += 1;
                }
                Err(e) => {
                    error!(player_id = %player.id, text = %text, error = %e, "Command failed");
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }

    fn player(&self, player_id: &str) -> ChatPlayer {
        if self.admins.contains(player_id) {
            ChatPlayer::admin(player_id, player_id)
        } else {
            ChatPlayer::new(player_id, player_id)
        }
    }
}
