//! Chat transport provided by the host

use std::io::Write;
use std::sync::Mutex;
use crate::models::ChatPlayer;

/// Delivers chat messages to players
pub trait ChatTransport: Send + Sync {
    /// Send a message to one player
    fn send_message(&self, player: &ChatPlayer, message: &str, avatar_id: u64);

    /// Send a message to every connected player
    fn broadcast(&self, message: &str, avatar_id: u64);
}

/// Writes chat lines to any writer, one line per message
pub struct ConsoleChat<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleChat<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    fn write_line(&self, line: String) {
        match self.out.lock() {
            Ok(mut out) => {
                if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
                    tracing::error!(error = %e, "Failed to write chat line");
                }
            }
            Err(_) => tracing::error!(line = %line, "Chat writer lock poisoned, dropping line"),
        }
    }

    /// Give back the writer
    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }
}

impl ConsoleChat<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ChatTransport for ConsoleChat<W> {
    fn send_message(&self, player: &ChatPlayer, message: &str, avatar_id: u64) {
        self.write_line(format!("[to {} | avatar {}] {}", player.display_name, avatar_id, message));
    }

    fn broadcast(&self, message: &str, avatar_id: u64) {
        self.write_line(format!("[broadcast | avatar {}] {}", avatar_id, message));
    }
}
