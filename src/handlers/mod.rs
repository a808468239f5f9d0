//! Chat handlers module
//!
//! This module contains the chat command handlers and the context they share.

pub mod commands;

// Re-export commonly used handler functions
pub use commands::*;

use std::sync::Arc;
use crate::config::PluginConfig;
use crate::i18n::MessageResolver;
use crate::middleware::AuthMiddleware;
use crate::models::ChatPlayer;
use crate::services::HostServices;

/// Read-only state every command handler needs
#[derive(Clone)]
pub struct CommandContext {
    pub config: Arc<PluginConfig>,
    pub resolver: MessageResolver,
    pub auth: AuthMiddleware,
    pub host: HostServices,
}

impl CommandContext {
    pub fn new(config: Arc<PluginConfig>, resolver: MessageResolver, host: HostServices) -> Self {
        let auth = AuthMiddleware::new(host.permissions.clone(), &config);
        Self {
            config,
            resolver,
            auth,
            host,
        }
    }

    /// Send a message to the invoking player with the configured avatar
    pub fn reply(&self, player: &ChatPlayer, message: &str) {
        self.host.chat.send_message(player, message, self.config.chat_avatar);
    }

    /// Send a message to every player with the configured avatar
    pub fn broadcast(&self, message: &str) {
        self.host.chat.broadcast(message, self.config.chat_avatar);
    }
}
