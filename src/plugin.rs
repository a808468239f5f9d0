//! Plugin lifecycle
//!
//! Wires configuration, translations and host services together and routes
//! chat text to the command handlers.

use std::sync::Arc;
use tracing::{info, debug};
use crate::config::{PluginConfig, PERMISSION_ADMIN, PERMISSION_USE};
use crate::handlers::{self, Command, CommandContext};
use crate::i18n::{I18n, MessageResolver};
use crate::models::ChatPlayer;
use crate::services::HostServices;
use crate::utils::errors::{PopCommandError, Result};
use crate::utils::logging;

/// The population command plugin
#[derive(Clone)]
pub struct PopCommandPlugin {
    ctx: CommandContext,
}

impl PopCommandPlugin {
    pub const NAME: &'static str = "PopCommand";
    pub const DESCRIPTION: &'static str = "Displays the population informations of your server";

    pub fn new(config: PluginConfig, i18n: I18n, host: HostServices) -> Self {
        let resolver = MessageResolver::new(Arc::new(i18n));
        Self {
            ctx: CommandContext::new(Arc::new(config), resolver, host),
        }
    }

    /// Register the plugin permissions with the host
    pub fn init(&self) {
        for permission in [PERMISSION_USE, PERMISSION_ADMIN] {
            self.ctx.host.permissions.register_permission(permission);
            logging::log_permission_registered(permission);
        }
        info!(plugin = Self::NAME, version = crate::VERSION, "Plugin initialized");
    }

    pub fn unload(&self) {
        info!(plugin = Self::NAME, "Plugin unloaded");
    }

    /// Handle a line of chat. Returns `Ok(false)` when the text is not one of
    /// the plugin's commands.
    pub fn handle_chat(&self, player: &ChatPlayer, text: &str) -> Result<bool> {
        match text.parse::<Command>() {
            Ok(cmd) => {
                self.handle_command(player, cmd)?;
                Ok(true)
            }
            Err(PopCommandError::UnknownCommand(text)) => {
                debug!(player_id = %player.id, text = %text, "Ignoring chat text");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub fn handle_command(&self, player: &ChatPlayer, cmd: Command) -> Result<()> {
        handlers::handle_command(&self.ctx, player, cmd)
    }

    pub fn config(&self) -> &PluginConfig {
        &self.ctx.config
    }

    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }
}
