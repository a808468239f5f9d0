//! Authorization middleware
//!
//! This module gates the population commands behind the host permission
//! registry and admin role.

use std::sync::Arc;
use tracing::debug;
use crate::config::{PluginConfig, PERMISSION_ADMIN, PERMISSION_USE};
use crate::models::ChatPlayer;
use crate::services::PermissionService;
use crate::utils::errors::{PopCommandError, Result};

/// Authorization middleware
#[derive(Clone)]
pub struct AuthMiddleware {
    permissions: Arc<dyn PermissionService>,
    use_permission_for_players: bool,
}

impl AuthMiddleware {
    /// Create a new AuthMiddleware instance
    pub fn new(permissions: Arc<dyn PermissionService>, config: &PluginConfig) -> Self {
        Self {
            permissions,
            use_permission_for_players: config.use_permission_for_players,
        }
    }

    /// Check if player holds a permission
    pub fn has_permission(&self, player: &ChatPlayer, permission: &str) -> bool {
        self.permissions.user_has_permission(&player.id, permission)
    }

    /// `/pop` is open to everyone unless the configuration requires
    /// `popcommand.use`
    pub fn check_player_auth(&self, player: &ChatPlayer) -> Result<()> {
        if self.use_permission_for_players && !self.has_permission(player, PERMISSION_USE) {
            return Err(PopCommandError::PermissionDenied(PERMISSION_USE.to_string()));
        }

        debug!(player_id = %player.id, "Player authorization successful");
        Ok(())
    }

    /// `/apop` requires the host admin role and `popcommand.admin`
    pub fn check_admin_auth(&self, player: &ChatPlayer) -> Result<()> {
        if !player.is_admin || !self.has_permission(player, PERMISSION_ADMIN) {
            return Err(PopCommandError::PermissionDenied(PERMISSION_ADMIN.to_string()));
        }

        debug!(player_id = %player.id, "Admin authorization successful");
        Ok(())
    }
}
