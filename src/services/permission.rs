//! Permission registry provided by the host

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use tracing::warn;

/// Host permission registry
pub trait PermissionService: Send + Sync {
    /// Declare a permission owned by the plugin
    fn register_permission(&self, permission: &str);

    /// Whether a user has been granted a permission
    fn user_has_permission(&self, user_id: &str, permission: &str) -> bool;
}

/// Permission registry held in memory
#[derive(Debug, Default)]
pub struct InMemoryPermissions {
    registered: RwLock<HashSet<String>>,
    grants: RwLock<HashMap<String, HashSet<String>>>,
}

impl InMemoryPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `user id -> permissions` grants
    pub fn with_grants(grants: &HashMap<String, Vec<String>>) -> Self {
        let registry = Self::new();
        for (user_id, permissions) in grants {
            for permission in permissions {
                registry.grant(user_id, permission);
            }
        }
        registry
    }

    pub fn grant(&self, user_id: &str, permission: &str) {
        if let Ok(mut grants) = self.grants.write() {
            grants
                .entry(user_id.to_string())
                .or_default()
                .insert(permission.to_string());
        }
    }

    pub fn revoke(&self, user_id: &str, permission: &str) -> bool {
        self.grants
            .write()
            .map(|mut grants| {
                grants
                    .get_mut(user_id)
                    .is_some_and(|set| set.remove(permission))
            })
            .unwrap_or(false)
    }

    pub fn is_registered(&self, permission: &str) -> bool {
        self.registered
            .read()
            .map(|registered| registered.contains(permission))
            .unwrap_or(false)
    }
}

impl PermissionService for InMemoryPermissions {
    fn register_permission(&self, permission: &str) {
        if let Ok(mut registered) = self.registered.write() {
            registered.insert(permission.to_string());
        }
    }

    fn user_has_permission(&self, user_id: &str, permission: &str) -> bool {
        if !self.is_registered(permission) {
            warn!(permission = permission, "Checking a permission that was never registered");
        }

        self.grants
            .read()
            .map(|grants| grants.get(user_id).is_some_and(|set| set.contains(permission)))
            .unwrap_or(false)
    }
}
