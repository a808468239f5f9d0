//! Services module
//!
//! Host-provided capabilities the plugin depends on, expressed as traits so
//! the plugin never reaches for global state, plus in-memory implementations
//! used by the console host and tests.

pub mod chat;
pub mod permission;
pub mod population;

// Re-export commonly used services
pub use chat::{ChatTransport, ConsoleChat};
pub use permission::{InMemoryPermissions, PermissionService};
pub use population::{collect_counts, PopulationSource};

use std::sync::Arc;

/// Everything the host hands to the plugin at construction time
#[derive(Clone)]
pub struct HostServices {
    pub population: Arc<dyn PopulationSource>,
    pub permissions: Arc<dyn PermissionService>,
    pub chat: Arc<dyn ChatTransport>,
}

impl HostServices {
    pub fn new(
        population: Arc<dyn PopulationSource>,
        permissions: Arc<dyn PermissionService>,
        chat: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            population,
            permissions,
            chat,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
