//! Middleware module
//!
//! This module contains the permission gate run before each command

pub mod auth;

// Re-export commonly used middleware
pub use auth::AuthMiddleware;
