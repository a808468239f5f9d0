//! Integration tests module
//!
//! This module contains all integration tests for the PopCommand plugin,
//! organized by handler and by end-to-end scenario.

pub mod scenarios;
