//! Integration tests for the chat commands

pub mod admin_test;
pub mod pop_test;
