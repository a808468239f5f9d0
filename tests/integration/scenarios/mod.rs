//! End-to-end scenarios

pub mod malformed_template_test;
