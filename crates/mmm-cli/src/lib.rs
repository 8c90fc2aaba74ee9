//! Shared library surface of the `mmm-prep` CLI.

pub mod config;
pub mod logging;
pub mod prepare;
