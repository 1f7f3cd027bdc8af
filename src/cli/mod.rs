//! CLI command handlers

pub mod commands;

pub use commands::{sift, MATCH_NEEDLE};
