//! CLI command implementations

pub mod completions;
pub mod config;
pub mod graph;
pub mod search;
pub mod show;
pub mod stats;
