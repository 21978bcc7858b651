//! Utilities shared by all crates of the workspace

pub mod types;
