//! Business entities shared by all layers

pub mod types;
pub mod errors;
pub mod game;
pub mod demo_events;
pub mod report;
