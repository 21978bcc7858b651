//! Data Access Layer: opens demo recordings & turns them into `Stream`s of [model::demo_events::DemoEvents]

pub mod factory;
pub mod container;
pub mod sync_reader;
pub mod sync_file_reader;
pub mod stdin_reader;

mod events_translation;
#[cfg(test)]
mod test_demos;
