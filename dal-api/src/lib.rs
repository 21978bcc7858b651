//! Contract of the Data Access Layer: where demos come from

mod config;
pub use config::*;

use model::{
    demo_events::DemoStream,
    types::DemoResult,
};


/// Source of a single demo recording
pub trait DemoFrames {

    /// Consumes this object, validating the demo headers & returning a [DemoStream] which yields its frames' events
    fn demo_stream(self: Box<Self>) -> DemoResult<DemoStream>;
}
