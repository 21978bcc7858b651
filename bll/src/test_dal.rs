//! Mock DAL for tests: demos made out of already translated frames

use dal_api::DemoFrames;
use model::{
    demo_events::{DemoEvents, DemoFrameEvents, DemoStream},
    errors::DemoError,
    types::DemoResult,
};
use futures::stream;


/// Recording time of all mock demos
pub const RECORDED_AT: i64 = 1_700_000_000;

/// Yields the given frames -- or fails at opening, if `opening_error` is set
pub struct TestDAL {
    source_name: String,
    frames: Vec<DemoResult<DemoFrameEvents>>,
    opening_error: Option<DemoError>,
}

impl TestDAL {

    /// Creates a new mock demo yielding each set of `events` as a frame, at the given timestamps
    pub fn new(source_name: &str, frames: Vec<(u32, Vec<DemoEvents>)>) -> Box<Self> {
        let frames = frames.into_iter()
            .enumerate()
            .map(|(index, (timestamp_ms, events))| Ok(DemoFrameEvents { frame_number: index as u64 + 1, timestamp_ms, events }))
            .collect();
        Box::new(Self { source_name: source_name.to_string(), frames, opening_error: None })
    }

    /// Appends `error` after the frames
    pub fn failing_with(mut self: Box<Self>, error: DemoError) -> Box<Self> {
        self.frames.push(Err(error));
        self
    }

    /// A mock demo that can't even be opened
    pub fn unopenable(source_name: &str, error: DemoError) -> Box<Self> {
        Box::new(Self { source_name: source_name.to_string(), frames: vec![], opening_error: Some(error) })
    }
}

impl DemoFrames for TestDAL {
    fn demo_stream(self: Box<Self>) -> DemoResult<DemoStream> {
        if let Some(error) = self.opening_error {
            return Err(error)
        }
        Ok(DemoStream {
            source_name: self.source_name,
            recorded_at: RECORDED_AT,
            frames: Box::pin(stream::iter(self.frames)),
        })
    }
}
