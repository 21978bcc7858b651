//! Resting place for [DemoStdinReader]


use crate::sync_reader::{DemoSyncReader, unix_seconds};
use model::{
    demo_events::DemoStream,
    types::DemoResult,
};
use dal_api::{Config, DemoFrames};
use std::{
    io::BufReader,
    sync::Arc,
    time::SystemTime,
};


/// The name demos read from the standard input are reported with
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// [DemoFrames] implementation for reading a demo piped into the standard input
pub struct DemoStdinReader {
    config: Arc<Config>,
}

impl DemoStdinReader {

    pub fn new(config: Arc<Config>) -> Box<Self> {
        Box::new(Self {
            config,
        })
    }

}

impl DemoFrames for DemoStdinReader {

    /// As there is no file to look at, the demo is considered to have been recorded now
    fn demo_stream(self: Box<Self>) -> DemoResult<DemoStream> {
        let reader = BufReader::with_capacity(self.config.buffer_size, std::io::stdin());
        DemoSyncReader::new(self.config, STDIN_SOURCE_NAME, unix_seconds(SystemTime::now()), reader)
            .demo_stream()
    }

}
