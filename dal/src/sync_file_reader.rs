//! Resting place for [DemoFileSyncReader]


use crate::sync_reader::{DemoSyncReader, unix_seconds};
use model::{
    demo_events::DemoStream,
    errors::DemoError,
    types::DemoResult,
};
use dal_api::{Config, DemoFrames};
use std::{
    fs::File,
    io::BufReader,
    sync::Arc,
    time::SystemTime,
};
use log::warn;


/// [DemoFrames] implementation for reading a demo from a file
pub struct DemoFileSyncReader {
    config: Arc<Config>,
    demo_file_path: String,
}

impl DemoFileSyncReader {

    pub fn new(config: Arc<Config>, demo_file_path: &str) -> Box<Self> {
        Box::new(Self {
            config,
            demo_file_path: demo_file_path.into(),
        })
    }

}

impl DemoFrames for DemoFileSyncReader {

    /// The demo's recording time is taken to be the file's modification time
    fn demo_stream(self: Box<Self>) -> DemoResult<DemoStream> {
        let file = File::open(&self.demo_file_path)
            .map_err(|err| DemoError::Io { source_name: self.demo_file_path.clone(), description: format!("Couldn't open demo file '{}' for reading: {err}", self.demo_file_path) })?;
        let modified = file.metadata()
            .and_then(|metadata| metadata.modified())
            .unwrap_or_else(|err| {
                warn!("Couldn't retrieve the modification time of demo file '{}' -- using the current time instead: {err}", self.demo_file_path);
                SystemTime::now()
            });
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        DemoSyncReader::new(self.config, &self.demo_file_path, unix_seconds(modified), reader)
            .demo_stream()
    }

}
