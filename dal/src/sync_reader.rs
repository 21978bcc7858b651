//! Resting place for [DemoSyncReader]


use crate::{
    container::open_container,
    events_translation::translate_frame,
};
use model::{
    demo_events::{DemoFrameEvents, DemoStream},
    types::DemoResult,
};
use dal_api::{Config, DemoFrames};
use std::{
    io::Read,
    pin::Pin,
    sync::Arc,
    task::Poll,
    time::{SystemTime, UNIX_EPOCH},
};
use futures::{Stream, stream, StreamExt};
use log::trace;


/// [DemoFrames] implementation for reading a demo out of any synchronous `Read`er
pub struct DemoSyncReader<Reader: Read> {
    config: Arc<Config>,
    source_name: String,
    recorded_at: i64,
    reader: Reader,
}

impl<Reader: Read> DemoSyncReader<Reader> {

    pub fn new(config: Arc<Config>, source_name: &str, recorded_at: i64, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            source_name: source_name.into(),
            recorded_at,
            reader,
        })
    }

}

impl<Reader: Read + 'static> DemoFrames for DemoSyncReader<Reader> {

    fn demo_stream(self: Box<Self>) -> DemoResult<DemoStream> {
        let Self { config, source_name, recorded_at, reader } = *self;
        let protocol = config.protocol_version;
        let mut container_frames = open_container(&source_name, reader, protocol)?;

        let end_of_stream = || Poll::Ready(None);

        let frames_source_name = source_name.clone();
        let mut failed = false;
        let stream = stream::poll_fn(move |_| {
            if failed {
                return end_of_stream()
            }
            container_frames.next()
                .map_or_else(end_of_stream,
                             |raw_frame_result| {
                                 let frame_events = raw_frame_result
                                     .and_then(|raw_frame| translate_frame(&frames_source_name, protocol, raw_frame));
                                 failed = frame_events.is_err();
                                 Poll::Ready(Some(frame_events))
                             })
        });
        let frames: Pin<Box<dyn Stream<Item=DemoResult<DemoFrameEvents>>>> = if config.debug {
            Box::pin(stream
                .inspect(|yielded_frame| trace!("{yielded_frame:?}")))
        } else {
            Box::pin(stream)
        };
        Ok(DemoStream {
            source_name,
            recorded_at,
            frames,
        })
    }

}

/// Converts `time` to seconds since the Unix epoch -- times before it are clamped to 0
pub(crate) fn unix_seconds(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() as i64)
}
