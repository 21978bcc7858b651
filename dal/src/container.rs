//! The demo container: a gzip-framed deflate stream holding a fixed header followed by
//! timestamped, channel tagged & length prefixed frames.
//!
//! Everything here is lazy: [open_container()] only reads & validates the headers, then
//! [ContainerFrames] reads one frame at a time as it is iterated.

use std::io::{self, Read};
use flate2::read::DeflateDecoder;
use cube2_demo::protocol::{ProtocolVersion, COMPRESSION_SIGNATURE, DEMO_HEADER_LEN, FRAME_HEADER_LEN};
use model::{
    errors::{DemoError, FormatViolation},
    types::DemoResult,
};


/// A frame as found in the container, before any payload decoding
#[derive(Debug, PartialEq)]
pub struct RawFrame {
    /// Position of the frame in the demo, starting at 1
    pub frame_number: u64,
    pub timestamp_ms: u32,
    pub channel: u32,
    pub payload: Vec<u8>,
}

/// Checks the compression signature of `reader`, then the demo header of the decompressed stream,
/// returning an `Iterator` over the frames that follow
pub fn open_container<Reader: Read>(source_name: &str, mut reader: Reader, protocol: ProtocolVersion) -> DemoResult<ContainerFrames<DeflateDecoder<Reader>>> {
    let io_error = |err: io::Error| DemoError::Io { source_name: source_name.to_string(), description: err.to_string() };

    let mut signature = [0; COMPRESSION_SIGNATURE.len()];
    let read = read_fully(&mut reader, &mut signature).map_err(io_error)?;
    if signature[..read] != COMPRESSION_SIGNATURE {
        return Err(DemoError::Format { source_name: source_name.to_string(), violation: FormatViolation::CompressionSignature { observed: signature[..read].to_vec() } })
    }

    let mut decoder = DeflateDecoder::new(reader);
    let mut header = [0; DEMO_HEADER_LEN];
    let read = read_fully(&mut decoder, &mut header).map_err(io_error)?;
    if header[..read] != protocol.demo_header() {
        return Err(DemoError::Format { source_name: source_name.to_string(), violation: FormatViolation::DemoHeader { observed: header[..read].to_vec() } })
    }

    Ok(ContainerFrames {
        source_name: source_name.to_string(),
        reader: decoder,
        frame_number: 0,
        finished: false,
    })
}

/// `Iterator` over the frames of an opened container.\
/// Ends at the end of the stream or right after yielding an error.
pub struct ContainerFrames<Reader: Read> {
    source_name: String,
    reader: Reader,
    frame_number: u64,
    finished: bool,
}

impl<Reader: Read> ContainerFrames<Reader> {

    fn read_frame(&mut self) -> DemoResult<Option<RawFrame>> {
        self.frame_number += 1;

        let mut header = [0; FRAME_HEADER_LEN];
        match read_fully(&mut self.reader, &mut header).map_err(|err| self.io_error(err))? {
            0 => return Ok(None),
            FRAME_HEADER_LEN => (),
            read => return Err(self.incomplete_frame_error(FRAME_HEADER_LEN, read)),
        }
        let timestamp_ms = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let channel = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        let length = u32::from_le_bytes([header[8], header[9], header[10], header[11]]) as usize;

        // don't trust `length` for allocations: corrupted demos might declare gigabytes
        let mut payload = Vec::new();
        let read_result = (&mut self.reader).take(length as u64).read_to_end(&mut payload);
        read_result.map_err(|err| self.io_error(err))?;
        if payload.len() < length {
            return Err(self.incomplete_frame_error(FRAME_HEADER_LEN + length, FRAME_HEADER_LEN + payload.len()))
        }

        Ok(Some(RawFrame {
            frame_number: self.frame_number,
            timestamp_ms,
            channel,
            payload,
        }))
    }

    fn io_error(&self, err: io::Error) -> DemoError {
        DemoError::Io { source_name: self.source_name.clone(), description: err.to_string() }
    }

    fn incomplete_frame_error(&self, expected_bytes: usize, read_bytes: usize) -> DemoError {
        DemoError::IncompleteFrame { source_name: self.source_name.clone(), frame_number: self.frame_number, expected_bytes, read_bytes }
    }
}

impl<Reader: Read> Iterator for ContainerFrames<Reader> {
    type Item = DemoResult<RawFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None
        }
        let frame_result = self.read_frame().transpose();
        self.finished = !matches!(frame_result, Some(Ok(_)));
        frame_result
    }
}

/// Fills `buffer` unless the end of the stream is reached first, returning how many bytes were read
fn read_fully(reader: &mut impl Read, buffer: &mut [u8]) -> io::Result<usize> {
    let mut read = 0;
    while read < buffer.len() {
        match reader.read(&mut buffer[read..]) {
            Ok(0) => break,
            Ok(n) => read += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(read)
}
