//! Builds in-memory demo files for tests

use std::io::Write;
use flate2::{write::DeflateEncoder, Compression};
use cube2_demo::protocol::{ProtocolVersion, COMPRESSION_SIGNATURE};


/// `(timestamp_ms, channel, payload)`
pub type TestFrame = (u32, u32, Vec<u8>);

/// A well formed demo of the given `protocol` containing `frames`
pub fn demo_bytes(protocol: ProtocolVersion, frames: &[TestFrame]) -> Vec<u8> {
    compress_demo(&protocol.demo_header(), frames)
}

/// Compresses `prefix` followed by `frames` into the container format -- `prefix` is expected to be
/// the demo header, but anything goes, allowing tests to produce broken demos
pub fn compress_demo(prefix: &[u8], frames: &[TestFrame]) -> Vec<u8> {
    let mut decompressed = prefix.to_vec();
    for (timestamp_ms, channel, payload) in frames {
        decompressed.extend_from_slice(&timestamp_ms.to_le_bytes());
        decompressed.extend_from_slice(&channel.to_le_bytes());
        decompressed.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        decompressed.extend_from_slice(payload);
    }
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&decompressed).expect("Couldn't compress the test demo");
    let mut bytes = COMPRESSION_SIGNATURE.to_vec();
    bytes.extend(encoder.finish().expect("Couldn't finish compressing the test demo"));
    // the gzip trailer (crc & size) is not verified by the readers
    bytes.extend_from_slice(&[0; 8]);
    bytes
}
