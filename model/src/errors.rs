//! Resting place for [DemoError] & friends

use std::fmt;


/// Everything that may go wrong while analysing a demo.\
/// All of them are fatal for the demo being analysed, but none should stop the analysis of other demos.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    /// The demo source couldn't be opened or read
    Io { source_name: String, description: String },
    /// One of the fixed headers didn't match
    Format { source_name: String, violation: FormatViolation },
    /// The stream ended in the middle of a frame
    IncompleteFrame { source_name: String, frame_number: u64, expected_bytes: usize, read_bytes: usize },
    /// A payload ended before all fields of its message type could be read
    Protocol { source_name: String, frame_number: u64, channel: u32, description: String },
    /// A message referred to a client number outside of `0..MAX_CLIENTS`
    Index { source_name: String, frame_number: u64, cn: i32 },
}

/// Which of the fixed headers was violated
#[derive(Debug, Clone, PartialEq)]
pub enum FormatViolation {
    /// The 10 bytes of compression framing
    CompressionSignature { observed: Vec<u8> },
    /// The 24 bytes at the start of the decompressed stream
    DemoHeader { observed: Vec<u8> },
}

impl DemoError {

    /// The name of the demo this error came from
    pub fn source_name(&self) -> &str {
        match self {
            DemoError::Io              { source_name, .. } |
            DemoError::Format          { source_name, .. } |
            DemoError::IncompleteFrame { source_name, .. } |
            DemoError::Protocol        { source_name, .. } |
            DemoError::Index           { source_name, .. } => source_name
        }
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Io { source_name, description } =>
                write!(f, "IO error on demo '{source_name}': {description}"),
            DemoError::Format { source_name, violation: FormatViolation::CompressionSignature { observed } } =>
                write!(f, "`FormatError` in demo '{source_name}': invalid compression header {observed:02X?}"),
            DemoError::Format { source_name, violation: FormatViolation::DemoHeader { observed } } =>
                write!(f, "`FormatError` in demo '{source_name}': invalid demo header {observed:02X?}"),
            DemoError::IncompleteFrame { source_name, frame_number, expected_bytes, read_bytes } =>
                write!(f, "`IncompleteFrameError` in demo '{source_name}' at frame #{frame_number}: expected {expected_bytes} bytes, but the stream ended after {read_bytes}"),
            DemoError::Protocol { source_name, frame_number, channel, description } =>
                write!(f, "`ProtocolError` in demo '{source_name}' at frame #{frame_number} (channel {channel}): {description}"),
            DemoError::Index { source_name, frame_number, cn } =>
                write!(f, "`IndexError` in demo '{source_name}' at frame #{frame_number}: client number {cn} is out of range"),
        }
    }
}

impl std::error::Error for DemoError {}
