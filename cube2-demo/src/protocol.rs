//! Container signatures & the protocol versions this library understands

/// First 10 bytes of every demo file: a gzip member header (deflate, no flags, no mtime, unix OS).
/// The rest of the file is a raw deflate stream.
pub const COMPRESSION_SIGNATURE: [u8; 10] = [0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03];

/// Magic at the start of the decompressed stream
pub const DEMO_MAGIC: &[u8; 16] = b"SAUERBRATEN_DEMO";

/// The demo file format version following [DEMO_MAGIC]
pub const DEMO_FORMAT_VERSION: i32 = 1;

/// Length of the header at the start of the decompressed stream: magic + format version + protocol
pub const DEMO_HEADER_LEN: usize = 24;

/// Length of the fixed part of each frame: timestamp + channel + payload length
pub const FRAME_HEADER_LEN: usize = 12;

/// Channel carrying position updates
pub const POSITIONS_CHANNEL: u32 = 0;
/// Channel carrying game messages
pub const MESSAGES_CHANNEL: u32 = 1;

/// Game protocol revisions a demo might have been recorded with.\
/// Besides the header, they differ in the number of per-client integers of a `Resume` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtocolVersion {
    Protocol259,
    #[default]
    Protocol260,
}

impl ProtocolVersion {

    /// The protocol number, as written in the demo header
    pub fn number(&self) -> i32 {
        match self {
            ProtocolVersion::Protocol259 => 259,
            ProtocolVersion::Protocol260 => 260,
        }
    }

    /// The exact 24 bytes a demo of this protocol starts with, after decompression
    pub fn demo_header(&self) -> [u8; DEMO_HEADER_LEN] {
        let mut header = [0; DEMO_HEADER_LEN];
        header[..16].copy_from_slice(DEMO_MAGIC);
        header[16..20].copy_from_slice(&DEMO_FORMAT_VERSION.to_le_bytes());
        header[20..24].copy_from_slice(&self.number().to_le_bytes());
        header
    }

    /// How many integers follow `state` & `frags` for each client in a `Resume` message
    pub fn resume_trailing_ints(&self) -> usize {
        match self {
            ProtocolVersion::Protocol259 => 14,
            ProtocolVersion::Protocol260 => 15,
        }
    }
}


/// Unit tests for the [protocol](super) module
#[cfg(test)]
mod tests {
    use super::*;

    /// The headers must match, byte by byte, what the engine writes
    #[test]
    fn demo_headers() {
        assert_eq!(ProtocolVersion::Protocol260.demo_header(),
                   [83, 65, 85, 69, 82, 66, 82, 65, 84, 69, 78, 95, 68, 69, 77, 79, 1, 0, 0, 0, 4, 1, 0, 0]);
        assert_eq!(ProtocolVersion::Protocol259.demo_header(),
                   [83, 65, 85, 69, 82, 66, 82, 65, 84, 69, 78, 95, 68, 69, 77, 79, 1, 0, 0, 0, 3, 1, 0, 0]);
    }

    #[test]
    fn defaults_to_the_newest_protocol() {
        assert_eq!(ProtocolVersion::default(), ProtocolVersion::Protocol260);
        assert_eq!(ProtocolVersion::default().resume_trailing_ints(), 15);
    }
}
