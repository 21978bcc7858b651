//! Wire-level library for Cube 2: Sauerbraten demo recordings.
//!
//! Knows nothing about files or games being analysed: it only turns already
//! decompressed frame payloads into typed messages.
//!   - [packet] is the bounds-checked cursor reading the engine's primitives;
//!   - [text_table] maps the engine's single-byte text encoding to Unicode;
//!   - [protocol] holds the container signatures & the supported protocol versions;
//!   - [message_types] & [messages] hold the message tags & their decoders.

pub mod packet;
pub mod text_table;
pub mod protocol;
pub mod message_types;
pub mod messages;
#[cfg(any(test, feature = "test-utils"))]
pub mod encoding;

pub use packet::{Packet, DecodingError};
pub use protocol::ProtocolVersion;
pub use messages::{GameMessage, WelcomeMessage, ResumedClient, PositionUpdate, decode_game_payload, decode_position_payload};
