//! Writer counterpart of [crate::packet], only available to tests (or with the `test-utils` feature):
//! builds payloads to feed the decoders with.

use crate::message_types::MessageType;


/// Tag announcing that the integer continues in the next 2 bytes (little-endian `i16`)
const INT16_TAG: u8 = 0x80;
/// Tag announcing that the integer continues in the next 4 bytes (little-endian `i32`)
const INT32_TAG: u8 = 0x81;

/// Fluent builder of frame payloads
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    bytes: Vec<u8>,
}

impl PayloadBuilder {

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` using the smallest of the 3 integer representations
    pub fn int(mut self, value: i32) -> Self {
        if (-126..=127).contains(&value) {
            self.bytes.push(value as i8 as u8);
        } else if (i16::MIN as i32..=i16::MAX as i32).contains(&value) {
            self.bytes.push(INT16_TAG);
            self.bytes.extend_from_slice(&(value as i16).to_le_bytes());
        } else {
            self.bytes.push(INT32_TAG);
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
        self
    }

    pub fn ints(self, values: &[i32]) -> Self {
        values.iter()
            .fold(self, |builder, &value| builder.int(value))
    }

    pub fn message_type(self, message_type: MessageType) -> Self {
        self.int(message_type.code())
    }

    /// Appends `text` followed by a NUL. Only ASCII survives the trip unchanged.
    pub fn string(mut self, text: &str) -> Self {
        self.bytes.extend_from_slice(text.as_bytes());
        self.bytes.push(0);
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
