//! Resting place for [Packet], the bounds-checked reader of the engine's wire primitives

use std::fmt;
use crate::text_table::cube2_to_char;


/// Tag announcing that the integer continues in the next 2 bytes (little-endian `i16`)
const INT16_TAG: i8 = -128;
/// Tag announcing that the integer continues in the next 4 bytes (little-endian `i32`)
const INT32_TAG: i8 = -127;

/// Read cursor over one frame payload.\
/// Every getter advances the cursor & fails with [DecodingError] instead of reading past the end.
#[derive(Debug)]
pub struct Packet<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Packet<'a> {

    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
        }
    }

    /// Offset of the next byte to be read
    pub fn position(&self) -> usize {
        self.position
    }

    /// How many bytes are still unread
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Jumps the cursor to the end, discarding whatever was left
    pub fn skip_to_end(&mut self) {
        self.position = self.data.len();
    }

    /// Returns the next `length` raw bytes
    pub fn get_bytes(&mut self, length: usize) -> Result<&'a [u8], DecodingError> {
        if length > self.remaining() {
            return Err(DecodingError::UnexpectedEndOfPayload { position: self.position, wanted: length, length: self.data.len() })
        }
        let bytes = &self.data[self.position..self.position+length];
        self.position += length;
        Ok(bytes)
    }

    /// Returns the next raw byte
    pub fn get_byte(&mut self) -> Result<u8, DecodingError> {
        self.get_bytes(1)
            .map(|bytes| bytes[0])
    }

    /// Reads one of the engine's compact signed integers:
    ///   - a single signed byte for values in -126..=127;
    ///   - the tag `-128` followed by a little-endian `i16`;
    ///   - the tag `-127` followed by a little-endian `i32`.
    pub fn get_int(&mut self) -> Result<i32, DecodingError> {
        match self.get_byte()? as i8 {
            INT16_TAG => self.get_array::<2>().map(|bytes| i16::from_le_bytes(bytes) as i32),
            INT32_TAG => self.get_array::<4>().map(i32::from_le_bytes),
            value => Ok(value as i32),
        }
    }

    /// Reads a NUL terminated string, translating each byte through the [crate::text_table].\
    /// The end of the payload counts as a terminator, so this never fails.
    pub fn get_string(&mut self) -> String {
        let unread = &self.data[self.position..];
        let (text, consumed) = match unread.iter().position(|&byte| byte == 0) {
            Some(nul_index) => (&unread[..nul_index], nul_index + 1),
            None => (unread, unread.len()),
        };
        self.position += consumed;
        text.iter()
            .map(|&code| cube2_to_char(code))
            .collect()
    }

    fn get_array<const N: usize>(&mut self) -> Result<[u8; N], DecodingError> {
        let mut array = [0; N];
        array.copy_from_slice(self.get_bytes(N)?);
        Ok(array)
    }

}

/// Problems found while decoding a payload. Any of them means the message type table and
/// the data disagree, so the remaining contents of the payload can't be trusted.
#[derive(Debug, PartialEq)]
pub enum DecodingError {
    UnexpectedEndOfPayload { position: usize, wanted: usize, length: usize },
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingError::UnexpectedEndOfPayload { position, wanted, length } =>
                write!(f, "attempted to read {wanted} byte(s) at offset {position} of a {length} bytes payload"),
        }
    }
}

impl std::error::Error for DecodingError {}


/// Unit tests for the [packet](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::PayloadBuilder;


    /// Values from each representation are read back exactly, consuming 1, 3 or 5 bytes
    #[test]
    fn integers_of_every_width() {
        let cases = [
            (0, 1), (1, 1), (-1, 1), (127, 1), (-126, 1),
            (-127, 3), (-128, 3), (128, 3), (1000, 3), (-32768, 3), (32767, 3),
            (32768, 5), (-32769, 5), (i32::MAX, 5), (i32::MIN, 5),
        ];
        for (value, expected_width) in cases {
            let buffer = PayloadBuilder::new().int(value).build();
            assert_eq!(buffer.len(), expected_width, "Unexpected encoded width for {value}");
            let mut packet = Packet::new(&buffer);
            assert_eq!(packet.get_int(), Ok(value), "Integer {value} wasn't read back");
            assert_eq!(packet.remaining(), 0, "Integer {value} left unread bytes behind");
        }
    }

    /// The 2-byte form is sign-extended
    #[test]
    fn negative_int16() {
        let mut packet = Packet::new(&[0x80, 0x00, 0x80]);
        assert_eq!(packet.get_int(), Ok(-32768));
    }

    /// A tag promising more bytes than available is an error, not a truncated value
    #[test]
    fn truncated_ints() {
        assert_eq!(Packet::new(&[0x80, 0x01]).get_int(),
                   Err(DecodingError::UnexpectedEndOfPayload { position: 1, wanted: 2, length: 2 }));
        assert_eq!(Packet::new(&[0x81, 0x01, 0x02, 0x03]).get_int(),
                   Err(DecodingError::UnexpectedEndOfPayload { position: 1, wanted: 4, length: 4 }));
        assert_eq!(Packet::new(&[]).get_int(),
                   Err(DecodingError::UnexpectedEndOfPayload { position: 0, wanted: 1, length: 0 }));
    }

    /// Strings stop at the first NUL, which is consumed
    #[test]
    fn nul_terminated_strings() {
        let mut packet = Packet::new(b"Bob\0good\0\0x");
        assert_eq!(packet.get_string(), "Bob");
        assert_eq!(packet.position(), 4);
        assert_eq!(packet.get_string(), "good");
        assert_eq!(packet.get_string(), "");
        assert_eq!(packet.position(), 10);
        assert_eq!(packet.remaining(), 1);
    }

    /// The end of the payload terminates an unterminated string
    #[test]
    fn unterminated_string() {
        let mut packet = Packet::new(b"unfinished");
        assert_eq!(packet.get_string(), "unfinished");
        assert_eq!(packet.remaining(), 0);
        assert_eq!(packet.get_string(), "", "Reading from an exhausted packet should yield an empty string");
        assert_eq!(packet.position(), 10);
    }

    /// Bytes are translated through the text table
    #[test]
    fn translated_strings() {
        let mut packet = Packet::new(&[b'Z', 1, 127, 0]);
        assert_eq!(packet.get_string(), "ZÀÜ");
    }

    #[test]
    fn raw_bytes() {
        let mut packet = Packet::new(&[1, 2, 3, 4]);
        assert_eq!(packet.get_byte(), Ok(1));
        assert_eq!(packet.get_bytes(2), Ok(&[2_u8, 3][..]));
        assert!(packet.get_bytes(2).is_err(), "Reading past the end must fail");
        assert_eq!(packet.position(), 3, "A failed read must not move the cursor");
        packet.skip_to_end();
        assert_eq!(packet.remaining(), 0);
    }
}
