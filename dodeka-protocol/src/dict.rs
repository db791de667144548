//! Tuple dictionary encoding and decoding for the companion link.
//!
//! Wire format, little-endian:
//! - COUNT (1 byte): number of tuples
//! - per tuple:
//!   - KEY (4 bytes)
//!   - TYPE (1 byte): value type identifier
//!   - LENGTH (2 bytes): value length in bytes
//!   - VALUE (LENGTH bytes)
//!
//! Value types: 1 = UTF-8 string, 2 = unsigned 8-bit, 3 = signed 32-bit.

use heapless::{String, Vec};

/// Maximum tuples per dictionary
pub const MAX_TUPLES: usize = 8;

/// Maximum string value length in bytes
pub const MAX_CSTRING_LEN: usize = 15;

/// Value type identifier for UTF-8 strings
pub const TYPE_CSTRING: u8 = 1;

/// Value type identifier for unsigned 8-bit integers
pub const TYPE_UINT8: u8 = 2;

/// Value type identifier for signed 32-bit integers
pub const TYPE_INT32: u8 = 3;

/// Per-tuple header size (KEY + TYPE + LENGTH)
const TUPLE_HEADER_LEN: usize = 4 + 1 + 2;

/// Errors that can occur during dictionary parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Dictionary already holds `MAX_TUPLES` entries
    TooManyTuples,
    /// Encode buffer too small for the dictionary
    BufferTooSmall,
    /// Input ended mid-tuple
    Truncated,
    /// Value type identifier not recognized
    UnknownType,
    /// Value length does not match its type
    BadLength,
    /// String value exceeds `MAX_CSTRING_LEN`
    StringTooLong,
    /// String value is not valid UTF-8
    Utf8,
}

/// A tuple value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    /// UTF-8 text, at most `MAX_CSTRING_LEN` bytes
    CString(String<MAX_CSTRING_LEN>),
    /// Unsigned 8-bit integer
    UInt8(u8),
    /// Signed 32-bit integer
    Int32(i32),
}

impl Value {
    /// Build a string value, rejecting oversized input
    pub fn cstring(text: &str) -> Result<Self, DictError> {
        let mut value = String::new();
        value
            .push_str(text)
            .map_err(|_| DictError::StringTooLong)?;
        Ok(Value::CString(value))
    }

    /// Wire type identifier
    pub fn type_id(&self) -> u8 {
        match self {
            Value::CString(_) => TYPE_CSTRING,
            Value::UInt8(_) => TYPE_UINT8,
            Value::Int32(_) => TYPE_INT32,
        }
    }

    /// Encoded value length in bytes
    pub fn value_len(&self) -> usize {
        match self {
            Value::CString(text) => text.len(),
            Value::UInt8(_) => 1,
            Value::Int32(_) => 4,
        }
    }
}

/// One key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    /// Key from the shared key space
    pub key: u32,
    /// Carried value
    pub value: Value,
}

/// An ordered set of tuples, the unit of exchange on the companion link
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dictionary {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Append a tuple
    pub fn push(&mut self, key: u32, value: Value) -> Result<(), DictError> {
        self.tuples
            .push(Tuple { key, value })
            .map_err(|_| DictError::TooManyTuples)
    }

    /// Number of tuples
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Whether the dictionary holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Iterate the tuples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    /// Encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        1 + self
            .tuples
            .iter()
            .map(|t| TUPLE_HEADER_LEN + t.value.value_len())
            .sum::<usize>()
    }

    /// Encode into a byte buffer
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, DictError> {
        let total = self.encoded_len();
        if buffer.len() < total {
            return Err(DictError::BufferTooSmall);
        }

        buffer[0] = self.tuples.len() as u8;
        let mut offset = 1;
        for tuple in &self.tuples {
            let value_len = tuple.value.value_len();
            buffer[offset..offset + 4].copy_from_slice(&tuple.key.to_le_bytes());
            buffer[offset + 4] = tuple.value.type_id();
            buffer[offset + 5..offset + 7].copy_from_slice(&(value_len as u16).to_le_bytes());
            offset += TUPLE_HEADER_LEN;

            match &tuple.value {
                Value::CString(text) => {
                    buffer[offset..offset + value_len].copy_from_slice(text.as_bytes());
                }
                Value::UInt8(v) => buffer[offset] = *v,
                Value::Int32(v) => {
                    buffer[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
                }
            }
            offset += value_len;
        }

        Ok(offset)
    }

    /// Parse a dictionary from bytes
    ///
    /// Any malformed tuple drops the whole dictionary; trailing bytes
    /// after the last tuple are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = bytes.split_first().ok_or(DictError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut dictionary = Self::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_LEN {
                return Err(DictError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let type_id = rest[4];
            let value_len = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_LEN..];

            if rest.len() < value_len {
                return Err(DictError::Truncated);
            }
            let (value_bytes, remaining) = rest.split_at(value_len);
            rest = remaining;

            let value = match type_id {
                TYPE_CSTRING => {
                    if value_len > MAX_CSTRING_LEN {
                        return Err(DictError::StringTooLong);
                    }
                    let text = core::str::from_utf8(value_bytes).map_err(|_| DictError::Utf8)?;
                    Value::cstring(text)?
                }
                TYPE_UINT8 => {
                    if value_len != 1 {
                        return Err(DictError::BadLength);
                    }
                    Value::UInt8(value_bytes[0])
                }
                TYPE_INT32 => {
                    if value_len != 4 {
                        return Err(DictError::BadLength);
                    }
                    Value::Int32(i32::from_le_bytes([
                        value_bytes[0],
                        value_bytes[1],
                        value_bytes[2],
                        value_bytes[3],
                    ]))
                }
                _ => return Err(DictError::UnknownType),
            };

            // count <= MAX_TUPLES, so push cannot fail
            let _ = dictionary.push(key, value);
        }

        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_uint8() {
        let mut dict = Dictionary::new();
        dict.push(0, Value::UInt8(0)).unwrap();

        let mut buffer = [0u8; 16];
        let len = dict.encode(&mut buffer).unwrap();

        assert_eq!(len, 9);
        assert_eq!(buffer[0], 1); // count
        assert_eq!(&buffer[1..5], &[0, 0, 0, 0]); // key
        assert_eq!(buffer[5], TYPE_UINT8);
        assert_eq!(&buffer[6..8], &[1, 0]); // length
        assert_eq!(buffer[8], 0); // value
    }

    #[test]
    fn test_roundtrip_mixed_values() {
        let mut dict = Dictionary::new();
        dict.push(3, Value::Int32(28315)).unwrap();
        dict.push(4, Value::cstring("Cloudy").unwrap()).unwrap();
        dict.push(1, Value::cstring("2").unwrap()).unwrap();

        let mut buffer = [0u8; 64];
        let len = dict.encode(&mut buffer).unwrap();
        let parsed = Dictionary::parse(&buffer[..len]).unwrap();

        assert_eq!(parsed, dict);
    }

    #[test]
    fn test_parse_truncated_input() {
        let mut dict = Dictionary::new();
        dict.push(3, Value::Int32(-40)).unwrap();

        let mut buffer = [0u8; 16];
        let len = dict.encode(&mut buffer).unwrap();

        assert_eq!(
            Dictionary::parse(&buffer[..len - 2]),
            Err(DictError::Truncated)
        );
        assert_eq!(Dictionary::parse(&[]), Err(DictError::Truncated));
    }

    #[test]
    fn test_parse_unknown_type() {
        // count 1, key 9, type 0x7F, length 0
        let bytes = [1, 9, 0, 0, 0, 0x7F, 0, 0];
        assert_eq!(Dictionary::parse(&bytes), Err(DictError::UnknownType));
    }

    #[test]
    fn test_parse_bad_int_length() {
        // Int32 declared with a 2-byte body
        let bytes = [1, 3, 0, 0, 0, TYPE_INT32, 2, 0, 0xAB, 0xCD];
        assert_eq!(Dictionary::parse(&bytes), Err(DictError::BadLength));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let bytes = [1, 4, 0, 0, 0, TYPE_CSTRING, 2, 0, 0xFF, 0xFE];
        assert_eq!(Dictionary::parse(&bytes), Err(DictError::Utf8));
    }

    #[test]
    fn test_string_too_long() {
        assert_eq!(
            Value::cstring("a string over fifteen bytes"),
            Err(DictError::StringTooLong)
        );
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let mut dict = Dictionary::new();
        dict.push(0, Value::UInt8(0)).unwrap();

        let mut buffer = [0u8; 4];
        assert_eq!(dict.encode(&mut buffer), Err(DictError::BufferTooSmall));
    }

    #[test]
    fn test_too_many_tuples() {
        let mut dict = Dictionary::new();
        for key in 0..MAX_TUPLES as u32 {
            dict.push(key, Value::UInt8(0)).unwrap();
        }
        assert_eq!(
            dict.push(99, Value::UInt8(0)),
            Err(DictError::TooManyTuples)
        );
    }
}
