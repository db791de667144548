//! Typed messages layered over the tuple dictionary
//!
//! Message types are divided into two directions:
//! - Phone → Watch: weather readings and settings selectors
//! - Watch → Phone: weather-refresh trigger
//!
//! Selector tuples carry their chosen variant as a single decimal-digit
//! string; the raw digit passes through so the consumer can apply its own
//! "unknown variant leaves state unchanged" rule.

use heapless::String;

use crate::dict::{Dictionary, Tuple, Value, MAX_CSTRING_LEN};
use crate::keys;

/// Errors from decoding a tuple into a typed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Key is not part of the inbound key space
    UnknownKey(u32),
    /// Selector value is not a single decimal digit
    BadSelector,
    /// Value type does not match the key
    WrongValueType,
}

/// One decoded inbound tuple from the companion app
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhoneMessage {
    /// Temperature scale selector digit
    Scale(u8),
    /// Clock format selector digit
    ClockFormat(u8),
    /// Date format selector digit
    DateFormat(u8),
    /// Current temperature in Kelvin
    Temperature(i32),
    /// Free-text weather condition
    Conditions(String<MAX_CSTRING_LEN>),
}

impl PhoneMessage {
    /// Decode a single tuple
    ///
    /// Unrecognized keys are a diagnostic event for the caller to report
    /// and drop; they never abort processing of sibling tuples.
    pub fn from_tuple(tuple: &Tuple) -> Result<Self, MessageError> {
        match tuple.key {
            keys::KEY_SCALE => Ok(PhoneMessage::Scale(selector_digit(&tuple.value)?)),
            keys::KEY_CLOCK => Ok(PhoneMessage::ClockFormat(selector_digit(&tuple.value)?)),
            keys::KEY_DATE => Ok(PhoneMessage::DateFormat(selector_digit(&tuple.value)?)),
            keys::KEY_TEMPERATURE => match &tuple.value {
                Value::Int32(kelvin) => Ok(PhoneMessage::Temperature(*kelvin)),
                _ => Err(MessageError::WrongValueType),
            },
            keys::KEY_CONDITIONS => match &tuple.value {
                Value::CString(text) => Ok(PhoneMessage::Conditions(text.clone())),
                _ => Err(MessageError::WrongValueType),
            },
            other => Err(MessageError::UnknownKey(other)),
        }
    }
}

/// Selector values arrive as single decimal-digit strings
fn selector_digit(value: &Value) -> Result<u8, MessageError> {
    let Value::CString(text) = value else {
        return Err(MessageError::WrongValueType);
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(digit @ '0'..='9'), None) => Ok(digit as u8 - b'0'),
        _ => Err(MessageError::BadSelector),
    }
}

/// Messages from the watch to the companion app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchMessage {
    /// Ask the phone for fresh weather data; the payload carries no
    /// semantics beyond "request update"
    RequestWeather,
}

impl WatchMessage {
    /// Encode this message into a dictionary
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dictionary = Dictionary::new();
        match self {
            WatchMessage::RequestWeather => {
                // a single tuple always fits
                let _ = dictionary.push(keys::KEY_CLOCK, Value::UInt8(0));
            }
        }
        dictionary
    }
}
