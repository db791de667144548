//! Companion message protocol for the Dodeka watchface
//!
//! The watch and its companion phone app exchange dictionaries of
//! key/value tuples. This crate owns:
//!
//! - The tuple dictionary wire codec (`dict`)
//! - The shared key space (`keys`)
//! - Typed inbound/outbound messages layered on top (`messages`)
//!
//! Transport (the radio link and its delivery callbacks) is the
//! platform's job; this crate only encodes and decodes payloads.

#![no_std]

pub mod dict;
pub mod keys;
pub mod messages;

// Re-export key types
pub use dict::{DictError, Dictionary, Tuple, Value, MAX_CSTRING_LEN, MAX_TUPLES};
pub use messages::{MessageError, PhoneMessage, WatchMessage};
