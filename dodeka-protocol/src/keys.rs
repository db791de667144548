//! Tuple keys shared between the companion link and settings storage
//!
//! The companion app and the persisted settings deliberately use one key
//! space: keys 0-4 travel over the link, keys 5-7 name the persisted
//! selector slots.

/// Clock format selector (inbound); also carries the outbound
/// weather-refresh trigger, which has no payload semantics of its own
pub const KEY_CLOCK: u32 = 0;

/// Temperature scale selector (inbound)
pub const KEY_SCALE: u32 = 1;

/// Date format selector (inbound)
pub const KEY_DATE: u32 = 2;

/// Current temperature in Kelvin (inbound)
pub const KEY_TEMPERATURE: u32 = 3;

/// Free-text weather condition (inbound)
pub const KEY_CONDITIONS: u32 = 4;

/// Persisted temperature scale choice
pub const KEY_SCALE_CHOICE: u32 = 5;

/// Persisted clock format
pub const KEY_CLOCK_FORMAT: u32 = 6;

/// Persisted date format
pub const KEY_DATE_FORMAT: u32 = 7;
