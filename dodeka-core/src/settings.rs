//! User-selectable display settings and their persistence plumbing
//!
//! Settings are a plain value owned by the caller and passed into each
//! render; the persistence collaborator is only responsible for loading
//! and storing them between sessions.

use serde::{Deserialize, Serialize};

use dodeka_protocol::keys;

use crate::format::{ClockFormat, DateFormat, TemperatureScale};

/// Byte budget for a postcard-encoded settings snapshot
pub const SETTINGS_SNAPSHOT_LEN: usize = 8;

/// The three user-selectable display settings
///
/// Defaults are variant 0 of each selector, matching a store that has
/// never been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub scale: TemperatureScale,
    pub clock_format: ClockFormat,
    pub date_format: DateFormat,
}

/// Key/value persistence collaborator (watch flash, simulator file, ...)
pub trait SettingsStore {
    type Error;

    /// Read a stored integer; `None` when the key was never written
    fn read(&mut self, key: u32) -> Result<Option<i32>, Self::Error>;

    /// Store an integer under a key
    fn write(&mut self, key: u32, value: i32) -> Result<(), Self::Error>;
}

impl Settings {
    /// Load from a store
    ///
    /// Absent keys and unrecognized stored values keep the default:
    /// unknown input leaves state unchanged.
    pub fn load<S: SettingsStore>(store: &mut S) -> Result<Self, S::Error> {
        let mut settings = Self::default();
        if let Some(value) = store.read(keys::KEY_SCALE_CHOICE)? {
            if let Some(scale) = TemperatureScale::from_index(value) {
                settings.scale = scale;
            }
        }
        if let Some(value) = store.read(keys::KEY_CLOCK_FORMAT)? {
            if let Some(format) = ClockFormat::from_index(value) {
                settings.clock_format = format;
            }
        }
        if let Some(value) = store.read(keys::KEY_DATE_FORMAT)? {
            if let Some(format) = DateFormat::from_index(value) {
                settings.date_format = format;
            }
        }
        Ok(settings)
    }

    /// Write all three selectors
    pub fn store<S: SettingsStore>(&self, store: &mut S) -> Result<(), S::Error> {
        store.write(keys::KEY_SCALE_CHOICE, self.scale.index())?;
        store.write(keys::KEY_CLOCK_FORMAT, self.clock_format.index())?;
        store.write(keys::KEY_DATE_FORMAT, self.date_format.index())?;
        Ok(())
    }

    /// Postcard snapshot for blob-oriented stores; returns the used
    /// prefix of `buffer`
    pub fn to_slice<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
        postcard::to_slice(self, buffer)
    }

    /// Decode a postcard snapshot
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
