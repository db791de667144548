//! Display backend trait
//!
//! Defines the interface between the screen buffer and whatever actually
//! draws pixels (watch display layers, a simulator, a test recorder).

use crate::battery::BatteryIcon;

/// The four text slots of the watchface layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextRegion {
    Time,
    Date,
    Condition,
    Temperature,
}

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Text does not fit the region
    TextTooLong,
}

/// Hardware-agnostic rendering interface
///
/// Implementations own the platform specifics: layer positions, fonts,
/// and the battery bitmap table.
pub trait DisplayBackend {
    /// Replace the text of one region
    fn set_text(&mut self, region: TextRegion, text: &str) -> Result<(), DisplayError>;

    /// Show the battery icon
    fn set_battery(&mut self, icon: BatteryIcon) -> Result<(), DisplayError>;

    /// Push buffered content to the hardware
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
