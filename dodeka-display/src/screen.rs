//! Watchface screen buffer
//!
//! Collects formatted strings between ticks and pushes them to a backend
//! only when something actually changed.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError, TextRegion};
use crate::battery::BatteryIcon;

/// Time slot width in bytes
pub const TIME_COLS: usize = 9;

/// Date slot width in bytes
pub const DATE_COLS: usize = 13;

/// Condition slot width in bytes
pub const CONDITION_COLS: usize = 15;

/// Temperature slot width in bytes
pub const TEMPERATURE_COLS: usize = 16;

/// Character buffer for the watchface layout
#[derive(Clone)]
pub struct Screen {
    time: String<TIME_COLS>,
    date: String<DATE_COLS>,
    condition: String<CONDITION_COLS>,
    temperature: String<TEMPERATURE_COLS>,
    battery: BatteryIcon,
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create an empty screen
    pub fn new() -> Self {
        Self {
            time: String::new(),
            date: String::new(),
            condition: String::new(),
            temperature: String::new(),
            battery: BatteryIcon::from_charge_percent(100),
            dirty: true,
        }
    }

    /// Set the time line
    pub fn set_time(&mut self, text: &str) {
        assign(&mut self.time, text, &mut self.dirty);
    }

    /// Set the date line
    pub fn set_date(&mut self, text: &str) {
        assign(&mut self.date, text, &mut self.dirty);
    }

    /// Set the condition text
    pub fn set_condition(&mut self, text: &str) {
        assign(&mut self.condition, text, &mut self.dirty);
    }

    /// Set the temperature line
    pub fn set_temperature(&mut self, text: &str) {
        assign(&mut self.temperature, text, &mut self.dirty);
    }

    /// Set the battery icon
    pub fn set_battery(&mut self, icon: BatteryIcon) {
        if self.battery != icon {
            self.battery = icon;
            self.dirty = true;
        }
    }

    /// Current time line
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Current date line
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Current condition text
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Current temperature line
    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    /// Current battery icon
    pub fn battery(&self) -> BatteryIcon {
        self.battery
    }

    /// Check if the screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the screen as clean without rendering
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Push the buffer to a backend when dirty
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        if !self.dirty {
            return Ok(());
        }
        backend.set_text(TextRegion::Time, &self.time)?;
        backend.set_text(TextRegion::Date, &self.date)?;
        backend.set_text(TextRegion::Condition, &self.condition)?;
        backend.set_text(TextRegion::Temperature, &self.temperature)?;
        backend.set_battery(self.battery)?;
        backend.flush()?;
        self.dirty = false;
        Ok(())
    }
}

/// Replace a slot's content, truncating oversized input on a char boundary
fn assign<const N: usize>(slot: &mut String<N>, text: &str, dirty: &mut bool) {
    let clipped = clip(text, N);
    if slot.as_str() == clipped {
        return;
    }
    slot.clear();
    let _ = slot.push_str(clipped);
    *dirty = true;
}

/// Longest prefix of `text` that fits `max` bytes without splitting a
/// UTF-8 sequence
fn clip(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Screen[{} | {} | {} {}]",
            self.time.as_str(),
            self.date.as_str(),
            self.condition.as_str(),
            self.temperature.as_str()
        );
    }
}
