//! Time line formatting
//!
//! A day splits into two 12-group half-days. Each hour-group covers two
//! hours divided into 144 slices of 50 seconds, displayed as a padded
//! dozenal pair; the hour-group itself is a single dozenal digit.

use heapless::String;
use serde::{Deserialize, Serialize};

use super::{FormatError, Formatter};
use crate::clock::WallClock;

/// Maximum rendered time length in bytes
pub const TIME_LEN: usize = 9;

/// Slices per hour: an even hour fills 0..=71, an odd hour continues at 72
const ODD_HOUR_OFFSET: usize = 72;

/// Clock display layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockFormat {
    /// Hour-group digit followed directly by the slice pair
    #[default]
    Diurnal,
    /// Hour digit, a dot, then the slice pair
    Semidiurnal,
}

impl ClockFormat {
    /// Variant for a persisted or transmitted selector index
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(ClockFormat::Diurnal),
            1 => Some(ClockFormat::Semidiurnal),
            _ => None,
        }
    }

    /// Selector index for persistence and transmission
    pub const fn index(self) -> i32 {
        self as i32
    }
}

/// 50-second slice position within the two-hour group, 0..=143
pub(crate) fn slice_index(hour: u8, minute: u8, second: u8) -> usize {
    let slice = (minute as usize * 60 + second as usize) / 50;
    if hour % 2 == 1 {
        slice + ODD_HOUR_OFFSET
    } else {
        slice
    }
}

impl Formatter {
    /// Render the time line for one tick
    pub fn time(
        &self,
        clock: &WallClock,
        format: ClockFormat,
    ) -> Result<String<TIME_LEN>, FormatError> {
        if !clock.is_valid() {
            return Err(FormatError::InvalidClock);
        }

        let slice = slice_index(clock.hour, clock.minute, clock.second);
        // a valid clock keeps both lookups in range
        let pair = self.tables.pair(slice).ok_or(FormatError::InvalidClock)?;

        let mut out: String<TIME_LEN> = String::new();
        match format {
            ClockFormat::Diurnal => {
                let group = self
                    .tables
                    .group(clock.hour as usize / 2)
                    .ok_or(FormatError::InvalidClock)?;
                let _ = out.push_str(group);
                let _ = out.push_str(pair);
            }
            ClockFormat::Semidiurnal => {
                // hours 12-23 reuse the morning group digits; the layout
                // carries no half-day marker
                let group = self
                    .tables
                    .group(clock.hour as usize % 12)
                    .ok_or(FormatError::InvalidClock)?;
                let _ = out.push_str(group);
                let _ = out.push('.');
                let _ = out.push_str(pair);
            }
        }
        Ok(out)
    }
}
