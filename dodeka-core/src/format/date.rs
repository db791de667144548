//! Date line formatting
//!
//! Day and month render through the padded pair table; the year shows the
//! last two digits of its dozenal numeral.

use core::fmt::Write;

use heapless::String;
use serde::{Deserialize, Serialize};

use super::{FormatError, Formatter};
use crate::clock::WallClock;
use crate::dozenal::Numeral;

/// Maximum rendered date length in bytes
pub const DATE_LEN: usize = 13;

/// Date display layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateFormat {
    /// `day.month.year weekday`
    #[default]
    DayMonthYear,
    /// `month/day/year weekday`
    MonthDayYear,
    /// `year-month-day weekday`
    YearMonthDay,
}

impl DateFormat {
    /// Variant for a persisted or transmitted selector index
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(DateFormat::DayMonthYear),
            1 => Some(DateFormat::MonthDayYear),
            2 => Some(DateFormat::YearMonthDay),
            _ => None,
        }
    }

    /// Selector index for persistence and transmission
    pub const fn index(self) -> i32 {
        self as i32
    }
}

impl Formatter {
    /// Render the date line
    pub fn date(
        &self,
        clock: &WallClock,
        format: DateFormat,
    ) -> Result<String<DATE_LEN>, FormatError> {
        if !clock.is_valid() {
            return Err(FormatError::InvalidClock);
        }

        let day = self
            .tables
            .pair(clock.day as usize)
            .ok_or(FormatError::InvalidClock)?;
        let month = self
            .tables
            .pair(clock.month as usize)
            .ok_or(FormatError::InvalidClock)?;
        let year = Numeral::from_decimal(i32::from(clock.year)).last_two();
        let weekday = clock.weekday.abbrev();

        let mut out: String<DATE_LEN> = String::new();
        // 2+2+2 digits, two separators, space, three-letter weekday: fits
        let _ = match format {
            DateFormat::DayMonthYear => write!(out, "{}.{}.{} {}", day, month, year, weekday),
            DateFormat::MonthDayYear => write!(out, "{}/{}/{} {}", month, day, year, weekday),
            DateFormat::YearMonthDay => write!(out, "{}-{}-{} {}", year, month, day, weekday),
        };
        Ok(out)
    }
}
