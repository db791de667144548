//! Fixed-width display string formatting
//!
//! Every formatter is a pure function of its inputs: same values, same
//! format, byte-identical output. All output buffers are caller-owned
//! values; nothing is rendered into shared scratch storage.

pub mod date;
pub mod temperature;
pub mod time;

pub use date::{DateFormat, DATE_LEN};
pub use temperature::{TemperatureScale, TEMPERATURE_LEN};
pub use time::{ClockFormat, TIME_LEN};

use crate::dozenal::DozenalTables;

/// Formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// A wall-clock component was outside its documented range
    InvalidClock,
}

/// Owns the lookup tables and renders every display line
///
/// Build once at startup; cheap to share by reference across the
/// single-threaded event loop.
pub struct Formatter {
    tables: DozenalTables,
}

impl Formatter {
    /// Build the formatter and its tables
    pub fn new() -> Self {
        Self {
            tables: DozenalTables::new(),
        }
    }

    /// The underlying lookup tables
    pub fn tables(&self) -> &DozenalTables {
        &self.tables
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
