//! Precomputed dozenal display tables
//!
//! Time display buckets each two-hour group into 50-second slices. The
//! pair table pre-renders every slice value once, trading a small fixed
//! memory cost for allocation-free per-tick formatting. The same padded
//! pairs double as the day/month lookup on the date line.

use heapless::String;

use super::numeral::to_dozenal;

/// Pair table entries: one per 50-second slice of a two-hour group
/// (0..=143), plus the rollover sentinel
pub const PAIR_COUNT: usize = 145;

/// Index of the three-character half-day rollover sentinel ("100",
/// dozenal for 144)
pub const ROLLOVER_INDEX: usize = PAIR_COUNT - 1;

/// Single-digit hour-group entries
pub const GROUP_COUNT: usize = 12;

/// Build-once, immutable lookup tables for time and date display
///
/// Owned by the formatter; never a global and never mutated after
/// construction.
pub struct DozenalTables {
    pairs: [String<3>; PAIR_COUNT],
    groups: [String<1>; GROUP_COUNT],
}

impl DozenalTables {
    /// Build both tables by iterating the codec
    pub fn new() -> Self {
        let pairs = core::array::from_fn(|index| {
            let raw = to_dozenal(index as i32);
            let mut entry: String<3> = String::new();
            // pad to two characters; the sentinel at 144 is already three
            if raw.len() < 2 {
                let _ = entry.push('0');
            }
            let _ = entry.push_str(&raw);
            entry
        });
        let groups = core::array::from_fn(|index| {
            let mut entry: String<1> = String::new();
            let _ = entry.push_str(&to_dozenal(index as i32));
            entry
        });
        Self { pairs, groups }
    }

    /// Padded two-digit entry, or `None` when the index is out of range
    pub fn pair(&self, index: usize) -> Option<&str> {
        self.pairs.get(index).map(|entry| entry.as_str())
    }

    /// Single-digit hour-group entry, or `None` when the index is out of
    /// range
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).map(|entry| entry.as_str())
    }
}

impl Default for DozenalTables {
    fn default() -> Self {
        Self::new()
    }
}
