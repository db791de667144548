//! Wall-clock components supplied by the platform time service

/// Day of week with its three-letter display abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Three-letter abbreviation shown on the date line
    pub const fn abbrev(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

/// Local wall-clock components for one tick
///
/// Plain data; the formatters validate ranges and refuse out-of-range
/// components rather than indexing past a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
    pub weekday: Weekday,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
}

impl WallClock {
    /// Check every component against its documented range
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> WallClock {
        WallClock {
            year: 2024,
            month: 12,
            day: 25,
            weekday: Weekday::Wednesday,
            hour: 9,
            minute: 30,
            second: 0,
        }
    }

    #[test]
    fn test_valid_clock() {
        assert!(clock().is_valid());
    }

    #[test]
    fn test_out_of_range_components() {
        let mut c = clock();
        c.month = 0;
        assert!(!c.is_valid());

        let mut c = clock();
        c.day = 32;
        assert!(!c.is_valid());

        let mut c = clock();
        c.hour = 24;
        assert!(!c.is_valid());

        let mut c = clock();
        c.second = 60;
        assert!(!c.is_valid());
    }

    #[test]
    fn test_weekday_abbreviations() {
        assert_eq!(Weekday::Sunday.abbrev(), "Sun");
        assert_eq!(Weekday::Wednesday.abbrev(), "Wed");
        assert_eq!(Weekday::Saturday.abbrev(), "Sat");
    }
}
