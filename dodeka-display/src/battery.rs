//! Battery icon selection
//!
//! The platform reports charge in whole decades; each decade has its own
//! bitmap, with a shared fallback for anything that is not an exact
//! decade (including charging readings).

/// Number of battery bitmaps the platform provides
pub const BATTERY_ICON_COUNT: u8 = 11;

/// Index into the platform's battery bitmap table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryIcon(u8);

impl BatteryIcon {
    /// Map a charge percentage to its icon
    pub const fn from_charge_percent(percent: u8) -> Self {
        match percent {
            100 => Self(0),
            90 => Self(1),
            80 => Self(2),
            70 => Self(3),
            60 => Self(4),
            50 => Self(5),
            40 => Self(6),
            30 => Self(7),
            20 => Self(8),
            10 => Self(9),
            _ => Self(10),
        }
    }

    /// Index into the bitmap resource table
    pub const fn resource_index(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_decades() {
        assert_eq!(BatteryIcon::from_charge_percent(100).resource_index(), 0);
        assert_eq!(BatteryIcon::from_charge_percent(50).resource_index(), 5);
        assert_eq!(BatteryIcon::from_charge_percent(10).resource_index(), 9);
    }

    #[test]
    fn test_non_decade_readings_use_fallback() {
        assert_eq!(BatteryIcon::from_charge_percent(0).resource_index(), 10);
        assert_eq!(BatteryIcon::from_charge_percent(95).resource_index(), 10);
        assert_eq!(BatteryIcon::from_charge_percent(5).resource_index(), 10);
    }

    #[test]
    fn test_indices_stay_in_table() {
        for percent in 0..=100 {
            assert!(BatteryIcon::from_charge_percent(percent).resource_index() < BATTERY_ICON_COUNT);
        }
    }
}
