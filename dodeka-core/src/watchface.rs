//! Watchface event engine
//!
//! The host loop delivers one event at a time (a minute tick or a decoded
//! companion tuple); the engine answers with the display updates and
//! outbound actions that event produces. The only state it keeps is the
//! current settings; every output buffer is an owned value handed to the
//! caller.

use heapless::{String, Vec};

use dodeka_protocol::dict::MAX_CSTRING_LEN;
use dodeka_protocol::messages::PhoneMessage;

use crate::clock::WallClock;
use crate::format::{
    ClockFormat, DateFormat, FormatError, Formatter, TemperatureScale, DATE_LEN, TEMPERATURE_LEN,
    TIME_LEN,
};
use crate::settings::Settings;

/// Maximum condition text length in bytes
pub const CONDITION_LEN: usize = MAX_CSTRING_LEN;

/// Maximum updates a single event can produce
pub const MAX_UPDATES: usize = 4;

/// Minutes between weather refresh requests
pub const WEATHER_REFRESH_MINUTES: u8 = 30;

/// One display update or outbound action
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Update {
    /// New time line
    Time(String<TIME_LEN>),
    /// New date line
    Date(String<DATE_LEN>),
    /// New condition text
    Condition(String<CONDITION_LEN>),
    /// New temperature line
    Temperature(String<TEMPERATURE_LEN>),
    /// Ask the companion for fresh weather
    RequestWeather,
    /// Persist the new settings
    SaveSettings(Settings),
}

/// Updates produced by one event
pub type Updates = Vec<Update, MAX_UPDATES>;

/// The watchface engine
pub struct Watchface {
    formatter: Formatter,
    settings: Settings,
}

impl Watchface {
    /// Create the engine with previously loaded settings
    pub fn new(settings: Settings) -> Self {
        Self {
            formatter: Formatter::new(),
            settings,
        }
    }

    /// Current settings
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Full re-render of the clock lines (window load, format change)
    pub fn redraw(&self, clock: &WallClock) -> Result<Updates, FormatError> {
        let mut updates = Updates::new();
        let _ = updates.push(Update::Time(
            self.formatter.time(clock, self.settings.clock_format)?,
        ));
        let _ = updates.push(Update::Date(
            self.formatter.date(clock, self.settings.date_format)?,
        ));
        Ok(updates)
    }

    /// Handle one minute tick
    ///
    /// The date refreshes every tick. The time only changes when the tick
    /// lands on a 50-second slice boundary, and weather refreshes every
    /// half hour.
    pub fn handle_tick(&self, clock: &WallClock) -> Result<Updates, FormatError> {
        let mut updates = Updates::new();
        let _ = updates.push(Update::Date(
            self.formatter.date(clock, self.settings.date_format)?,
        ));
        if (u32::from(clock.minute) * 60 + u32::from(clock.second)) % 50 == 0 {
            let _ = updates.push(Update::Time(
                self.formatter.time(clock, self.settings.clock_format)?,
            ));
        }
        if clock.minute % WEATHER_REFRESH_MINUTES == 0 {
            let _ = updates.push(Update::RequestWeather);
        }
        Ok(updates)
    }

    /// Apply one decoded companion tuple
    ///
    /// Selector messages with an unknown variant digit leave the stored
    /// setting unchanged and produce no updates.
    pub fn handle_message(
        &mut self,
        message: &PhoneMessage,
        clock: &WallClock,
    ) -> Result<Updates, FormatError> {
        let mut updates = Updates::new();
        match message {
            PhoneMessage::Scale(digit) => {
                if let Some(scale) = TemperatureScale::from_index(i32::from(*digit)) {
                    self.settings.scale = scale;
                    let _ = updates.push(Update::SaveSettings(self.settings));
                    // the displayed reading is stale in the old scale
                    let _ = updates.push(Update::RequestWeather);
                }
            }
            PhoneMessage::ClockFormat(digit) => {
                if let Some(format) = ClockFormat::from_index(i32::from(*digit)) {
                    self.settings.clock_format = format;
                    let _ = updates.push(Update::SaveSettings(self.settings));
                    let _ = updates.push(Update::Time(self.formatter.time(clock, format)?));
                }
            }
            PhoneMessage::DateFormat(digit) => {
                if let Some(format) = DateFormat::from_index(i32::from(*digit)) {
                    self.settings.date_format = format;
                    let _ = updates.push(Update::SaveSettings(self.settings));
                    let _ = updates.push(Update::Date(self.formatter.date(clock, format)?));
                }
            }
            PhoneMessage::Temperature(kelvin) => {
                let text = self
                    .formatter
                    .temperature(*kelvin as f32, self.settings.scale);
                let _ = updates.push(Update::Temperature(text));
            }
            PhoneMessage::Conditions(text) => {
                let mut condition: String<CONDITION_LEN> = String::new();
                let _ = condition.push_str(text.as_str());
                let _ = updates.push(Update::Condition(condition));
            }
        }
        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Weekday;
    use dodeka_protocol::dict::Value;

    fn at(hour: u8, minute: u8, second: u8) -> WallClock {
        WallClock {
            year: 2024,
            month: 12,
            day: 25,
            weekday: Weekday::Wednesday,
            hour,
            minute,
            second,
        }
    }

    fn conditions(text: &str) -> PhoneMessage {
        let Value::CString(text) = Value::cstring(text).unwrap() else {
            unreachable!();
        };
        PhoneMessage::Conditions(text)
    }

    #[test]
    fn test_redraw_renders_both_clock_lines() {
        let watchface = Watchface::new(Settings::default());
        let updates = watchface.redraw(&at(0, 0, 0)).unwrap();

        assert_eq!(updates.len(), 2);
        let Update::Time(time) = &updates[0] else {
            panic!("expected time");
        };
        assert_eq!(time.as_str(), "000");
        let Update::Date(date) = &updates[1] else {
            panic!("expected date");
        };
        assert_eq!(date.as_str(), "21.10.08 Wed");
    }

    #[test]
    fn test_tick_on_slice_boundary() {
        let watchface = Watchface::new(Settings::default());
        // minute 0 is also a weather refresh minute
        let updates = watchface.handle_tick(&at(10, 0, 0)).unwrap();

        assert_eq!(updates.len(), 3);
        assert!(matches!(updates[0], Update::Date(_)));
        assert!(matches!(updates[1], Update::Time(_)));
        assert_eq!(updates[2], Update::RequestWeather);
    }

    #[test]
    fn test_tick_between_slices_keeps_time() {
        let watchface = Watchface::new(Settings::default());
        // 7*60+13 = 433 seconds, not a multiple of 50; minute 7 not a
        // refresh minute
        let updates = watchface.handle_tick(&at(10, 7, 13)).unwrap();

        assert_eq!(updates.len(), 1);
        assert!(matches!(updates[0], Update::Date(_)));
    }

    #[test]
    fn test_tick_half_hour_requests_weather() {
        let watchface = Watchface::new(Settings::default());
        let updates = watchface.handle_tick(&at(10, 30, 7)).unwrap();
        assert!(updates.contains(&Update::RequestWeather));
    }

    #[test]
    fn test_scale_change_persists_and_refreshes() {
        let mut watchface = Watchface::new(Settings::default());
        let updates = watchface
            .handle_message(&PhoneMessage::Scale(1), &at(10, 0, 0))
            .unwrap();

        assert_eq!(watchface.settings().scale, TemperatureScale::Celsius);
        assert_eq!(updates.len(), 2);
        assert_eq!(
            updates[0],
            Update::SaveSettings(watchface.settings())
        );
        assert_eq!(updates[1], Update::RequestWeather);
    }

    #[test]
    fn test_unknown_selector_leaves_state_unchanged() {
        let mut watchface = Watchface::new(Settings::default());
        let updates = watchface
            .handle_message(&PhoneMessage::Scale(7), &at(10, 0, 0))
            .unwrap();

        assert!(updates.is_empty());
        assert_eq!(watchface.settings(), Settings::default());
    }

    #[test]
    fn test_clock_format_change_rerenders_time() {
        let mut watchface = Watchface::new(Settings::default());
        let updates = watchface
            .handle_message(&PhoneMessage::ClockFormat(1), &at(13, 0, 0))
            .unwrap();

        assert_eq!(watchface.settings().clock_format, ClockFormat::Semidiurnal);
        let Update::Time(time) = &updates[1] else {
            panic!("expected time");
        };
        assert_eq!(time.as_str(), "1.60");
    }

    #[test]
    fn test_date_format_change_rerenders_date() {
        let mut watchface = Watchface::new(Settings::default());
        let updates = watchface
            .handle_message(&PhoneMessage::DateFormat(2), &at(13, 0, 0))
            .unwrap();

        assert_eq!(watchface.settings().date_format, DateFormat::YearMonthDay);
        let Update::Date(date) = &updates[1] else {
            panic!("expected date");
        };
        assert_eq!(date.as_str(), "08-10-21 Wed");
    }

    #[test]
    fn test_temperature_renders_at_current_scale() {
        let mut watchface = Watchface::new(Settings {
            scale: TemperatureScale::Celsius,
            ..Settings::default()
        });
        let updates = watchface
            .handle_message(&PhoneMessage::Temperature(283), &at(10, 0, 0))
            .unwrap();

        let Update::Temperature(text) = &updates[0] else {
            panic!("expected temperature");
        };
        // 283 K -> 9.85 C -> 10 -> dozenal "X"
        assert_eq!(text.as_str(), "X °C");
    }

    #[test]
    fn test_conditions_pass_through() {
        let mut watchface = Watchface::new(Settings::default());
        let updates = watchface
            .handle_message(&conditions("Partly Cloudy"), &at(10, 0, 0))
            .unwrap();

        let Update::Condition(text) = &updates[0] else {
            panic!("expected condition");
        };
        assert_eq!(text.as_str(), "Partly Cloudy");
    }
}
