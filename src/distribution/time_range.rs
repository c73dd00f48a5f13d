use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

use crate::models::TimeWindow;

/// Date-time layout expected by the reporting service.
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separates start and end in the timespan string.
pub const RANGE_DELIMITER: char = '|';

/// Renders the window in the process-local time zone.
pub fn format_time_range(window: &TimeWindow) -> String {
    format_time_range_in(window, &Local)
}

/// Renders the window as `"<start>|<end>"` in the given zone.
pub fn format_time_range_in<Tz>(window: &TimeWindow, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}{}{}",
        format_instant_in(&window.start, tz),
        RANGE_DELIMITER,
        format_instant_in(&window.end, tz)
    )
}

fn format_instant_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant
        .with_timezone(tz)
        .format(WIRE_DATETIME_FORMAT)
        .to_string()
}
