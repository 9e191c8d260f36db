//! Event date and time formatting.

use std::fmt;

use jiff::civil::{Date, Time};

/// Formats the optional date and time of a draft.
///
/// # Format
///
/// - Both set: `Sat, 2026-10-31 at 20:30`
/// - Date only: `Sat, 2026-10-31`
/// - Time only: `20:30 (no date)`
/// - Neither: `Not scheduled`
pub struct EventSchedule<'a> {
    pub date: Option<&'a Date>,
    pub time: Option<&'a Time>,
}

impl<'a> EventSchedule<'a> {
    pub fn new(date: Option<&'a Date>, time: Option<&'a Time>) -> Self {
        Self { date, time }
    }
}

impl fmt::Display for EventSchedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.date, self.time) {
            (Some(date), Some(time)) => write!(
                f,
                "{} at {}",
                date.strftime("%a, %Y-%m-%d"),
                time.strftime("%H:%M")
            ),
            (Some(date), None) => write!(f, "{}", date.strftime("%a, %Y-%m-%d")),
            (None, Some(time)) => write!(f, "{} (no date)", time.strftime("%H:%M")),
            (None, None) => write!(f, "Not scheduled"),
        }
    }
}
