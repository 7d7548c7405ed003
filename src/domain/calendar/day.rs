use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DAYS_PER_WEEK: usize = 7;

const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// A day of the scheduling week. `0` is Monday, `6` is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Day(u8);

impl Day {
    pub const MONDAY: Day = Day(0);
    pub const SUNDAY: Day = Day(6);

    pub fn new(index: u8) -> Result<Self> {
        if (index as usize) < DAYS_PER_WEEK {
            Ok(Day(index))
        } else {
            Err(Error::OutOfRange(format!("day index {} is outside 0..{}", index, DAYS_PER_WEEK)))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All days of the week in scheduling order (Monday first).
    pub fn week() -> impl Iterator<Item = Day> {
        (0..DAYS_PER_WEEK as u8).map(Day)
    }

    pub fn weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    pub fn name(self) -> &'static str {
        DAY_NAMES[self.index()]
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day(weekday.num_days_from_monday() as u8)
    }
}

impl TryFrom<u8> for Day {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Day::new(index)
    }
}

/// Accepts either a numeric index (`"0"`..`"6"`) or an English weekday name
/// in any form `chrono` understands (`"Mon"`, `"monday"`, ...).
impl FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if let Ok(index) = trimmed.parse::<u8>() {
            return Day::new(index);
        }

        trimmed
            .parse::<Weekday>()
            .map(Day::from)
            .map_err(|_| Error::ConfigurationError(format!("'{}' is neither a day index nor a weekday name", s)))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
