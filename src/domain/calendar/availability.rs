use crate::domain::calendar::day::{DAYS_PER_WEEK, Day};
use crate::error::{Error, Result};

pub const HOURS_PER_DAY: u8 = 24;

/// Week x hour grid of free/busy flags for one employee.
///
/// The grid has a fixed size of 7 x 24. A flag is `true` while the employee is free
/// at that hour. Hours are cleared by the initial unavailability blocks and by
/// committed assignments, and reopened only when an assignment is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityCalendar {
    slots: [[bool; HOURS_PER_DAY as usize]; DAYS_PER_WEEK],
}

impl Default for AvailabilityCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityCalendar {
    /// Creates a calendar where every hour of the week is available.
    pub fn new() -> Self {
        AvailabilityCalendar { slots: [[true; HOURS_PER_DAY as usize]; DAYS_PER_WEEK] }
    }

    pub fn is_available(&self, day: Day, hour: u8) -> Result<bool> {
        check_hour(hour)?;
        Ok(self.slots[day.index()][hour as usize])
    }

    /// `true` iff every hour in `[start, end)` is available. An empty range is vacuously available.
    pub fn is_available_range(&self, day: Day, start: u8, end: u8) -> Result<bool> {
        check_range(start, end)?;
        Ok(self.slots[day.index()][start as usize..end as usize].iter().all(|free| *free))
    }

    /// Marks every hour in `[start, end)` as unavailable.
    pub fn block(&mut self, day: Day, start: u8, end: u8) -> Result<()> {
        check_range(start, end)?;
        self.slots[day.index()][start as usize..end as usize].fill(false);
        Ok(())
    }

    /// Reopens a single hour.
    pub fn unblock(&mut self, day: Day, hour: u8) -> Result<()> {
        check_hour(hour)?;
        self.slots[day.index()][hour as usize] = true;
        Ok(())
    }

    /// Length of the contiguous available run starting at `start`, never reaching past `limit`.
    /// Out of range arguments yield an empty run.
    pub fn available_run(&self, day: Day, start: u8, limit: u8) -> u8 {
        let limit = limit.min(HOURS_PER_DAY);
        if start >= limit {
            return 0;
        }

        self.slots[day.index()][start as usize..limit as usize].iter().take_while(|free| **free).count() as u8
    }

    /// Number of available hours over the whole week.
    pub fn available_hours(&self) -> usize {
        self.slots.iter().flatten().filter(|free| **free).count()
    }
}

fn check_hour(hour: u8) -> Result<()> {
    if hour < HOURS_PER_DAY {
        Ok(())
    } else {
        Err(Error::OutOfRange(format!("hour {} is outside 0..{}", hour, HOURS_PER_DAY)))
    }
}

fn check_range(start: u8, end: u8) -> Result<()> {
    if start <= end && end <= HOURS_PER_DAY {
        Ok(())
    } else {
        Err(Error::OutOfRange(format!("hour range [{}, {}) is not within 0..={}", start, end, HOURS_PER_DAY)))
    }
}
