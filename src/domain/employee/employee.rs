use crate::domain::calendar::availability::{AvailabilityCalendar, HOURS_PER_DAY};
use crate::domain::calendar::day::Day;
use crate::domain::utils::id::EmployeeName;
use crate::error::{Error, Result};

pub const DEFAULT_MIN_WEEKLY_HOURS: u32 = 0;
pub const DEFAULT_MAX_WEEKLY_HOURS: u32 = 100;
pub const DEFAULT_MIN_SHIFT_LENGTH: u8 = 1;
pub const DEFAULT_MAX_SHIFT_LENGTH: u8 = 12;

/// Weekly hour budget and shift length bounds of one employee.
///
/// Invariants: `min_weekly_hours <= max_weekly_hours` and
/// `1 <= min_shift_length <= max_shift_length <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftConstraints {
    min_weekly_hours: u32,
    max_weekly_hours: u32,
    min_shift_length: u8,
    max_shift_length: u8,
}

impl Default for ShiftConstraints {
    fn default() -> Self {
        ShiftConstraints {
            min_weekly_hours: DEFAULT_MIN_WEEKLY_HOURS,
            max_weekly_hours: DEFAULT_MAX_WEEKLY_HOURS,
            min_shift_length: DEFAULT_MIN_SHIFT_LENGTH,
            max_shift_length: DEFAULT_MAX_SHIFT_LENGTH,
        }
    }
}

impl ShiftConstraints {
    pub fn new(min_weekly_hours: u32, max_weekly_hours: u32, min_shift_length: u8, max_shift_length: u8) -> Result<Self> {
        if min_weekly_hours > max_weekly_hours {
            return Err(Error::ConfigurationError(format!(
                "min_weekly_hours ({}) exceeds max_weekly_hours ({})",
                min_weekly_hours, max_weekly_hours
            )));
        }

        if min_shift_length == 0 || min_shift_length > max_shift_length || max_shift_length > HOURS_PER_DAY {
            return Err(Error::ConfigurationError(format!(
                "shift length bounds {}..={} must satisfy 1 <= min <= max <= {}",
                min_shift_length, max_shift_length, HOURS_PER_DAY
            )));
        }

        Ok(ShiftConstraints { min_weekly_hours, max_weekly_hours, min_shift_length, max_shift_length })
    }

    pub fn min_weekly_hours(&self) -> u32 {
        self.min_weekly_hours
    }

    pub fn max_weekly_hours(&self) -> u32 {
        self.max_weekly_hours
    }

    pub fn min_shift_length(&self) -> u8 {
        self.min_shift_length
    }

    pub fn max_shift_length(&self) -> u8 {
        self.max_shift_length
    }
}

/// A staff member together with their constraints, their running total of
/// scheduled hours and their personal availability calendar.
///
/// `hours_scheduled` and the calendar are only changed through [`Employee::commit`]
/// and [`Employee::release`], which update both sides together.
#[derive(Debug, Clone)]
pub struct Employee {
    name: EmployeeName,
    email: String,
    constraints: ShiftConstraints,
    hours_scheduled: u32,
    calendar: AvailabilityCalendar,
}

impl Employee {
    pub fn new(name: impl Into<String>, email: impl Into<String>, constraints: ShiftConstraints) -> Self {
        Employee {
            name: EmployeeName::new(name),
            email: email.into(),
            constraints,
            hours_scheduled: 0,
            calendar: AvailabilityCalendar::new(),
        }
    }

    /// Blocks out hours in `[start_hour, end_hour)` on `day` when the employee is busy.
    pub fn with_unavailable_hours(mut self, day: Day, start_hour: u8, end_hour: u8) -> Result<Self> {
        if start_hour >= end_hour || end_hour > HOURS_PER_DAY {
            return Err(Error::ConfigurationError(format!(
                "unavailability of '{}' on {} must satisfy start < end <= {}, got [{}, {})",
                self.name, day, HOURS_PER_DAY, start_hour, end_hour
            )));
        }

        self.calendar.block(day, start_hour, end_hour)?;
        Ok(self)
    }

    pub fn name(&self) -> &EmployeeName {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn constraints(&self) -> &ShiftConstraints {
        &self.constraints
    }

    pub fn hours_scheduled(&self) -> u32 {
        self.hours_scheduled
    }

    pub fn calendar(&self) -> &AvailabilityCalendar {
        &self.calendar
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.constraints.max_weekly_hours - self.hours_scheduled
    }

    pub fn can_take(&self, hours: u32) -> bool {
        self.hours_scheduled + hours <= self.constraints.max_weekly_hours
    }

    pub fn has_capacity(&self) -> bool {
        self.hours_scheduled < self.constraints.max_weekly_hours
    }

    pub fn is_below_minimum(&self) -> bool {
        self.hours_scheduled < self.constraints.min_weekly_hours
    }

    /// Availability query used by the engine. Hours outside the day count as unavailable.
    pub fn is_free(&self, day: Day, start: u8, end: u8) -> bool {
        self.calendar.is_available_range(day, start, end).unwrap_or(false)
    }

    /// Books `[start, end)` on `day`: blocks the range in the calendar and adds its
    /// length to `hours_scheduled`. Nothing changes when the range is not free or
    /// would exceed the weekly maximum.
    pub fn commit(&mut self, day: Day, start: u8, end: u8) -> Result<()> {
        if !self.calendar.is_available_range(day, start, end)? {
            return Err(Error::AssignmentRejected(format!("'{}' is not available on {} during [{}, {})", self.name, day, start, end)));
        }

        let hours = (end - start) as u32;
        if !self.can_take(hours) {
            return Err(Error::AssignmentRejected(format!(
                "'{}' cannot take {} more hours ({} of {} scheduled)",
                self.name, hours, self.hours_scheduled, self.constraints.max_weekly_hours
            )));
        }

        self.calendar.block(day, start, end)?;
        self.hours_scheduled += hours;

        Ok(())
    }

    /// Inverse of [`Employee::commit`]: reopens `[start, end)` and subtracts its length.
    ///
    /// The range must be one this employee holds; an hour that is already free is
    /// rejected because it cannot have been committed.
    pub fn release(&mut self, day: Day, start: u8, end: u8) -> Result<()> {
        if start > end || end > HOURS_PER_DAY {
            return Err(Error::OutOfRange(format!("hour range [{}, {}) is not within 0..={}", start, end, HOURS_PER_DAY)));
        }

        let hours = (end - start) as u32;
        if hours > self.hours_scheduled {
            return Err(Error::AssignmentRejected(format!(
                "'{}' has only {} hours scheduled, cannot release {}",
                self.name, self.hours_scheduled, hours
            )));
        }

        for hour in start..end {
            if self.calendar.is_available(day, hour)? {
                return Err(Error::AssignmentRejected(format!("'{}' holds no assignment on {} at {}:00", self.name, day, hour)));
            }
        }

        for hour in start..end {
            self.calendar.unblock(day, hour)?;
        }
        self.hours_scheduled -= hours;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> Day {
        Day::MONDAY
    }

    #[test]
    fn constraints_are_validated() {
        assert!(ShiftConstraints::new(10, 5, 1, 8).is_err());
        assert!(ShiftConstraints::new(0, 40, 0, 8).is_err());
        assert!(ShiftConstraints::new(0, 40, 9, 8).is_err());
        assert!(ShiftConstraints::new(0, 40, 2, 25).is_err());
        assert!(ShiftConstraints::new(40, 40, 24, 24).is_ok());
    }

    #[test]
    fn unavailability_must_be_a_proper_range() {
        let employee = Employee::new("John", "john@mail.com", ShiftConstraints::default());
        assert!(matches!(employee.clone().with_unavailable_hours(monday(), 11, 8), Err(Error::ConfigurationError(_))));
        assert!(matches!(employee.with_unavailable_hours(monday(), 20, 25), Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn commit_blocks_calendar_and_counts_hours() {
        let mut employee = Employee::new("Kate", "kate@mail.com", ShiftConstraints::new(0, 10, 1, 8).unwrap());

        employee.commit(monday(), 8, 12).unwrap();

        assert_eq!(employee.hours_scheduled(), 4);
        assert_eq!(employee.remaining_capacity(), 6);
        assert!(!employee.is_free(monday(), 8, 9));
        assert!(employee.is_free(monday(), 12, 13));
    }

    #[test]
    fn commit_is_all_or_nothing() {
        let mut employee = Employee::new("John", "john@mail.com", ShiftConstraints::new(0, 3, 1, 8).unwrap())
            .with_unavailable_hours(monday(), 10, 11)
            .unwrap();

        assert!(matches!(employee.commit(monday(), 8, 12), Err(Error::AssignmentRejected(_))));
        assert!(matches!(employee.commit(monday(), 12, 16), Err(Error::AssignmentRejected(_))));
        assert_eq!(employee.hours_scheduled(), 0);
        assert!(employee.is_free(monday(), 12, 16));
    }

    #[test]
    fn release_reverts_commit() {
        let mut employee = Employee::new("Kate", "kate@mail.com", ShiftConstraints::default());
        employee.commit(monday(), 8, 12).unwrap();

        employee.release(monday(), 10, 12).unwrap();

        assert_eq!(employee.hours_scheduled(), 2);
        assert!(employee.is_free(monday(), 10, 12));
        assert!(!employee.is_free(monday(), 8, 10));
    }

    #[test]
    fn release_of_free_hours_is_rejected() {
        let mut employee = Employee::new("Kate", "kate@mail.com", ShiftConstraints::default());
        employee.commit(monday(), 8, 9).unwrap();

        assert!(matches!(employee.release(monday(), 8, 10), Err(Error::AssignmentRejected(_))));
        assert_eq!(employee.hours_scheduled(), 1);
        assert!(!employee.is_free(monday(), 8, 9));
    }
}
