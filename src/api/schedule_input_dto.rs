use serde::Deserialize;

use crate::domain::calendar::day::Day;
use crate::domain::employee::employee::{DEFAULT_MAX_SHIFT_LENGTH, DEFAULT_MAX_WEEKLY_HOURS, DEFAULT_MIN_SHIFT_LENGTH, DEFAULT_MIN_WEEKLY_HOURS};
use crate::domain::engine::scheduler_config::SchedulerConfig;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInputDto {
    pub restaurant: String,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub employees: Vec<EmployeeDto>,
    #[serde(default)]
    pub vacancies: Vec<VacancyDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_min_weekly_hours")]
    pub min_weekly_hours: u32,
    #[serde(default = "default_max_weekly_hours")]
    pub max_weekly_hours: u32,
    #[serde(default = "default_min_shift_length")]
    pub min_shift_length: u8,
    #[serde(default = "default_max_shift_length")]
    pub max_shift_length: u8,
    #[serde(default)]
    pub unavailable: Vec<UnavailabilityDto>,
}

/// Busy interval `[start, end)` on one day.
#[derive(Debug, Deserialize)]
pub struct UnavailabilityDto {
    pub day: DayDto,
    pub start: u8,
    pub end: u8,
}

#[derive(Debug, Deserialize)]
pub struct VacancyDto {
    pub day: DayDto,
    pub start: u8,
    pub end: u8,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// A day given either as index (0 = Monday) or as weekday name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DayDto {
    Index(u8),
    Name(String),
}

impl TryFrom<&DayDto> for Day {
    type Error = Error;

    fn try_from(dto: &DayDto) -> Result<Self> {
        let day = match dto {
            DayDto::Index(index) => Day::new(*index),
            DayDto::Name(name) => name.parse::<Day>(),
        };

        day.map_err(|e| match e {
            Error::OutOfRange(msg) => Error::ConfigurationError(msg),
            other => other,
        })
    }
}

fn default_min_weekly_hours() -> u32 {
    DEFAULT_MIN_WEEKLY_HOURS
}

fn default_max_weekly_hours() -> u32 {
    DEFAULT_MAX_WEEKLY_HOURS
}

fn default_min_shift_length() -> u8 {
    DEFAULT_MIN_SHIFT_LENGTH
}

fn default_max_shift_length() -> u8 {
    DEFAULT_MAX_SHIFT_LENGTH
}

fn default_capacity() -> usize {
    1
}
