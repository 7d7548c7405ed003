use serde::Serialize;

use crate::domain::calendar::day::Day;
use crate::domain::employee::roster::Roster;
use crate::domain::report::schedule_report::ScheduleReport;
use crate::domain::vacancy::vacancy::Vacancy;
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;

/// The populated calendar together with the run report, as written by `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutputDto {
    pub report: ScheduleReport,
    pub days: Vec<DayScheduleDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScheduleDto {
    pub day: usize,
    pub weekday: String,
    pub vacancies: Vec<VacancyScheduleDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyScheduleDto {
    pub start: u8,
    pub end: u8,
    pub capacity: usize,
    /// One entry per opening, one employee name per hour; `null` marks an unfilled block.
    pub lanes: Vec<Vec<Option<String>>>,
}

impl ScheduleOutputDto {
    pub fn new(report: ScheduleReport, calendar: &WeeklyCalendar, roster: &Roster) -> Self {
        let days = Day::week()
            .map(|day| DayScheduleDto {
                day: day.index(),
                weekday: day.name().to_string(),
                vacancies: calendar.vacancies(day).iter().map(|vacancy| VacancyScheduleDto::new(vacancy, roster)).collect(),
            })
            .collect();

        ScheduleOutputDto { report, days }
    }
}

impl VacancyScheduleDto {
    fn new(vacancy: &Vacancy, roster: &Roster) -> Self {
        let lanes = (0..vacancy.capacity())
            .map(|lane| {
                vacancy
                    .lane(lane)
                    .unwrap_or_default()
                    .iter()
                    .map(|block| block.employee().and_then(|id| roster.name_of(id)).map(|name| name.to_string()))
                    .collect()
            })
            .collect();

        VacancyScheduleDto { start: vacancy.start_time(), end: vacancy.end_time(), capacity: vacancy.capacity(), lanes }
    }
}
