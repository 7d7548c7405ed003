use crate::domain::employee::roster::Roster;
use crate::domain::engine::assignment_engine::AssignmentEngine;
use crate::domain::report::schedule_report::ScheduleReport;
use crate::domain::schedule_input::ScheduleInput;
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;
use crate::error::Result;
use crate::loader::parser::load_schedule_input;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Final state of a scheduling run: the populated calendar, the roster with its
/// final hour totals and calendars, and the run report.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub roster: Roster,
    pub calendar: WeeklyCalendar,
    pub report: ScheduleReport,
}

pub fn run_schedule(input: ScheduleInput) -> ScheduleRun {
    let ScheduleInput { mut roster, mut calendar, config } = input;

    let report = AssignmentEngine::new(config).run(&mut roster, &mut calendar);

    ScheduleRun { roster, calendar, report }
}

/// Loads the input document at `file_path` and schedules it with the configuration it contains.
pub fn generate_schedule(file_path: &str) -> Result<ScheduleRun> {
    let input = load_schedule_input(file_path)?;
    Ok(run_schedule(input))
}
