use crate::api::schedule_input_dto::{EmployeeDto, ScheduleInputDto};
use crate::domain::calendar::day::Day;
use crate::domain::employee::employee::{Employee, ShiftConstraints};
use crate::domain::employee::roster::Roster;
use crate::domain::engine::scheduler_config::SchedulerConfig;
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;
use crate::error::{Error, Result};

/// Everything one scheduling run needs, validated.
#[derive(Debug, Clone)]
pub struct ScheduleInput {
    pub roster: Roster,
    pub calendar: WeeklyCalendar,
    pub config: SchedulerConfig,
}

impl TryFrom<ScheduleInputDto> for ScheduleInput {
    type Error = Error;

    fn try_from(dto: ScheduleInputDto) -> Result<Self> {
        let mut roster = Roster::new();
        for employee_dto in dto.employees {
            roster.add(Employee::try_from(employee_dto)?)?;
        }

        let mut calendar = WeeklyCalendar::new(dto.restaurant);
        for vacancy_dto in &dto.vacancies {
            let day = Day::try_from(&vacancy_dto.day)?;
            calendar.add_vacancy(day.index() as u8, vacancy_dto.start, vacancy_dto.end, vacancy_dto.capacity)?;
        }

        log::info!("Schedule input for '{}' built: {} employees, {} vacancies.", calendar.name(), roster.len(), calendar.vacancy_count());

        Ok(ScheduleInput { roster, calendar, config: dto.scheduler })
    }
}

impl TryFrom<EmployeeDto> for Employee {
    type Error = Error;

    fn try_from(dto: EmployeeDto) -> Result<Self> {
        let constraints = ShiftConstraints::new(dto.min_weekly_hours, dto.max_weekly_hours, dto.min_shift_length, dto.max_shift_length)
            .map_err(|e| match e {
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("employee '{}': {}", dto.name, msg)),
                other => other,
            })?;

        let mut employee = Employee::new(dto.name, dto.email, constraints);
        for busy in &dto.unavailable {
            employee = employee.with_unavailable_hours(Day::try_from(&busy.day)?, busy.start, busy.end)?;
        }

        Ok(employee)
    }
}
