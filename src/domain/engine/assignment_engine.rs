use crate::domain::calendar::day::Day;
use crate::domain::employee::roster::Roster;
use crate::domain::engine::fairness::{FairnessOutcome, redistribute};
use crate::domain::engine::fill_strategy::{FillOutcome, FillStrategy};
use crate::domain::engine::scheduler_config::SchedulerConfig;
use crate::domain::report::schedule_report::ScheduleReport;
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;

/// Assigns the roster to the vacancies of a weekly calendar.
///
/// A run takes exclusive mutable access to the roster and the calendar: the fill pass
/// walks days Monday to Sunday, vacancies in declaration order, and lets the configured
/// [`FillStrategy`] write every block; the optional fairness pass then sweeps once over
/// the result. Neither pass fails: blocks nobody could take stay `Unfilled`.
#[derive(Debug)]
pub struct AssignmentEngine {
    config: SchedulerConfig,
    strategy: Box<dyn FillStrategy>,
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl AssignmentEngine {
    pub fn new(config: SchedulerConfig) -> Self {
        AssignmentEngine { config, strategy: config.strategy.get_instance() }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn run(&self, roster: &mut Roster, calendar: &mut WeeklyCalendar) -> ScheduleReport {
        log::info!(
            "Scheduling {} employees into {} vacancies ({} blocks) of '{}' with {}.",
            roster.len(),
            calendar.vacancy_count(),
            calendar.total_blocks(),
            calendar.name(),
            self.strategy.name()
        );

        let fill = self.fill_pass(roster, calendar);
        log::info!("Fill pass done: {} blocks assigned, {} unfilled.", fill.assigned, fill.unfilled);

        let fairness = if self.config.fairness_pass {
            let outcome = redistribute(roster, calendar);
            log::info!("Fairness pass done: {} swaps, {} hours moved.", outcome.swaps, outcome.hours_moved);
            outcome
        } else {
            log::info!("Fairness pass disabled.");
            FairnessOutcome::default()
        };

        for (_, employee) in roster.iter() {
            if employee.is_below_minimum() {
                log::warn!(
                    "'{}' is scheduled for {} hours, below their weekly minimum of {}.",
                    employee.name(),
                    employee.hours_scheduled(),
                    employee.constraints().min_weekly_hours()
                );
            }
        }

        ScheduleReport::new(&self.config, roster, calendar, fill, fairness)
    }

    pub fn fill_pass(&self, roster: &mut Roster, calendar: &mut WeeklyCalendar) -> FillOutcome {
        let mut outcome = FillOutcome::default();

        for day in Day::week() {
            for vacancy in calendar.vacancies_mut(day) {
                outcome += self.strategy.fill_vacancy(roster, vacancy);
            }
        }

        outcome
    }
}

/// Runs the engine once with `config`.
pub fn schedule_employees(roster: &mut Roster, calendar: &mut WeeklyCalendar, config: SchedulerConfig) -> ScheduleReport {
    AssignmentEngine::new(config).run(roster, calendar)
}
