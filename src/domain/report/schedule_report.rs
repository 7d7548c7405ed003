use serde::Serialize;
use uuid::Uuid;

use crate::domain::employee::employee::Employee;
use crate::domain::employee::roster::Roster;
use crate::domain::engine::fairness::FairnessOutcome;
use crate::domain::engine::fill_strategy::FillOutcome;
use crate::domain::engine::scheduler_config::{FillStrategyType, SchedulerConfig};
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub name: String,
    pub email: String,
    pub hours_scheduled: u32,
    pub min_weekly_hours: u32,
    pub max_weekly_hours: u32,
    pub below_minimum: bool,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        EmployeeSummary {
            name: employee.name().to_string(),
            email: employee.email().to_string(),
            hours_scheduled: employee.hours_scheduled(),
            min_weekly_hours: employee.constraints().min_weekly_hours(),
            max_weekly_hours: employee.constraints().max_weekly_hours(),
            below_minimum: employee.is_below_minimum(),
        }
    }
}

/// Outcome of one scheduling run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub run_id: Uuid,
    pub restaurant: String,
    pub strategy: FillStrategyType,
    pub fairness_pass: bool,
    pub total_blocks: usize,
    pub filled_blocks: usize,
    pub unfilled_blocks: usize,
    pub fill: FillOutcome,
    pub fairness: FairnessOutcome,
    /// In roster order.
    pub employees: Vec<EmployeeSummary>,
}

impl ScheduleReport {
    pub fn new(config: &SchedulerConfig, roster: &Roster, calendar: &WeeklyCalendar, fill: FillOutcome, fairness: FairnessOutcome) -> Self {
        ScheduleReport {
            run_id: Uuid::new_v4(),
            restaurant: calendar.name().to_string(),
            strategy: config.strategy,
            fairness_pass: config.fairness_pass,
            total_blocks: calendar.total_blocks(),
            filled_blocks: calendar.filled_blocks(),
            unfilled_blocks: calendar.unfilled_blocks(),
            fill,
            fairness,
            employees: roster.iter().map(|(_, employee)| EmployeeSummary::from(employee)).collect(),
        }
    }

    pub fn employee(&self, name: &str) -> Option<&EmployeeSummary> {
        self.employees.iter().find(|summary| summary.name == name)
    }

    pub fn print_summary(&self) {
        log::info!("--- Schedule Summary ({}) ---", self.run_id);
        log::info!("Restaurant: {}", self.restaurant);
        log::info!("Strategy: {} (fairness pass: {})", self.strategy, self.fairness_pass);
        log::info!("Blocks: {} total, {} filled, {} unfilled", self.total_blocks, self.filled_blocks, self.unfilled_blocks);
        log::info!("Swaps: {} ({} hours moved)", self.fairness.swaps, self.fairness.hours_moved);

        for summary in &self.employees {
            log::info!(
                "  - {}: {} h (weekly {}..={}){}",
                summary.name,
                summary.hours_scheduled,
                summary.min_weekly_hours,
                summary.max_weekly_hours,
                if summary.below_minimum { " below minimum" } else { "" }
            );
        }
        log::info!("------------------------");
    }
}
