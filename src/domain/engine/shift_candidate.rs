use std::cmp::Reverse;

use crate::domain::calendar::day::Day;
use crate::domain::employee::employee::Employee;
use crate::domain::employee::roster::{EmployeeId, Roster};
use crate::domain::engine::fill_strategy::{FillOutcome, FillStrategy, assign_span};
use crate::domain::vacancy::vacancy::{Block, Vacancy};

/// A contiguous shift one employee could take, starting at the first open hour of a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCandidate {
    pub employee: EmployeeId,
    pub position: usize,
    pub hours_scheduled: u32,
    pub start: u8,
    pub length: u8,

    /// Contiguous available hours from `start` to the end of the vacancy.
    pub run: u8,
}

impl ShiftCandidate {
    /// Builds the candidate of `employee` for the shift starting at `start`, or `None`
    /// if they cannot cover a legal shift there.
    ///
    /// The shift covers the whole availability run when it fits into `max_shift_length`,
    /// otherwise exactly `min_shift_length` hours, capped by the remaining weekly
    /// capacity. It must be at least `min_shift_length` long unless the vacancy ends sooner.
    pub fn build(employee: &Employee, id: EmployeeId, position: usize, day: Day, start: u8, vacancy_end: u8) -> Option<Self> {
        if !employee.has_capacity() {
            return None;
        }

        let constraints = employee.constraints();
        let run = employee.calendar().available_run(day, start, vacancy_end);
        if run == 0 {
            return None;
        }

        let preferred = if run > constraints.max_shift_length() { constraints.min_shift_length() } else { run };
        let capacity = employee.remaining_capacity().min(u8::MAX as u32) as u8;
        let length = preferred.min(capacity);

        let required = constraints.min_shift_length().min(vacancy_end - start);
        if length == 0 || length < required {
            return None;
        }

        Some(ShiftCandidate { employee: id, position, hours_scheduled: employee.hours_scheduled(), start, length, run })
    }

    /// Least hours scheduled first, then the most available, then roster order.
    fn priority(&self) -> (u32, Reverse<u8>, usize) {
        (self.hours_scheduled, Reverse(self.run), self.position)
    }
}

/// Fills a vacancy with whole shifts instead of single hours.
///
/// At the first open hour of a lane every employee proposes a [`ShiftCandidate`];
/// the best one is committed as a unit and the scan continues after it. When nobody
/// qualifies the hour stays unfilled and the scan moves on by one hour.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShiftCandidateStrategy;

impl ShiftCandidateStrategy {
    pub fn best_candidate(roster: &Roster, day: Day, start: u8, vacancy_end: u8) -> Option<ShiftCandidate> {
        roster
            .iter()
            .enumerate()
            .filter_map(|(position, (id, employee))| ShiftCandidate::build(employee, id, position, day, start, vacancy_end))
            .min_by_key(ShiftCandidate::priority)
    }
}

impl FillStrategy for ShiftCandidateStrategy {
    fn name(&self) -> &'static str {
        "ShiftCandidate"
    }

    fn fill_vacancy(&self, roster: &mut Roster, vacancy: &mut Vacancy) -> FillOutcome {
        let day = vacancy.day();
        let end = vacancy.end_time();
        let mut outcome = FillOutcome::default();

        for lane in 0..vacancy.capacity() {
            let mut hour = vacancy.start_time();

            while hour < end {
                let candidate = Self::best_candidate(roster, day, hour, end);

                match candidate {
                    Some(shift) if assign_span(roster, vacancy, lane, shift.employee, hour, hour + shift.length) => {
                        outcome.assigned += shift.length as usize;
                        hour += shift.length;
                    }
                    _ => {
                        log::debug!("{} {}:00 lane {} has no shift candidate.", day, hour, lane);
                        vacancy.set_span(lane, hour, hour + 1, Block::Unfilled);
                        outcome.unfilled += 1;
                        hour += 1;
                    }
                }
            }
        }

        outcome
    }
}
