use serde::Serialize;

use crate::domain::calendar::day::Day;
use crate::domain::employee::roster::{EmployeeId, Roster};
use crate::domain::engine::comparator::sorted_by_load;
use crate::domain::vacancy::vacancy::{Block, Vacancy};
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessOutcome {
    pub swaps: usize,
    pub hours_moved: u32,
}

/// Single left-to-right sweep that hands assigned spans over to other employees.
///
/// Candidates are tried in ascending order of hours scheduled at the start of the
/// sweep (roster order on ties); that order is not refreshed during the sweep.
/// For a block held by `current`, the span is `current.min_shift_length` hours
/// from the block's hour. A candidate takes it over iff
/// - the candidate is below their weekly maximum,
/// - the span lies inside the vacancy and every block of it in the same lane is held by `current`,
/// - the candidate is free for the whole span,
/// - the span fits into the candidate's remaining weekly hours.
///
/// At most one swap happens per block. Unfilled blocks are never revisited and an
/// impossible swap is simply skipped.
pub fn redistribute(roster: &mut Roster, calendar: &mut WeeklyCalendar) -> FairnessOutcome {
    let candidates = sorted_by_load(roster);
    let mut outcome = FairnessOutcome::default();

    for day in Day::week() {
        for vacancy in calendar.vacancies_mut(day) {
            for lane in 0..vacancy.capacity() {
                for hour in vacancy.start_time()..vacancy.end_time() {
                    let Some(current) = vacancy.block_at(hour, lane).and_then(|block| block.employee()) else {
                        continue;
                    };

                    let Some(span) = roster.get(current).map(|employee| employee.constraints().min_shift_length()) else {
                        continue;
                    };

                    let end = hour + span;
                    if end > vacancy.end_time() || !vacancy.lane_held_by(lane, hour, end, current) {
                        continue;
                    }

                    for &candidate in &candidates {
                        if candidate == current || !can_swap(roster, candidate, day, hour, end) {
                            continue;
                        }

                        if swap_span(roster, vacancy, lane, current, candidate, hour, end) {
                            outcome.swaps += 1;
                            outcome.hours_moved += span as u32;
                            break;
                        }
                    }
                }
            }
        }
    }

    outcome
}

fn can_swap(roster: &Roster, candidate: EmployeeId, day: Day, start: u8, end: u8) -> bool {
    match roster.get(candidate) {
        Some(employee) => employee.has_capacity() && employee.is_free(day, start, end) && employee.can_take((end - start) as u32),
        None => false,
    }
}

/// Moves `[start, end)` of `lane` from `current` to `candidate` through `release` and
/// `commit`. If the candidate's commit fails, the span is given back to `current`.
fn swap_span(roster: &mut Roster, vacancy: &mut Vacancy, lane: usize, current: EmployeeId, candidate: EmployeeId, start: u8, end: u8) -> bool {
    let day = vacancy.day();

    let released = match roster.get_mut(current) {
        Some(employee) => employee.release(day, start, end),
        None => return false,
    };
    if let Err(e) = released {
        log::error!("Release of {} [{}, {}) failed: {}", day, start, end, e);
        return false;
    }

    let committed = match roster.get_mut(candidate) {
        Some(employee) => employee.commit(day, start, end),
        None => return restore(roster, current, day, start, end),
    };

    match committed {
        Ok(()) => {
            vacancy.set_span(lane, start, end, Block::AssignedTo(candidate));
            log::debug!(
                "{} [{}, {}) lane {} moved from '{}' to '{}'.",
                day,
                start,
                end,
                lane,
                roster.name_of(current).map(|n| n.as_str()).unwrap_or("?"),
                roster.name_of(candidate).map(|n| n.as_str()).unwrap_or("?")
            );
            true
        }
        Err(e) => {
            log::error!("Commit of {} [{}, {}) during swap failed: {}", day, start, end, e);
            restore(roster, current, day, start, end)
        }
    }
}

// Always `false`: the swap did not happen.
fn restore(roster: &mut Roster, current: EmployeeId, day: Day, start: u8, end: u8) -> bool {
    if let Some(Err(e)) = roster.get_mut(current).map(|employee| employee.commit(day, start, end)) {
        log::error!("Could not give {} [{}, {}) back to its previous holder: {}", day, start, end, e);
    }
    false
}
