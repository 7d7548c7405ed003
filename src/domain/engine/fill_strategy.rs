use std::fmt::Debug;
use std::ops::AddAssign;

use serde::Serialize;

use crate::domain::employee::roster::{EmployeeId, Roster};
use crate::domain::vacancy::vacancy::{Block, Vacancy};

/// Number of blocks a fill pass assigned or left unfilled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FillOutcome {
    pub assigned: usize,
    pub unfilled: usize,
}

impl AddAssign for FillOutcome {
    fn add_assign(&mut self, other: Self) {
        self.assigned += other.assigned;
        self.unfilled += other.unfilled;
    }
}

/// Matching rule of the fill pass.
///
/// Called once per vacancy, in day and declaration order. An implementation must
/// write every block of the vacancy, either with an employee (committed through
/// [`assign_span`]) or with [`Block::Unfilled`].
pub trait FillStrategy: Debug {
    fn name(&self) -> &'static str;

    fn fill_vacancy(&self, roster: &mut Roster, vacancy: &mut Vacancy) -> FillOutcome;
}

/// Commits `[start, end)` of `lane` to `employee`.
///
/// The employee's calendar and hour counter are updated first; the blocks are only
/// written if that commit succeeds, so both sides change together or not at all.
///
/// # Returns
/// `true` if the span was assigned.
pub(crate) fn assign_span(roster: &mut Roster, vacancy: &mut Vacancy, lane: usize, employee: EmployeeId, start: u8, end: u8) -> bool {
    let day = vacancy.day();

    let Some(staff) = roster.get_mut(employee) else {
        log::error!("Employee {:?} is not part of the roster. Block left unfilled.", employee);
        return false;
    };

    match staff.commit(day, start, end) {
        Ok(()) => {
            log::debug!("{} [{}, {}) lane {} assigned to '{}' ({} h scheduled).", day, start, end, lane, staff.name(), staff.hours_scheduled());
            vacancy.set_span(lane, start, end, Block::AssignedTo(employee));
            true
        }
        Err(e) => {
            log::error!("Commit of {} [{}, {}) failed although the employee was eligible: {}", day, start, end, e);
            false
        }
    }
}
