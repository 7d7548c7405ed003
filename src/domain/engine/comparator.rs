use std::cmp::Ordering;

use crate::domain::employee::employee::Employee;
use crate::domain::employee::roster::{EmployeeId, Roster};

/// Compares employees by the hours scheduled so far.
///
/// Note: if both have the same number of hours, their roster positions are compared,
/// so the ordering is total and deterministic.
pub struct LoadCompare;

impl LoadCompare {
    /// Returns `Ordering::Less` if the first employee has fewer hours scheduled
    /// (or the same hours and an earlier roster position).
    pub fn compare(first: (&Employee, usize), second: (&Employee, usize)) -> Ordering {
        first.0.hours_scheduled().cmp(&second.0.hours_scheduled()).then(first.1.cmp(&second.1))
    }
}

/// The eligible employee with the fewest hours scheduled, earliest in the roster on ties.
pub fn least_loaded(roster: &Roster, eligible: impl Fn(&Employee) -> bool) -> Option<EmployeeId> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, (_, employee))| eligible(*employee))
        .min_by(|(pos_a, (_, a)), (pos_b, (_, b))| LoadCompare::compare((*a, *pos_a), (*b, *pos_b)))
        .map(|(_, (id, _))| id)
}

/// All employees sorted ascending by hours scheduled. The sort is stable, so
/// roster order breaks ties.
pub fn sorted_by_load(roster: &Roster) -> Vec<EmployeeId> {
    let mut ranked: Vec<(usize, EmployeeId, &Employee)> = roster.iter().enumerate().map(|(pos, (id, employee))| (pos, id, employee)).collect();
    ranked.sort_by(|a, b| LoadCompare::compare((a.2, a.0), (b.2, b.0)));

    ranked.into_iter().map(|(_, id, _)| id).collect()
}
