use crate::domain::employee::roster::Roster;
use crate::domain::engine::comparator::least_loaded;
use crate::domain::engine::fill_strategy::{FillOutcome, FillStrategy, assign_span};
use crate::domain::vacancy::vacancy::{Block, Vacancy};

/// Fills a vacancy one hour block at a time.
///
/// Each opening (lane) is walked chronologically. For every block the employee with
/// the fewest hours scheduled among those with remaining weekly capacity and a free
/// calendar hour gets exactly that hour; roster order breaks ties.
///
/// There is no lookahead for `min_shift_length`, so an employee can end up with an
/// isolated single hour even when their minimum shift is longer.
#[derive(Debug, Default, Clone, Copy)]
pub struct HourlyGreedy;

impl FillStrategy for HourlyGreedy {
    fn name(&self) -> &'static str {
        "HourlyGreedy"
    }

    fn fill_vacancy(&self, roster: &mut Roster, vacancy: &mut Vacancy) -> FillOutcome {
        let day = vacancy.day();
        let mut outcome = FillOutcome::default();

        for lane in 0..vacancy.capacity() {
            for hour in vacancy.start_time()..vacancy.end_time() {
                let chosen = least_loaded(roster, |employee| employee.has_capacity() && employee.is_free(day, hour, hour + 1));

                let assigned = match chosen {
                    Some(employee) => assign_span(roster, vacancy, lane, employee, hour, hour + 1),
                    None => false,
                };

                if assigned {
                    outcome.assigned += 1;
                } else {
                    log::debug!("{} {}:00 lane {} has no eligible employee.", day, hour, lane);
                    vacancy.set_span(lane, hour, hour + 1, Block::Unfilled);
                    outcome.unfilled += 1;
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::day::Day;
    use crate::domain::employee::employee::{Employee, ShiftConstraints};

    #[test]
    fn alternates_between_equally_loaded_employees() {
        let mut roster = Roster::new();
        let john = roster.add(Employee::new("John", "john@mail.com", ShiftConstraints::default())).unwrap();
        let kate = roster.add(Employee::new("Kate", "kate@mail.com", ShiftConstraints::default())).unwrap();
        let mut vacancy = Vacancy::new(Day::MONDAY, 8, 12, 1).unwrap();

        let outcome = HourlyGreedy.fill_vacancy(&mut roster, &mut vacancy);

        assert_eq!(outcome, FillOutcome { assigned: 4, unfilled: 0 });
        assert_eq!(vacancy.blocks(), &[Block::AssignedTo(john), Block::AssignedTo(kate), Block::AssignedTo(john), Block::AssignedTo(kate)]);
    }

    #[test]
    fn ignores_minimum_shift_length() {
        let mut roster = Roster::new();
        let constraints = ShiftConstraints::new(0, 100, 4, 8).unwrap();
        let kate = roster.add(Employee::new("Kate", "kate@mail.com", constraints).with_unavailable_hours(Day::MONDAY, 9, 24).unwrap()).unwrap();
        let mut vacancy = Vacancy::new(Day::MONDAY, 8, 10, 1).unwrap();

        HourlyGreedy.fill_vacancy(&mut roster, &mut vacancy);

        assert_eq!(vacancy.blocks(), &[Block::AssignedTo(kate), Block::Unfilled]);
        assert_eq!(roster.get(kate).unwrap().hours_scheduled(), 1);
    }
}
