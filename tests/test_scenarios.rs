use shift_roster::domain::calendar::day::Day;
use shift_roster::domain::employee::employee::{Employee, ShiftConstraints};
use shift_roster::domain::employee::roster::{EmployeeId, Roster};
use shift_roster::domain::engine::assignment_engine::{AssignmentEngine, schedule_employees};
use shift_roster::domain::engine::scheduler_config::{FillStrategyType, SchedulerConfig};
use shift_roster::domain::vacancy::vacancy::Block;
use shift_roster::domain::vacancy::weekly_calendar::WeeklyCalendar;

fn available_employee(name: &str) -> Employee {
    Employee::new(name, format!("{}@mail.com", name.to_lowercase()), ShiftConstraints::default())
}

fn count_blocks(calendar: &WeeklyCalendar, employee: EmployeeId) -> usize {
    calendar.iter().flat_map(|vacancy| vacancy.blocks()).filter(|block| **block == Block::AssignedTo(employee)).count()
}

fn config(strategy: FillStrategyType, fairness_pass: bool) -> SchedulerConfig {
    SchedulerConfig { strategy, fairness_pass }
}

/// Scenario A: one fully available employee covers a whole Monday vacancy.
#[test]
fn single_employee_takes_whole_vacancy() {
    for strategy in [FillStrategyType::HourlyGreedy, FillStrategyType::ShiftCandidate] {
        let mut roster = Roster::new();
        let kate = roster.add(available_employee("Kate")).unwrap();
        let mut calendar = WeeklyCalendar::new("Bar");
        calendar.add_vacancy(0, 8, 16, 1).unwrap();

        let report = schedule_employees(&mut roster, &mut calendar, config(strategy, true));

        let vacancy = &calendar.vacancies(Day::MONDAY)[0];
        assert_eq!(vacancy.blocks().len(), 8);
        assert!(vacancy.blocks().iter().all(|block| *block == Block::AssignedTo(kate)), "{:?}", strategy);
        assert_eq!(roster.get(kate).unwrap().hours_scheduled(), 8);
        assert_eq!(report.filled_blocks, 8);
        assert_eq!(report.unfilled_blocks, 0);
        assert_eq!(report.fairness.swaps, 0);
    }
}

/// Scenario B: the capped employee never exceeds their weekly maximum.
#[test]
fn capped_employee_gets_at_most_two_blocks() {
    let mut roster = Roster::new();
    let capped = roster.add(Employee::new("Capped", "capped@mail.com", ShiftConstraints::new(0, 2, 1, 8).unwrap())).unwrap();
    let other = roster.add(available_employee("Other")).unwrap();
    let mut calendar = WeeklyCalendar::new("Bar");
    calendar.add_vacancy(2, 8, 16, 1).unwrap();

    let report = schedule_employees(&mut roster, &mut calendar, SchedulerConfig::default());

    assert_eq!(count_blocks(&calendar, capped), 2);
    assert_eq!(count_blocks(&calendar, other), 6);
    assert_eq!(roster.get(capped).unwrap().hours_scheduled(), 2);
    assert_eq!(roster.get(other).unwrap().hours_scheduled(), 6);
    assert_eq!(report.unfilled_blocks, 0);
}

#[test]
fn capped_employee_fill_pass_alternates_until_cap() {
    let mut roster = Roster::new();
    let capped = roster.add(Employee::new("Capped", "capped@mail.com", ShiftConstraints::new(0, 2, 1, 8).unwrap())).unwrap();
    let other = roster.add(available_employee("Other")).unwrap();
    let mut calendar = WeeklyCalendar::new("Bar");
    calendar.add_vacancy(2, 8, 16, 1).unwrap();

    schedule_employees(&mut roster, &mut calendar, config(FillStrategyType::HourlyGreedy, false));

    let wednesday = Day::new(2).unwrap();
    let lane = calendar.vacancies(wednesday)[0].lane(0).unwrap().to_vec();
    let mut expected = vec![Block::AssignedTo(other); 8];
    expected[0] = Block::AssignedTo(capped);
    expected[2] = Block::AssignedTo(capped);
    assert_eq!(lane, expected);
}

/// Scenario C: nobody is available, so every block stays unfilled.
#[test]
fn unavailable_employee_leaves_vacancy_unfilled() {
    for strategy in [FillStrategyType::HourlyGreedy, FillStrategyType::ShiftCandidate] {
        let mut roster = Roster::new();
        let john = roster.add(available_employee("John").with_unavailable_hours(Day::MONDAY, 6, 18).unwrap()).unwrap();
        let mut calendar = WeeklyCalendar::new("Bar");
        calendar.add_vacancy(0, 8, 16, 1).unwrap();

        let report = schedule_employees(&mut roster, &mut calendar, config(strategy, true));

        assert!(calendar.vacancies(Day::MONDAY)[0].blocks().iter().all(|block| *block == Block::Unfilled));
        assert_eq!(roster.get(john).unwrap().hours_scheduled(), 0);
        assert_eq!(report.unfilled_blocks, 8);
        assert_eq!(report.fill.unfilled, 8);
    }
}

/// Scenario D: two openings per hour are covered by two different employees.
#[test]
fn capacity_two_is_covered_by_both_employees() {
    for strategy in [FillStrategyType::HourlyGreedy, FillStrategyType::ShiftCandidate] {
        let mut roster = Roster::new();
        let john = roster.add(available_employee("John")).unwrap();
        let kate = roster.add(available_employee("Kate")).unwrap();
        let mut calendar = WeeklyCalendar::new("Bar");
        calendar.add_vacancy(4, 12, 16, 2).unwrap();

        schedule_employees(&mut roster, &mut calendar, config(strategy, true));

        let vacancy = &calendar.vacancies(Day::new(4).unwrap())[0];
        for hour in 12..16 {
            let mut occupants = vacancy.occupants_at(hour);
            occupants.sort();
            let mut expected = vec![john, kate];
            expected.sort();
            assert_eq!(occupants, expected, "{:?} at {}:00", strategy, hour);
        }
        assert_eq!(roster.get(john).unwrap().hours_scheduled(), 4);
        assert_eq!(roster.get(kate).unwrap().hours_scheduled(), 4);
    }
}

#[test]
fn days_are_filled_monday_first() {
    let mut roster = Roster::new();
    let kate = roster.add(Employee::new("Kate", "kate@mail.com", ShiftConstraints::new(0, 3, 1, 8).unwrap())).unwrap();
    let mut calendar = WeeklyCalendar::new("Bar");
    calendar.add_vacancy(6, 8, 10, 1).unwrap();
    calendar.add_vacancy(0, 8, 10, 1).unwrap();

    let engine = AssignmentEngine::new(config(FillStrategyType::HourlyGreedy, false));
    engine.run(&mut roster, &mut calendar);

    assert_eq!(calendar.vacancies(Day::MONDAY)[0].filled_blocks(), 2);
    assert_eq!(calendar.vacancies(Day::SUNDAY)[0].lane(0).unwrap(), &[Block::AssignedTo(kate), Block::Unfilled]);
}

#[test]
fn employee_named_empty_is_not_an_unfilled_block() {
    let mut roster = Roster::new();
    let empty = roster.add(available_employee("EMPTY")).unwrap();
    let mut calendar = WeeklyCalendar::new("Bar");
    calendar.add_vacancy(0, 8, 9, 1).unwrap();

    let report = schedule_employees(&mut roster, &mut calendar, SchedulerConfig::default());

    assert_eq!(calendar.vacancies(Day::MONDAY)[0].block_at(8, 0), Some(Block::AssignedTo(empty)));
    assert_eq!(report.filled_blocks, 1);
}

#[test]
fn report_flags_employees_below_weekly_minimum() {
    let mut roster = Roster::new();
    roster.add(Employee::new("Full", "full@mail.com", ShiftConstraints::new(2, 40, 1, 8).unwrap())).unwrap();
    roster.add(Employee::new("Short", "short@mail.com", ShiftConstraints::new(10, 40, 1, 8).unwrap())).unwrap();
    let mut calendar = WeeklyCalendar::new("Bar");
    calendar.add_vacancy(0, 8, 12, 1).unwrap();

    let report = schedule_employees(&mut roster, &mut calendar, config(FillStrategyType::HourlyGreedy, false));

    assert!(!report.employee("Full").unwrap().below_minimum);
    assert!(report.employee("Short").unwrap().below_minimum);
    assert_eq!(report.employee("Short").unwrap().hours_scheduled, 2);
}
