use colored::Colorize;
use std::fmt::Write;

use crate::domain::calendar::day::Day;
use crate::domain::employee::roster::Roster;
use crate::domain::vacancy::vacancy::Block;
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;

pub const UNFILLED_LABEL: &str = "EMPTY";

/// Renders the populated calendar day by day, one line per vacancy opening:
///
/// ```text
/// Day 0 (Monday):
///   From 8 to 16: [John, Kate, EMPTY, ...]
/// ```
pub fn render_schedule(calendar: &WeeklyCalendar, roster: &Roster, use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", header(calendar.name().as_str(), use_color));

    for day in Day::week() {
        let _ = writeln!(out, "Day {} ({}):", day.index(), day);

        for vacancy in calendar.vacancies(day) {
            for lane in 0..vacancy.capacity() {
                let labels: Vec<String> =
                    vacancy.lane(lane).unwrap_or_default().iter().map(|block| block_label(block, roster, use_color)).collect();

                if vacancy.capacity() > 1 {
                    let _ = writeln!(out, "  From {} to {} (opening {}): [{}]", vacancy.start_time(), vacancy.end_time(), lane + 1, labels.join(", "));
                } else {
                    let _ = writeln!(out, "  From {} to {}: [{}]", vacancy.start_time(), vacancy.end_time(), labels.join(", "));
                }
            }
        }
    }

    out
}

fn header(name: &str, use_color: bool) -> String {
    if use_color { name.bold().to_string() } else { name.to_string() }
}

fn block_label(block: &Block, roster: &Roster, use_color: bool) -> String {
    match block.employee().and_then(|id| roster.name_of(id)) {
        Some(name) if use_color => name.as_str().green().to_string(),
        Some(name) => name.to_string(),
        None if use_color => UNFILLED_LABEL.red().to_string(),
        None => UNFILLED_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::employee::{Employee, ShiftConstraints};
    use crate::domain::engine::assignment_engine::schedule_employees;
    use crate::domain::engine::scheduler_config::SchedulerConfig;

    #[test]
    fn renders_plain_schedule() {
        let mut roster = Roster::new();
        roster
            .add(Employee::new("John", "john@mail.com", ShiftConstraints::default()).with_unavailable_hours(Day::MONDAY, 9, 10).unwrap())
            .unwrap();
        let mut calendar = WeeklyCalendar::new("Bar");
        calendar.add_vacancy(0, 8, 10, 1).unwrap();
        calendar.add_vacancy(2, 12, 13, 2).unwrap();

        schedule_employees(&mut roster, &mut calendar, SchedulerConfig::default());
        let text = render_schedule(&calendar, &roster, false);

        assert!(text.starts_with("Bar\nDay 0 (Monday):\n  From 8 to 10: [John, EMPTY]\n"));
        assert!(text.contains("Day 2 (Wednesday):\n  From 12 to 13 (opening 1): [John]\n  From 12 to 13 (opening 2): [EMPTY]\n"));
        assert!(text.ends_with("Day 6 (Sunday):\n"));
    }
}
