use crate::domain::calendar::day::{DAYS_PER_WEEK, Day};
use crate::domain::utils::id::RestaurantName;
use crate::domain::vacancy::vacancy::Vacancy;
use crate::error::{Error, Result};

/// The vacancies of one staffing entity for one week, bucketed by day
/// (Monday first) and kept in declaration order within each day.
#[derive(Debug, Clone)]
pub struct WeeklyCalendar {
    name: RestaurantName,
    days: [Vec<Vacancy>; DAYS_PER_WEEK],
}

impl WeeklyCalendar {
    pub fn new(name: impl Into<String>) -> Self {
        WeeklyCalendar { name: RestaurantName::new(name), days: Default::default() }
    }

    pub fn name(&self) -> &RestaurantName {
        &self.name
    }

    /// Declares a vacancy on `day` (0 = Monday) covering `[start_time, end_time)` with
    /// `capacity` simultaneous openings.
    pub fn add_vacancy(&mut self, day: u8, start_time: u8, end_time: u8, capacity: usize) -> Result<()> {
        let day = Day::new(day).map_err(|e| Error::ConfigurationError(e.to_string()))?;
        let vacancy = Vacancy::new(day, start_time, end_time, capacity)?;

        log::debug!("Vacancy added to '{}': {} [{}, {}) x{}.", self.name, day, start_time, end_time, capacity);
        self.days[day.index()].push(vacancy);

        Ok(())
    }

    pub fn vacancies(&self, day: Day) -> &[Vacancy] {
        &self.days[day.index()]
    }

    pub(crate) fn vacancies_mut(&mut self, day: Day) -> &mut [Vacancy] {
        &mut self.days[day.index()]
    }

    /// All vacancies of the week in scheduling order.
    pub fn iter(&self) -> impl Iterator<Item = &Vacancy> {
        self.days.iter().flatten()
    }

    pub fn vacancy_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn total_blocks(&self) -> usize {
        self.iter().map(|vacancy| vacancy.blocks().len()).sum()
    }

    pub fn filled_blocks(&self) -> usize {
        self.iter().map(Vacancy::filled_blocks).sum()
    }

    pub fn unfilled_blocks(&self) -> usize {
        self.total_blocks() - self.filled_blocks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacancies_keep_day_and_declaration_order() {
        let mut calendar = WeeklyCalendar::new("Bar Mleczny Apis");
        calendar.add_vacancy(0, 8, 16, 1).unwrap();
        calendar.add_vacancy(1, 10, 17, 1).unwrap();
        calendar.add_vacancy(1, 12, 16, 2).unwrap();

        let tuesday = Day::new(1).unwrap();
        let starts: Vec<u8> = calendar.vacancies(tuesday).iter().map(Vacancy::start_time).collect();

        assert_eq!(starts, vec![10, 12]);
        assert_eq!(calendar.vacancy_count(), 3);
        assert_eq!(calendar.total_blocks(), 8 + 7 + 8);
        assert_eq!(calendar.unfilled_blocks(), calendar.total_blocks());
    }

    #[test]
    fn rejects_invalid_day_and_bounds() {
        let mut calendar = WeeklyCalendar::new("Bar");
        assert!(matches!(calendar.add_vacancy(7, 8, 16, 1), Err(Error::ConfigurationError(_))));
        assert!(matches!(calendar.add_vacancy(0, 16, 8, 1), Err(Error::ConfigurationError(_))));
        assert_eq!(calendar.vacancy_count(), 0);
    }
}
