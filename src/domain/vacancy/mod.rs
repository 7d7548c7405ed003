pub mod vacancy;
pub mod weekly_calendar;
