pub mod calendar;
pub mod employee;
pub mod engine;
pub mod report;
pub mod schedule_input;
pub mod utils;
pub mod vacancy;
