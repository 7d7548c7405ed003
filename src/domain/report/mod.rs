pub mod render;
pub mod schedule_report;
