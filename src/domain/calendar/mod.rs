pub mod availability;
pub mod day;
