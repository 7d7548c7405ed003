pub mod assignment_engine;
pub mod comparator;
pub mod fairness;
pub mod fill_strategy;
pub mod hourly_greedy;
pub mod scheduler_config;
pub mod shift_candidate;
