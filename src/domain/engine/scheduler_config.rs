use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::engine::fill_strategy::FillStrategy;
use crate::domain::engine::hourly_greedy::HourlyGreedy;
use crate::domain::engine::shift_candidate::ShiftCandidateStrategy;
use crate::error::Error;

/// Selects how the fill pass matches employees to vacancy blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum FillStrategyType {
    /// Hour by hour, least scheduled employee first. No shift length lookahead.
    #[default]
    #[serde(alias = "hourly-greedy", alias = "hourly_greedy")]
    HourlyGreedy,

    /// Whole contiguous shifts chosen from per-employee availability runs.
    #[serde(alias = "shift-candidate", alias = "shift_candidate")]
    ShiftCandidate,
}

impl FromStr for FillStrategyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != '-' && *c != '_').collect::<String>().to_lowercase();

        match normalized.as_str() {
            "hourlygreedy" => Ok(FillStrategyType::HourlyGreedy),
            "shiftcandidate" => Ok(FillStrategyType::ShiftCandidate),
            _ => Err(Error::ConfigurationError(format!("unknown fill strategy '{}'", s))),
        }
    }
}

impl fmt::Display for FillStrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStrategyType::HourlyGreedy => write!(f, "HourlyGreedy"),
            FillStrategyType::ShiftCandidate => write!(f, "ShiftCandidate"),
        }
    }
}

impl FillStrategyType {
    // Factory method for the concrete fill strategy
    pub fn get_instance(&self) -> Box<dyn FillStrategy> {
        match self {
            FillStrategyType::HourlyGreedy => Box::new(HourlyGreedy),
            FillStrategyType::ShiftCandidate => Box::new(ShiftCandidateStrategy),
        }
    }
}

/// Settings of one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    pub strategy: FillStrategyType,

    /// Run the fairness redistribution pass after the fill pass.
    pub fairness_pass: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig { strategy: FillStrategyType::default(), fairness_pass: true }
    }
}
