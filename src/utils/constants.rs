use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::TimeStep;
use crate::utils::errors::SchedulingError;

/// Upper bound for every normalized time quantity (period, wcet, offset, deadline, horizon).
pub const MAX_TIME: TimeStep = 10_000;

/// Horizon used when the caller does not request one.
pub const DEFAULT_HORIZON: TimeStep = 50;

pub const DEFAULT_PERIOD: TimeStep = 1;
pub const DEFAULT_WCET: TimeStep = 1;
pub const DEFAULT_OFFSET: TimeStep = 0;

/// A deadline of 0 means "use the period".
pub const DEFAULT_DEADLINE: TimeStep = 0;

/// Period given to a freshly added task row.
pub const NEW_TASK_PERIOD: TimeStep = 4;

/// Exit code used when the input cannot be read.
pub const INPUT_ERROR_CODE: i32 = 5;

#[derive(Debug, PartialEq)]
pub enum SchedulingCode {
    Schedulable = 0,
    Unschedulable = 2,
}

impl SchedulingCode {
    pub fn from_verdict(schedulable: bool) -> Self {
        if schedulable {
            SchedulingCode::Schedulable
        } else {
            SchedulingCode::Unschedulable
        }
    }
}

/// Priority assignment used to pick the running job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    #[serde(rename = "rm")]
    RateMonotonic,
    #[serde(rename = "edf")]
    EarliestDeadlineFirst,
}

impl Policy {
    pub fn label(&self) -> &'static str {
        match self {
            Policy::RateMonotonic => "RM",
            Policy::EarliestDeadlineFirst => "EDF",
        }
    }
}

impl FromStr for Policy {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rm" => Ok(Policy::RateMonotonic),
            "edf" => Ok(Policy::EarliestDeadlineFirst),
            _ => Err(SchedulingError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(SchedulingError::UnknownFormat(s.to_string())),
        }
    }
}
