//! Preemptive uniprocessor simulation of periodic task sets under Rate
//! Monotonic or Earliest Deadline First, producing a per-unit timeline for
//! every task and a schedulability verdict over a finite horizon.

pub mod core;
pub mod input;
pub mod models;
pub mod report;
pub mod utils;

pub use crate::core::{run, simulation, SimulationResult};
pub use models::scheduler::simulate;
pub use models::*;
pub use utils::constants;
pub use utils::{OutputFormat, Policy, SchedulingCode, SchedulingError};
