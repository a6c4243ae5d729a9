pub mod clamp;
pub mod constants;
pub mod errors;
pub mod lcm;

pub use clamp::clamp_int;
pub use constants::{OutputFormat, Policy, SchedulingCode};
pub use errors::SchedulingError;
pub use lcm::multiple_lcm;
