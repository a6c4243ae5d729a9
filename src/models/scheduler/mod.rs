pub mod scheduler;
pub mod rm_scheduler;
pub mod edf_scheduler;
pub mod simulator;

pub use scheduler::{tie_break, Scheduler};
pub use rm_scheduler::RateMonotonic;
pub use edf_scheduler::EarliestDeadlineFirst;
pub use simulator::{simulate, Simulation};

use crate::utils::Policy;

pub fn scheduler_for(policy: Policy) -> Box<dyn Scheduler> {
    match policy {
        Policy::RateMonotonic => Box::new(RateMonotonic),
        Policy::EarliestDeadlineFirst => Box::new(EarliestDeadlineFirst),
    }
}
