mod job;
pub mod raw_task;
pub mod scheduler;
pub mod task;
pub mod taskset;
pub mod timeline;
pub mod verdict;

pub use job::Job;
pub use raw_task::{normalize, normalize_horizon, RawTask};
pub use task::Task;
pub use taskset::TaskSet;
pub use timeline::{State, Timeline};
pub use verdict::{first_miss, is_schedulable};

pub type TimeStep = usize;

pub type ID = u32;
