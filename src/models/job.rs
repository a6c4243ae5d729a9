use crate::TimeStep;

use super::ID;

/// One release of a periodic task.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    task_id: ID,                    // Identifier for the associated task
    task_period: TimeStep,          // Period of the task, the RM priority
    release: TimeStep,              // Instant the job became ready
    remaining_time: TimeStep,       // Remaining execution time for the job
    absolute_deadline: TimeStep,    // release + relative deadline
}

impl Job {
    pub fn new(
        task_id: ID,
        task_period: TimeStep,
        remaining_time: TimeStep,
        release: TimeStep,
        absolute_deadline: TimeStep,
    ) -> Self {
        Self {
            task_id,
            task_period,
            release,
            remaining_time,
            absolute_deadline,
        }
    }

    pub fn task_id(&self) -> ID {
        self.task_id
    }

    pub fn task_period(&self) -> TimeStep {
        self.task_period
    }

    pub fn release(&self) -> TimeStep {
        self.release
    }

    pub fn remaining_time(&self) -> TimeStep {
        self.remaining_time
    }

    pub fn absolute_deadline(&self) -> TimeStep {
        self.absolute_deadline
    }

    /// A job that finishes exactly at its deadline is on time.
    pub fn deadline_missed(&self, t: TimeStep) -> bool {
        self.remaining_time > 0 && t >= self.absolute_deadline
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    pub fn schedule(&mut self, n_steps: TimeStep) {
        self.remaining_time = self.remaining_time.saturating_sub(n_steps);
    }
}
