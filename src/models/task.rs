use serde::Serialize;

use super::{job::Job, TimeStep, ID};

/// A normalized periodic task. The deadline is always > 0.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Task {
    id: ID,
    offset: TimeStep,   // O_i : First release.
    wcet: TimeStep,     // C_i : Execution time per job.
    deadline: TimeStep, // D_i : Relative deadline.
    period: TimeStep,   // T_i : Period.
}

impl Task {
    pub fn new(
        id: ID,
        offset: TimeStep,
        wcet: TimeStep,
        deadline: TimeStep,
        period: TimeStep,
    ) -> Self {
        Self {
            id,
            offset,
            wcet,
            deadline,
            period,
        }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn offset(&self) -> TimeStep {
        self.offset
    }

    pub fn wcet(&self) -> TimeStep {
        self.wcet
    }

    pub fn deadline(&self) -> TimeStep {
        self.deadline
    }

    pub fn period(&self) -> TimeStep {
        self.period
    }

    pub fn utilisation(&self) -> f64 {
        self.wcet as f64 / self.period as f64
    }

    /// Whether `t` lies before the first release of this task.
    pub fn not_released_yet(&self, t: TimeStep) -> bool {
        t < self.offset
    }

    /// Creates the job released at instant `t`.
    pub fn spawn_job(&self, t: TimeStep) -> Job {
        Job::new(self.id, self.period, self.wcet, t, t + self.deadline)
    }
}
