use std::cmp::Ordering;

use crate::Job;

/// A uniprocessor priority rule. `compare` must be a strict total order on
/// jobs of distinct tasks: the smaller job runs.
pub trait Scheduler {
    fn compare(&self, a: &Job, b: &Job) -> Ordering;

    /// Index of the job to run among the ready jobs, `None` when there are none.
    fn schedule(&self, jobs: &[Job]) -> Option<usize> {
        jobs.iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| self.compare(a, b))
            .map(|(index, _)| index)
    }
}

/// Ties on the primary key go to the earlier release, then to the smaller task id.
pub fn tie_break(a: &Job, b: &Job) -> Ordering {
    a.release()
        .cmp(&b.release())
        .then_with(|| a.task_id().cmp(&b.task_id()))
}
