use std::cmp::Ordering;

use super::scheduler::{tie_break, Scheduler};
use crate::Job;

/// Earliest Deadline First: dynamic priority, the earliest absolute deadline wins.
pub struct EarliestDeadlineFirst;

impl Scheduler for EarliestDeadlineFirst {
    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.absolute_deadline()
            .cmp(&b.absolute_deadline())
            .then_with(|| tie_break(a, b))
    }
}
