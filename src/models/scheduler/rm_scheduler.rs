use std::cmp::Ordering;

use super::scheduler::{tie_break, Scheduler};
use crate::Job;

/// Rate Monotonic: fixed priority, the shorter period wins.
pub struct RateMonotonic;

impl Scheduler for RateMonotonic {
    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.task_period()
            .cmp(&b.task_period())
            .then_with(|| tie_break(a, b))
    }
}
