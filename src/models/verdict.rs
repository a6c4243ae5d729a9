use super::{Timeline, TimeStep, ID};

/// `true` iff no timeline contains a deadline miss.
pub fn is_schedulable(timelines: &[Timeline]) -> bool {
    !timelines.iter().any(|timeline| timeline.contains_miss())
}

/// Earliest instant at which any task shows a miss, with that task's id.
/// Ties go to the task listed first.
pub fn first_miss(timelines: &[Timeline]) -> Option<(ID, TimeStep)> {
    timelines
        .iter()
        .filter_map(|timeline| timeline.first_miss().map(|t| (timeline.task_id(), t)))
        .min_by_key(|&(_, t)| t)
}
