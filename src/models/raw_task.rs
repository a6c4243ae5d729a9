//! Raw task descriptors and their normalization into a [`TaskSet`].

use serde::{Deserialize, Serialize};

use super::{Task, TaskSet, TimeStep, ID};
use crate::utils::clamp_int;
use crate::utils::constants::{
    DEFAULT_DEADLINE, DEFAULT_HORIZON, DEFAULT_OFFSET, DEFAULT_PERIOD, DEFAULT_WCET, MAX_TIME,
    NEW_TASK_PERIOD,
};

/// A task as handed over by the configuration side: every field may be missing
/// and numbers are not yet range checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<ID>,
    #[serde(default, alias = "chegada")]
    pub offset: Option<f64>,
    #[serde(default, alias = "tempo", alias = "computation")]
    pub wcet: Option<f64>,
    #[serde(default, alias = "periodo")]
    pub period: Option<f64>,
    #[serde(default)]
    pub deadline: Option<f64>,
}

impl RawTask {
    pub fn new(offset: f64, wcet: f64, deadline: f64, period: f64) -> Self {
        Self {
            id: None,
            offset: Some(offset),
            wcet: Some(wcet),
            period: Some(period),
            deadline: Some(deadline),
        }
    }

    /// The row a configuration form starts from when a task is added.
    pub fn default_task(id: ID) -> Self {
        Self {
            id: Some(id),
            offset: Some(DEFAULT_OFFSET as f64),
            wcet: Some(DEFAULT_WCET as f64),
            period: Some(NEW_TASK_PERIOD as f64),
            deadline: Some(DEFAULT_DEADLINE as f64),
        }
    }

    pub fn with_id(mut self, id: ID) -> Self {
        self.id = Some(id);
        self
    }

    /// Clamps every field; `position` is the 0-based index in the input.
    pub fn normalize(&self, position: usize) -> Task {
        let period = clamp_int(self.period.or(Some(DEFAULT_PERIOD as f64)), 1, MAX_TIME);
        let wcet = clamp_int(self.wcet.or(Some(DEFAULT_WCET as f64)), 1, MAX_TIME);
        let offset = clamp_int(self.offset.or(Some(DEFAULT_OFFSET as f64)), 0, MAX_TIME);
        let deadline = match clamp_int(self.deadline.or(Some(DEFAULT_DEADLINE as f64)), 0, MAX_TIME) {
            0 => period,
            d => d,
        };
        let id = self.id.unwrap_or(position as ID + 1);

        Task::new(id, offset, wcet, deadline, period)
    }
}

/// Clamps a requested horizon; `None` falls back to the default horizon.
pub fn normalize_horizon(horizon: Option<f64>) -> TimeStep {
    match horizon {
        None => DEFAULT_HORIZON,
        requested => clamp_int(requested, 1, MAX_TIME),
    }
}

/// Turns raw descriptors and a requested horizon into the canonical input of
/// the scheduler. Duplicate ids are left as they are.
pub fn normalize(raw_tasks: &[RawTask], horizon: Option<f64>) -> (TaskSet, TimeStep) {
    let tasks = raw_tasks
        .iter()
        .enumerate()
        .map(|(position, raw)| raw.normalize(position))
        .collect();

    (TaskSet::new(tasks), normalize_horizon(horizon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let (set, horizon) = normalize(&[RawTask::default()], None);
        let task = &set.get_tasks()[0];

        assert_eq!(horizon, DEFAULT_HORIZON);
        assert_eq!(task.id(), 1);
        assert_eq!(task.period(), 1);
        assert_eq!(task.wcet(), 1);
        assert_eq!(task.offset(), 0);
        assert_eq!(task.deadline(), 1);
    }

    #[test]
    fn test_zero_deadline_uses_period() {
        let task = RawTask::new(0.0, 2.0, 0.0, 7.0).normalize(0);
        assert_eq!(task.deadline(), 7);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let raw = RawTask::new(-4.0, 0.0, 20_000.0, f64::NAN);
        let task = raw.normalize(2);

        assert_eq!(task.id(), 3);
        assert_eq!(task.offset(), 0);
        assert_eq!(task.wcet(), 1);
        assert_eq!(task.deadline(), MAX_TIME);
        assert_eq!(task.period(), 1);
    }

    #[test]
    fn test_fractional_values_are_floored() {
        let task = RawTask::new(1.9, 2.5, 3.99, 4.2).normalize(0);
        assert_eq!(task.offset(), 1);
        assert_eq!(task.wcet(), 2);
        assert_eq!(task.deadline(), 3);
        assert_eq!(task.period(), 4);
    }

    #[test]
    fn test_explicit_ids_are_kept_even_when_duplicated() {
        let raw = vec![
            RawTask::default().with_id(7),
            RawTask::default(),
            RawTask::default().with_id(7),
        ];
        let (set, _) = normalize(&raw, Some(10.0));
        let ids: Vec<ID> = set.iter().map(|t| t.id()).collect();

        assert_eq!(ids, vec![7, 2, 7]);
    }

    #[test]
    fn test_horizon_clamping() {
        assert_eq!(normalize_horizon(Some(0.0)), 1);
        assert_eq!(normalize_horizon(Some(-3.0)), 1);
        assert_eq!(normalize_horizon(Some(f64::NAN)), 1);
        assert_eq!(normalize_horizon(Some(12.7)), 12);
        assert_eq!(normalize_horizon(Some(1e9)), MAX_TIME);
    }

    #[test]
    fn test_default_task_row() {
        let task = RawTask::default_task(4).normalize(0);
        assert_eq!(task, Task::new(4, 0, 1, 4, 4));
    }

    #[test]
    fn test_deserialize_descriptor_field_names() {
        let raw: RawTask =
            serde_json::from_str(r#"{"chegada": 2, "tempo": 3, "periodo": 8, "deadline": 0}"#)
                .unwrap();
        let task = raw.normalize(0);

        assert_eq!(task, Task::new(1, 2, 3, 8, 8));
    }
}
