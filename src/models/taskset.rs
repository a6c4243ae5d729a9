use serde::Serialize;

use super::{Task, TimeStep, ID};
use crate::utils::constants::MAX_TIME;
use crate::utils::multiple_lcm;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn get_tasks(&self) -> &Vec<Task> {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get_task_by_id(&self, id: ID) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn utilisation(&self) -> f64 {
        self.tasks.iter().map(|t| t.utilisation()).sum()
    }

    pub fn max_offset(&self) -> TimeStep {
        self.tasks.iter().map(|t| t.offset()).max().unwrap_or(0)
    }

    /// Least common multiple of the periods (1 for an empty set).
    pub fn hyperperiod(&self) -> TimeStep {
        multiple_lcm(&self.tasks.iter().map(|t| t.period()).collect::<Vec<_>>())
    }

    /// `max offset + hyperperiod`, clamped to the simulation range.
    pub fn feasibility_horizon(&self) -> TimeStep {
        self.max_offset()
            .saturating_add(self.hyperperiod())
            .clamp(1, MAX_TIME)
    }

    pub fn iter(&self) -> std::slice::Iter<Task> {
        self.tasks.iter()
    }
}
