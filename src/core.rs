use serde::Serialize;
use tracing::{info, warn};

use crate::models::scheduler::simulate;
use crate::models::{first_miss, is_schedulable, normalize, RawTask, State, Timeline};
use crate::utils::{Policy, SchedulingCode};
use crate::{TaskSet, TimeStep, ID};

/// Everything a consumer of one run needs: the normalized input, one timeline
/// per task (in input order) and the verdict. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    policy: Policy,
    horizon: TimeStep,
    tasks: TaskSet,
    timelines: Vec<Timeline>,
    schedulable: bool,
}

impl SimulationResult {
    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn horizon(&self) -> TimeStep {
        self.horizon
    }

    pub fn tasks(&self) -> &TaskSet {
        &self.tasks
    }

    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    pub fn is_schedulable(&self) -> bool {
        self.schedulable
    }

    pub fn code(&self) -> SchedulingCode {
        SchedulingCode::from_verdict(self.schedulable)
    }

    pub fn first_miss(&self) -> Option<(ID, TimeStep)> {
        first_miss(&self.timelines)
    }

    /// Percentage of `(task, t)` cells with `t < until` in which the task
    /// executes (`exe` or `miss`). 0 when there is nothing to count.
    pub fn execution_ratio(&self, until: TimeStep) -> f64 {
        let mut executing = 0usize;
        let mut total = 0usize;

        for timeline in &self.timelines {
            let cells = &timeline.states()[..until.min(timeline.len())];
            total += cells.len();
            executing += cells.iter().filter(|s| s.is_executing()).count();
        }

        if total == 0 {
            0.0
        } else {
            executing as f64 / total as f64 * 100.0
        }
    }

    /// States of every task at instant `t`, `None` past the horizon.
    pub fn snapshot(&self, t: TimeStep) -> Option<Vec<(ID, State)>> {
        self.timelines
            .iter()
            .map(|timeline| timeline.get(t).map(|state| (timeline.task_id(), state)))
            .collect()
    }
}

/// Simulates an already normalized task set and evaluates the verdict.
pub fn simulation(tasks: TaskSet, horizon: TimeStep, policy: Policy) -> SimulationResult {
    let timelines = simulate(&tasks, horizon, policy);
    let schedulable = is_schedulable(&timelines);

    if schedulable {
        info!(%policy, horizon, tasks = tasks.len(), "task set schedulable over the horizon");
    } else if let Some((task, t)) = first_miss(&timelines) {
        warn!(%policy, horizon, task, t, "deadline miss");
    }

    SimulationResult {
        policy,
        horizon,
        tasks,
        timelines,
        schedulable,
    }
}

/// Normalizer, scheduler and verdict in one call.
pub fn run(raw_tasks: &[RawTask], horizon: Option<f64>, policy: Policy) -> SimulationResult {
    let (tasks, horizon) = normalize(raw_tasks, horizon);
    simulation(tasks, horizon, policy)
}
