use std::collections::HashSet;

use tracing::{debug, debug_span, trace};

use super::{scheduler_for, Scheduler};
use crate::models::{State, Timeline};
use crate::utils::Policy;
use crate::{Job, TaskSet, TimeStep, ID};

/// Working state of one discrete-event run. Every call to [`simulate`] builds
/// a fresh one, nothing is shared between runs.
pub struct Simulation<'a> {
    taskset: &'a TaskSet,
    scheduler: Box<dyn Scheduler>,
    horizon: TimeStep,
    current_time: TimeStep,
    ready: Vec<Job>,                        // Released, unfinished jobs
    running: Option<usize>,                 // Index into `ready`
    next_release: Vec<TimeStep>,            // Aligned with the task set
    timelines: Vec<Timeline>,               // Aligned with the task set
    reported_misses: HashSet<(ID, TimeStep)>, // (task id, release) already logged
}

impl<'a> Simulation<'a> {
    pub fn new(taskset: &'a TaskSet, horizon: TimeStep, scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            taskset,
            scheduler,
            horizon,
            current_time: 0,
            ready: Vec::new(),
            running: None,
            next_release: taskset.iter().map(|task| task.offset()).collect(),
            timelines: taskset
                .iter()
                .map(|task| Timeline::new(task.id(), horizon))
                .collect(),
            reported_misses: HashSet::new(),
        }
    }

    /// Runs the release / election / advance loop until the horizon and
    /// returns one timeline per task, in task set order.
    pub fn run(mut self) -> Vec<Timeline> {
        while self.current_time < self.horizon {
            self.release_jobs();
            self.elect();

            let next_release = self.next_release_after(self.current_time);

            // Nothing to run: jump straight to the next release.
            if self.ready.is_empty() {
                let jump_to = next_release.map_or(self.horizon, |t| t.min(self.horizon));
                trace!(from = self.current_time, to = jump_to, "processor idle");
                self.fill(self.current_time, jump_to);
                self.current_time = jump_to;
                continue;
            }

            let finish = self
                .running
                .map(|index| self.current_time + self.ready[index].remaining_time());

            let next_event = [next_release, finish, Some(self.horizon)]
                .into_iter()
                .flatten()
                .min()
                .unwrap_or(self.horizon);

            self.fill(self.current_time, next_event);
            self.consume(next_event - self.current_time);
            self.current_time = next_event;
        }

        self.timelines
    }

    /// Adds a job to the ready set for every task releasing at the current time.
    fn release_jobs(&mut self) {
        let time = self.current_time;

        for (task, next_release) in self.taskset.iter().zip(self.next_release.iter_mut()) {
            if *next_release != time {
                continue;
            }

            let job = task.spawn_job(time);
            trace!(
                task = job.task_id(),
                time,
                deadline = job.absolute_deadline(),
                "job released"
            );
            self.ready.push(job);
            *next_release += task.period();
        }
    }

    /// Re-evaluates which ready job holds the processor.
    fn elect(&mut self) {
        let elected = self.scheduler.schedule(&self.ready);

        if let (Some(previous), Some(elected)) = (self.running, elected) {
            if previous != elected {
                debug!(
                    time = self.current_time,
                    preempted = self.ready[previous].task_id(),
                    by = self.ready[elected].task_id(),
                    "preemption"
                );
            }
        }

        self.running = elected;
    }

    fn next_release_after(&self, time: TimeStep) -> Option<TimeStep> {
        self.next_release.iter().copied().filter(|&t| t > time).min()
    }

    /// Labels every unit of `[from, to)` for every task.
    fn fill(&mut self, from: TimeStep, to: TimeStep) {
        let running_task = self.running.map(|index| self.ready[index].task_id());

        for (task, timeline) in self.taskset.iter().zip(self.timelines.iter_mut()) {
            let is_running = running_task == Some(task.id());
            let has_pending = self.ready.iter().any(|job| job.task_id() == task.id());

            // Earliest deadline among this task's unfinished jobs, backlog included.
            let overdue_from = self
                .ready
                .iter()
                .filter(|job| job.task_id() == task.id() && job.remaining_time() > 0)
                .map(|job| job.absolute_deadline())
                .min();

            for t in from..to {
                let state = if overdue_from.is_some_and(|deadline| deadline <= t) {
                    State::Miss
                } else if task.not_released_yet(t) {
                    State::Idle
                } else if is_running {
                    State::Exe
                } else if has_pending {
                    State::Wait
                } else {
                    State::Idle
                };
                timeline.set(t, state);
            }
        }

        for job in self.ready.iter().filter(|job| job.deadline_missed(to.saturating_sub(1))) {
            if self.reported_misses.insert((job.task_id(), job.release())) {
                debug!(
                    task = job.task_id(),
                    release = job.release(),
                    deadline = job.absolute_deadline(),
                    remaining = job.remaining_time(),
                    "deadline missed"
                );
            }
        }
    }

    /// Runs the elected job for `n_steps` and retires it once complete.
    fn consume(&mut self, n_steps: TimeStep) {
        let Some(index) = self.running else {
            return;
        };

        let job = &mut self.ready[index];
        job.schedule(n_steps);

        if job.is_complete() {
            let job = self.ready.remove(index);
            trace!(
                task = job.task_id(),
                release = job.release(),
                time = self.current_time + n_steps,
                "job completed"
            );
            self.running = None;
        }
    }
}

/// Simulates `taskset` on one processor over `[0, horizon)` under `policy`.
///
/// Deterministic and reentrant: the ready set, running slot and release
/// table are allocated per call.
pub fn simulate(taskset: &TaskSet, horizon: TimeStep, policy: Policy) -> Vec<Timeline> {
    let _span = debug_span!("simulate", %policy, horizon, tasks = taskset.len()).entered();
    Simulation::new(taskset, horizon, scheduler_for(policy)).run()
}
