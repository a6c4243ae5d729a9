use proptest::prelude::*;

use uniprocessor::{is_schedulable, simulate, Policy, State, Task, TaskSet, TimeStep};

/// Unit-by-unit reference: release, elect, label, run one unit.
fn step_by_step(tasks: &[Task], horizon: TimeStep, policy: Policy) -> Vec<Vec<State>> {
    // (task index, release, remaining, absolute deadline)
    let mut ready: Vec<(usize, TimeStep, TimeStep, TimeStep)> = Vec::new();
    let mut timelines = vec![vec![State::Idle; horizon]; tasks.len()];

    for t in 0..horizon {
        for (i, task) in tasks.iter().enumerate() {
            if t >= task.offset() && (t - task.offset()) % task.period() == 0 {
                ready.push((i, t, task.wcet(), t + task.deadline()));
            }
        }

        let running = ready
            .iter()
            .enumerate()
            .min_by_key(|(_, job)| {
                let (i, release, _, deadline) = **job;
                let primary = match policy {
                    Policy::RateMonotonic => tasks[i].period(),
                    Policy::EarliestDeadlineFirst => deadline,
                };
                (primary, release, tasks[i].id())
            })
            .map(|(index, _)| index);

        let running_task = running.map(|index| ready[index].0);

        for (i, task) in tasks.iter().enumerate() {
            let overdue = ready.iter().any(|&(j, _, _, deadline)| j == i && deadline <= t);
            let pending = ready.iter().any(|&(j, _, _, _)| j == i);

            timelines[i][t] = if overdue {
                State::Miss
            } else if t < task.offset() {
                State::Idle
            } else if running_task == Some(i) {
                State::Exe
            } else if pending {
                State::Wait
            } else {
                State::Idle
            };
        }

        if let Some(index) = running {
            ready[index].2 -= 1;
            if ready[index].2 == 0 {
                ready.remove(index);
            }
        }
    }

    timelines
}

fn policies() -> impl Strategy<Value = Policy> {
    prop_oneof![Just(Policy::RateMonotonic), Just(Policy::EarliestDeadlineFirst)]
}

/// Task sets with distinct ids; deadline 0 stands for "equal to the period".
fn tasksets() -> impl Strategy<Value = TaskSet> {
    prop::collection::vec((0usize..20, 1usize..8, 0usize..20, 1usize..20), 0..5).prop_map(|params| {
        TaskSet::new(
            params
                .into_iter()
                .enumerate()
                .map(|(i, (offset, wcet, deadline, period))| {
                    let deadline = if deadline == 0 { period } else { deadline };
                    Task::new(i as u32 + 1, offset, wcet, deadline, period)
                })
                .collect(),
        )
    })
}

fn states(taskset: &TaskSet, horizon: TimeStep, policy: Policy) -> Vec<Vec<State>> {
    simulate(taskset, horizon, policy)
        .into_iter()
        .map(|timeline| timeline.states().to_vec())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_unit_step_reference(taskset in tasksets(), horizon in 1usize..120, policy in policies()) {
        let expected = step_by_step(taskset.get_tasks(), horizon, policy);
        prop_assert_eq!(states(&taskset, horizon, policy), expected);
    }

    #[test]
    fn is_deterministic(taskset in tasksets(), horizon in 1usize..120, policy in policies()) {
        prop_assert_eq!(simulate(&taskset, horizon, policy), simulate(&taskset, horizon, policy));
    }

    #[test]
    fn one_label_per_unit_and_one_task_executing(taskset in tasksets(), horizon in 1usize..120, policy in policies()) {
        let timelines = states(&taskset, horizon, policy);

        prop_assert_eq!(timelines.len(), taskset.len());
        for timeline in &timelines {
            prop_assert_eq!(timeline.len(), horizon);
        }
        for t in 0..horizon {
            let executing = timelines.iter().filter(|timeline| timeline[t] == State::Exe).count();
            prop_assert!(executing <= 1);
        }
    }

    #[test]
    fn nothing_before_first_release(taskset in tasksets(), horizon in 1usize..120, policy in policies()) {
        let timelines = states(&taskset, horizon, policy);

        for (task, timeline) in taskset.iter().zip(&timelines) {
            let before = task.offset().min(horizon);
            prop_assert!(timeline[..before].iter().all(|s| *s == State::Idle));
        }
    }

    #[test]
    fn miss_persists_while_the_late_job_is_unfinished(wcet in 2usize..10, deadline in 1usize..10, horizon in 1usize..40) {
        // A lone task with a period beyond the horizon has exactly one job.
        prop_assume!(deadline < wcet);
        let taskset = TaskSet::new(vec![Task::new(1, 0, wcet, deadline, 1000)]);
        let timeline = &states(&taskset, horizon, Policy::RateMonotonic)[0];

        for t in 0..horizon {
            let expected = if t >= wcet {
                State::Idle
            } else if t >= deadline {
                State::Miss
            } else {
                State::Exe
            };
            prop_assert_eq!(timeline[t], expected);
        }
    }

    #[test]
    fn verdict_matches_labels(taskset in tasksets(), horizon in 1usize..120, policy in policies()) {
        let timelines = simulate(&taskset, horizon, policy);
        let any_miss = timelines.iter().any(|timeline| timeline.states().contains(&State::Miss));

        prop_assert_eq!(is_schedulable(&timelines), !any_miss);
    }
}
