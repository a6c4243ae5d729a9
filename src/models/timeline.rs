use std::fmt;

use serde::Serialize;

use super::{TimeStep, ID};

/// Execution state of a task during one time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Idle,
    Wait,
    Exe,
    Miss,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::Wait => "wait",
            State::Exe => "exe",
            State::Miss => "miss",
        }
    }

    /// Human readable status shown next to a task at a given instant.
    pub fn status(&self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::Wait => "ready",
            State::Exe => "running",
            State::Miss => "deadline miss",
        }
    }

    /// One character per unit in the text Gantt chart.
    pub fn glyph(&self) -> char {
        match self {
            State::Idle => '.',
            State::Wait => 'w',
            State::Exe => '#',
            State::Miss => '!',
        }
    }

    /// Whether the processor is doing work for the task in this unit.
    pub fn is_executing(&self) -> bool {
        matches!(self, State::Exe | State::Miss)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-unit states of one task over `[0, horizon)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    task_id: ID,
    states: Vec<State>,
}

impl Timeline {
    pub fn new(task_id: ID, horizon: TimeStep) -> Self {
        Self {
            task_id,
            states: vec![State::Idle; horizon],
        }
    }

    pub fn task_id(&self) -> ID {
        self.task_id
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn get(&self, t: TimeStep) -> Option<State> {
        self.states.get(t).copied()
    }

    pub(crate) fn set(&mut self, t: TimeStep, state: State) {
        if let Some(slot) = self.states.get_mut(t) {
            *slot = state;
        }
    }

    pub fn contains_miss(&self) -> bool {
        self.states.contains(&State::Miss)
    }

    pub fn first_miss(&self) -> Option<TimeStep> {
        self.states.iter().position(|s| *s == State::Miss)
    }

    /// Status label at instant `t`, `finished` once past the horizon.
    pub fn status_at(&self, t: TimeStep) -> &'static str {
        match self.get(t) {
            Some(state) => state.status(),
            None => "finished",
        }
    }

    pub fn to_gantt(&self) -> String {
        self.states.iter().map(State::glyph).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timeline_is_idle() {
        let timeline = Timeline::new(1, 4);
        assert_eq!(timeline.len(), 4);
        assert!(timeline.states().iter().all(|s| *s == State::Idle));
        assert!(!timeline.contains_miss());
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut timeline = Timeline::new(1, 2);
        timeline.set(1, State::Exe);
        timeline.set(5, State::Miss);
        assert_eq!(timeline.states(), &[State::Idle, State::Exe]);
    }

    #[test]
    fn test_status_and_gantt() {
        let mut timeline = Timeline::new(2, 4);
        timeline.set(0, State::Exe);
        timeline.set(1, State::Wait);
        timeline.set(2, State::Miss);

        assert_eq!(timeline.status_at(0), "running");
        assert_eq!(timeline.status_at(2), "deadline miss");
        assert_eq!(timeline.status_at(4), "finished");
        assert_eq!(timeline.to_gantt(), "#w!.");
        assert_eq!(timeline.first_miss(), Some(2));
    }

    #[test]
    fn test_state_serializes_lowercase() {
        let json = serde_json::to_string(&vec![State::Idle, State::Miss]).unwrap();
        assert_eq!(json, r#"["idle","miss"]"#);
    }
}
