//! Path replay events
//!
//! Turns a computed path into the event stream an animation client
//! consumes: one `step` per node, then a single `done`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplayEvent {
    Step {
        step: usize,
        node: String,
        total: usize,
    },
    Done {
        done: bool,
    },
}

impl ReplayEvent {
    pub fn is_done(&self) -> bool {
        matches!(self, ReplayEvent::Done { .. })
    }
}

pub fn events(path: &[String]) -> impl Iterator<Item = ReplayEvent> + '_ {
    let total = path.len();
    path.iter()
        .enumerate()
        .map(move |(step, node)| ReplayEvent::Step {
            step,
            node: node.clone(),
            total,
        })
        .chain(std::iter::once(ReplayEvent::Done { done: true }))
}
