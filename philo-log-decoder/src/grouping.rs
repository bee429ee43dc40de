//! Agent grouper
//!
//! Partitions the event stream by agent while keeping each agent's events in
//! arrival order. Agents are enumerated by ascending id, which is the order
//! the timeline is displayed in.

use crate::stream::EventStream;
use crate::types::{AgentId, Event};
use std::collections::HashMap;

/// Per-agent event lists with an explicit ascending id order
#[derive(Debug, Clone, Default)]
pub struct AgentTimelines {
    /// Agent ids, sorted ascending
    ids: Vec<AgentId>,
    /// Events of each agent, in arrival order
    timelines: HashMap<AgentId, Vec<Event>>,
}

impl AgentTimelines {
    /// Group a parsed stream by agent
    pub fn group(stream: &EventStream) -> Self {
        let mut timelines: HashMap<AgentId, Vec<Event>> = HashMap::new();
        for event in stream.events() {
            timelines.entry(event.agent).or_default().push(event.clone());
        }

        let mut ids: Vec<AgentId> = timelines.keys().copied().collect();
        ids.sort_unstable();

        log::debug!("Grouped events into {} agent timelines", ids.len());
        Self { ids, timelines }
    }

    /// Agent ids in ascending order
    pub fn ids(&self) -> &[AgentId] {
        &self.ids
    }

    /// Events of one agent
    pub fn get(&self, agent: AgentId) -> Option<&[Event]> {
        self.timelines.get(&agent).map(Vec::as_slice)
    }

    /// Iterate `(id, events)` pairs by ascending id
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &[Event])> + '_ {
        self.ids
            .iter()
            .filter_map(move |id| self.timelines.get(id).map(|events| (*id, events.as_slice())))
    }
}
