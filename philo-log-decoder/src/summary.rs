//! Summary aggregation
//!
//! Counts raw action labels per agent. Works on the grouped events only, so it
//! is available even when interval reconstruction rejects the log.

use crate::grouping::AgentTimelines;
use crate::types::{Action, AgentId, Event};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Occurrence counts of one agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub agent: AgentId,
    pub eating: usize,
    pub sleeping: usize,
    pub thinking: usize,
    pub forks_taken: usize,
    pub died: bool,
    /// Counts of labels outside the known set (only with pass-through enabled)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub other: BTreeMap<String, usize>,
}

impl AgentSummary {
    /// Tally the raw events of one agent
    pub fn from_events(agent: AgentId, events: &[Event]) -> Self {
        let mut counts: HashMap<&Action, usize> = HashMap::new();
        for event in events {
            *counts.entry(&event.action).or_insert(0) += 1;
        }
        let count = |action: &Action| counts.get(action).copied().unwrap_or(0);

        let other = counts
            .iter()
            .filter_map(|(action, n)| match action {
                Action::Other(label) => Some((label.clone(), *n)),
                _ => None,
            })
            .collect();

        Self {
            agent,
            eating: count(&Action::Eating),
            sleeping: count(&Action::Sleeping),
            thinking: count(&Action::Thinking),
            forks_taken: count(&Action::Forked),
            died: count(&Action::Died) > 0,
            other,
        }
    }
}

/// Per-agent summaries, ascending by agent id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub agents: Vec<AgentSummary>,
}

impl SimulationSummary {
    pub fn aggregate(timelines: &AgentTimelines) -> Self {
        let agents = timelines
            .iter()
            .map(|(agent, events)| AgentSummary::from_events(agent, events))
            .collect();
        Self { agents }
    }

    pub fn get(&self, agent: AgentId) -> Option<&AgentSummary> {
        self.agents.iter().find(|s| s.agent == agent)
    }

    /// Ids of every agent that died
    pub fn deaths(&self) -> Vec<AgentId> {
        self.agents.iter().filter(|s| s.died).map(|s| s.agent).collect()
    }
}
