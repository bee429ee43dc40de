//! Core types for the philosopher log decoder library
//!
//! This module defines the fundamental types produced when processing a
//! simulation log: parsed point events, derived labeled intervals and the
//! error taxonomy shared by every stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the start of the simulation
pub type Timestamp = u64;

/// Identifier of one simulated agent ("philosopher")
pub type AgentId = u32;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors that can occur while decoding a simulation log
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("`{0}' is not a part of expected input")]
    MalformedLogLine(String),

    #[error("no output of the program")]
    EmptyInput,

    #[error("unknown action in line `{line}'")]
    UnknownAction { line: String },

    #[error("philosopher {agent}: timestamp {current} goes back in time (previous event at {previous})")]
    NonMonotonicTimestamp {
        agent: AgentId,
        previous: Timestamp,
        current: Timestamp,
    },

    #[error("philosopher {agent}: event at {timestamp} after death")]
    EventAfterDeath { agent: AgentId, timestamp: Timestamp },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Action labels emitted by the simulator
///
/// The set is closed. Anything else is kept verbatim in `Other` so that the
/// caller can decide whether to reject it or pass it through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Action {
    /// "has taken a fork" - instantaneous marker, never carries a duration
    Forked,
    Eating,
    Sleeping,
    Thinking,
    Died,
    Other(String),
}

impl Action {
    pub const FORKED: &'static str = "has taken a fork";
    pub const EATING: &'static str = "is eating";
    pub const SLEEPING: &'static str = "is sleeping";
    pub const THINKING: &'static str = "is thinking";
    pub const DIED: &'static str = "died";

    /// Map a raw action label to an action
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::FORKED => Action::Forked,
            Self::EATING => Action::Eating,
            Self::SLEEPING => Action::Sleeping,
            Self::THINKING => Action::Thinking,
            Self::DIED => Action::Died,
            other => Action::Other(other.to_string()),
        }
    }

    /// The raw label as it appears in the log
    pub fn label(&self) -> &str {
        match self {
            Action::Forked => Self::FORKED,
            Action::Eating => Self::EATING,
            Action::Sleeping => Self::SLEEPING,
            Action::Thinking => Self::THINKING,
            Action::Died => Self::DIED,
            Action::Other(label) => label,
        }
    }

    /// True for labels outside the closed set
    pub fn is_known(&self) -> bool {
        !matches!(self, Action::Other(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Action {
    fn from(label: String) -> Self {
        Action::from_label(&label)
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.label().to_string()
    }
}

/// A single parsed log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Milliseconds since simulation start
    pub timestamp: Timestamp,
    /// Agent that emitted the event
    pub agent: AgentId,
    /// What the agent did
    pub action: Action,
}

impl Event {
    pub fn new(timestamp: Timestamp, agent: AgentId, action: Action) -> Self {
        Self {
            timestamp,
            agent,
            action,
        }
    }
}

/// A derived closed-open span `[start, end)` during which an agent was in one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub agent: AgentId,
    pub action: Action,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Always `end - start`
    pub duration: u64,
}

impl Interval {
    pub fn new(agent: AgentId, action: Action, start: Timestamp, end: Timestamp) -> Self {
        Self {
            agent,
            action,
            start,
            end,
            duration: end.saturating_sub(start),
        }
    }

    /// True for the zero-length death marker
    pub fn is_death_marker(&self) -> bool {
        self.action == Action::Died && self.duration == 0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}  {} ms  {}",
            self.start, self.end, self.duration, self.action
        )
    }
}
