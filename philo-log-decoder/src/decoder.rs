//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! The Decoder struct runs the whole batch transformation: parse every line,
//! group by agent, aggregate counts and reconstruct the interval timeline.

use crate::config::DecoderConfig;
use crate::grouping::AgentTimelines;
use crate::intervals::IntervalReconstructor;
use crate::stream::EventStream;
use crate::summary::SimulationSummary;
use crate::types::{AgentId, Interval, Result, Timestamp};
use serde::Serialize;
use std::path::Path;

/// The intervals of one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentIntervals {
    pub agent: AgentId,
    pub intervals: Vec<Interval>,
}

/// Everything the rendering layer needs from one run
#[derive(Debug, Clone)]
pub struct DecodedLog {
    /// Timestamp of the final input line
    pub last_timestamp: Timestamp,
    /// Intervals per agent, ascending by agent id
    pub agents: Vec<AgentIntervals>,
    /// Occurrence counts per agent, ascending by agent id
    pub summary: SimulationSummary,
    /// Total number of parsed events
    pub num_events: usize,
}

impl DecodedLog {
    pub fn intervals_of(&self, agent: AgentId) -> Option<&[Interval]> {
        self.agents
            .iter()
            .find(|a| a.agent == agent)
            .map(|a| a.intervals.as_slice())
    }

    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }
}

/// The main decoder struct - entry point for all decoding operations
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with default (strict) settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Parse raw lines into an event stream
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<EventStream> {
        EventStream::parse(lines, &self.config)
    }

    /// Count actions per agent without reconstructing intervals
    ///
    /// # Example
    /// ```
    /// use philo_log_decoder::Decoder;
    ///
    /// let summary = Decoder::new()
    ///     .summarize_lines(&["0 1 is thinking", "3 1 is eating"])
    ///     .unwrap();
    /// assert_eq!(summary.agents[0].eating, 1);
    /// ```
    pub fn summarize_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<SimulationSummary> {
        let stream = self.parse(lines)?;
        Ok(SimulationSummary::aggregate(&AgentTimelines::group(&stream)))
    }

    /// Run the full pipeline on a list of lines
    ///
    /// # Example
    /// ```
    /// use philo_log_decoder::Decoder;
    ///
    /// let log = Decoder::new()
    ///     .decode_lines(&["0 1 is thinking", "5 1 has taken a fork", "10 1 is eating"])
    ///     .unwrap();
    /// assert_eq!(log.last_timestamp, 10);
    /// assert_eq!(log.agents[0].intervals.len(), 2);
    /// ```
    pub fn decode_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<DecodedLog> {
        let stream = self.parse(lines)?;
        self.decode_stream(&stream)
    }

    /// Group, aggregate and reconstruct an already-parsed stream
    pub fn decode_stream(&self, stream: &EventStream) -> Result<DecodedLog> {
        let last_timestamp = stream.last_timestamp();
        let timelines = AgentTimelines::group(stream);
        let summary = SimulationSummary::aggregate(&timelines);

        let reconstructor = IntervalReconstructor::new(last_timestamp, self.config.death_policy);
        let agents = timelines
            .iter()
            .map(|(agent, events)| {
                reconstructor
                    .reconstruct(agent, events)
                    .map(|intervals| AgentIntervals { agent, intervals })
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Decoded {} events from {} philosophers (last timestamp {} ms)",
            stream.len(),
            agents.len(),
            last_timestamp
        );

        Ok(DecodedLog {
            last_timestamp,
            agents,
            summary,
            num_events: stream.len(),
        })
    }

    /// Read a log file and decode it
    pub fn decode_file(&self, path: &Path) -> Result<DecodedLog> {
        log::info!("Decoding log file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let lines: Vec<&str> = content.lines().collect();
        self.decode_lines(&lines)
    }
}
