//! JSON export

use super::ReportContext;
use anyhow::{Context, Result};
use philo_log_decoder::{AgentId, AgentSummary, DecodedLog, Interval, Timestamp};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    uid: &'a str,
    generated_at: String,
    last_timestamp: Timestamp,
    num_events: usize,
    agents: Vec<JsonAgent<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonAgent<'a> {
    id: AgentId,
    intervals: &'a [Interval],
    summary: Option<&'a AgentSummary>,
}

/// Pretty-printed JSON with intervals and counts per philosopher
pub fn render(log: &DecodedLog, ctx: &ReportContext) -> Result<String> {
    let agents = log
        .agents
        .iter()
        .map(|agent| JsonAgent {
            id: agent.agent,
            intervals: &agent.intervals,
            summary: log.summary.get(agent.agent),
        })
        .collect();

    let report = JsonReport {
        uid: &ctx.uid,
        generated_at: ctx.generated_at.to_rfc3339(),
        last_timestamp: log.last_timestamp,
        num_events: log.num_events,
        agents,
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
}
