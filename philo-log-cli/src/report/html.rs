//! HTML timeline report
//!
//! One lane per philosopher, ascending id top to bottom, with the lane's
//! counts next to it. Bars are placed in percent of the run length so the
//! page scales with the window.

use super::palette;
use super::ReportContext;
use anyhow::{Context, Result};
use askama::Template;
use philo_log_decoder::{AgentId, AgentIntervals, DecodedLog, Interval, Timestamp};

/// Minimum bar width (percent) so zero-length deaths stay visible
const DEATH_MARKER_WIDTH: f64 = 0.4;

/// Timeline page template
#[derive(Template)]
#[template(path = "timeline.html")]
struct TimelineTemplate<'a> {
    uid: &'a str,
    generated_at: String,
    last_timestamp: Timestamp,
    lanes: Vec<Lane<'a>>,
    legend: bool,
    legend_entries: Vec<LegendEntry>,
}

struct Lane<'a> {
    agent: AgentId,
    bars: Vec<Bar<'a>>,
    eating: usize,
    sleeping: usize,
    thinking: usize,
    died: bool,
}

struct Bar<'a> {
    left: String,
    width: String,
    color: &'static str,
    start: Timestamp,
    end: Timestamp,
    duration: u64,
    action: &'a str,
}

struct LegendEntry {
    label: &'static str,
    color: &'static str,
}

/// Render the decoded log as a standalone HTML page
///
/// Fails when an interval carries an action without a color.
pub fn render(log: &DecodedLog, ctx: &ReportContext) -> Result<String> {
    let scale = log.last_timestamp.max(1) as f64;

    let lanes = log
        .agents
        .iter()
        .map(|agent| lane(agent, log, scale))
        .collect::<Result<Vec<_>>>()?;

    let template = TimelineTemplate {
        uid: &ctx.uid,
        generated_at: ctx.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        last_timestamp: log.last_timestamp,
        lanes,
        legend: ctx.legend,
        legend_entries: palette::LEGEND
            .iter()
            .map(|&(label, color)| LegendEntry { label, color })
            .collect(),
    };

    template.render().context("Failed to render HTML report")
}

fn lane<'a>(agent: &'a AgentIntervals, log: &DecodedLog, scale: f64) -> Result<Lane<'a>> {
    let bars = agent
        .intervals
        .iter()
        .map(|interval| bar(interval, scale))
        .collect::<Result<Vec<_>>>()?;
    let summary = log.summary.get(agent.agent);

    Ok(Lane {
        agent: agent.agent,
        bars,
        eating: summary.map_or(0, |s| s.eating),
        sleeping: summary.map_or(0, |s| s.sleeping),
        thinking: summary.map_or(0, |s| s.thinking),
        died: summary.is_some_and(|s| s.died),
    })
}

fn bar(interval: &Interval, scale: f64) -> Result<Bar<'_>> {
    let color = palette::require_color(&interval.action)?;
    let mut width = percent(interval.duration, scale);
    if interval.is_death_marker() {
        width = width.max(DEATH_MARKER_WIDTH);
    }
    // Keep bars ending at the last timestamp inside the track
    let left = percent(interval.start, scale).min(100.0 - width).max(0.0);

    Ok(Bar {
        left: format!("{:.4}", left),
        width: format!("{:.4}", width),
        color,
        start: interval.start,
        end: interval.end,
        duration: interval.duration,
        action: interval.action.label(),
    })
}

fn percent(value: Timestamp, scale: f64) -> f64 {
    value as f64 / scale * 100.0
}
