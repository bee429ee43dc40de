//! Report generation
//!
//! Renders a decoded log as a plain-text summary, an HTML timeline or a JSON
//! export. Renderers only draw what the decoder produced; they never infer
//! intervals on their own.

pub mod html;
pub mod json;
pub mod palette;
pub mod txt;

use crate::config::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, Local};
use philo_log_decoder::DecodedLog;

/// Run-level data shown alongside the timeline
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Simulation UID, used as title
    pub uid: String,
    pub generated_at: DateTime<Local>,
    pub legend: bool,
}

impl ReportContext {
    pub fn new(uid: impl Into<String>, legend: bool) -> Self {
        Self {
            uid: uid.into(),
            generated_at: Local::now(),
            legend,
        }
    }
}

/// Render a decoded log in the requested format
pub fn render(format: OutputFormat, log: &DecodedLog, ctx: &ReportContext) -> Result<String> {
    match format {
        OutputFormat::Txt => Ok(txt::render(log, ctx)),
        OutputFormat::Html => html::render(log, ctx),
        OutputFormat::Json => json::render(log, ctx),
    }
}
