//! Plain-text report

use super::ReportContext;
use philo_log_decoder::{DecodedLog, SimulationSummary};
use std::fmt::Write;

/// Per-philosopher counts, the way the summary is printed after a run
pub fn render_summary(summary: &SimulationSummary) -> String {
    let mut out = String::new();
    for agent in &summary.agents {
        let _ = writeln!(out, "\nPhilosopher {}:", agent.agent);
        let _ = writeln!(out, "\thas eaten {} times", agent.eating);
        let _ = writeln!(out, "\thas slept {} times", agent.sleeping);
        let _ = writeln!(out, "\thas thought {} times", agent.thinking);
        for (label, count) in &agent.other {
            let _ = writeln!(out, "\t`{}' {} times", label, count);
        }
        if agent.died {
            let _ = writeln!(out, "\tdied 1 times X(");
        }
    }
    out
}

/// Summary followed by every philosopher's interval list
pub fn render(log: &DecodedLog, ctx: &ReportContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Simulation {}", ctx.uid);
    let _ = writeln!(
        out,
        "{} events, {} philosophers, last timestamp {} ms",
        log.num_events,
        log.num_agents(),
        log.last_timestamp
    );

    out.push_str(&render_summary(&log.summary));

    let _ = writeln!(out, "\nTimeline (ms):");
    for agent in &log.agents {
        let _ = writeln!(out, "\n{} --", agent.agent);
        for interval in &agent.intervals {
            let _ = writeln!(
                out,
                "\t{:>7} - {:<7} {:>6} ms  {}",
                interval.start, interval.end, interval.duration, interval.action
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use philo_log_decoder::Decoder;

    #[test]
    fn test_summary_text() {
        let summary = Decoder::new()
            .summarize_lines(&["0 1 is thinking", "0 2 is eating", "810 1 died"])
            .unwrap();
        let text = render_summary(&summary);

        assert!(text.contains("Philosopher 1:\n\thas eaten 0 times\n\thas slept 0 times\n\thas thought 1 times\n\tdied 1 times"));
        assert!(text.contains("Philosopher 2:\n\thas eaten 1 times"));
        let first = text.find("Philosopher 1").unwrap();
        let second = text.find("Philosopher 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_timeline_text() {
        let log = Decoder::new()
            .decode_lines(&["0 1 is thinking", "5 1 has taken a fork", "10 1 is eating"])
            .unwrap();
        let text = render(&log, &ReportContext::new("uid-1", true));

        assert!(text.starts_with("Simulation uid-1\n3 events, 1 philosophers, last timestamp 10 ms"));
        assert!(text.contains("      0 - 5            5 ms  is thinking"));
        assert!(text.contains("     10 - 10           0 ms  is eating"));
        assert!(!text.contains("ms  has taken a fork"));
    }
}
