//! Fixed action colors for the timeline

use anyhow::{anyhow, Result};
use philo_log_decoder::Action;

/// Legend entries, in display order
pub const LEGEND: [(&str, &str); 5] = [
    (Action::FORKED, "gray"),
    (Action::EATING, "#e34f44"),
    (Action::SLEEPING, "#4278f5"),
    (Action::THINKING, "#78b33e"),
    (Action::DIED, "#7d23eb"),
];

/// Color of a known action, `None` for anything else
pub fn color(action: &Action) -> Option<&'static str> {
    match action {
        Action::Forked => Some("gray"),
        Action::Eating => Some("#e34f44"),
        Action::Sleeping => Some("#4278f5"),
        Action::Thinking => Some("#78b33e"),
        Action::Died => Some("#7d23eb"),
        Action::Other(_) => None,
    }
}

/// Like [`color`], but an unknown action is an error
pub fn require_color(action: &Action) -> Result<&'static str> {
    color(action).ok_or_else(|| anyhow!("No color defined for action `{}'", action))
}
