//! Decoder configuration types
//!
//! The decoder is intentionally small: it only needs to know how strictly to
//! treat input the simulator should never produce. Everything about where the
//! log comes from and how the result is shown lives in the application layer.

use serde::{Deserialize, Serialize};

/// What to do with events an agent emits after its `died` event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeathPolicy {
    /// Abort with `EventAfterDeath`
    #[default]
    Reject,
    /// Log a warning and keep the events
    Lenient,
}

/// Configuration for the decoder library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Reject action labels outside the known set
    #[serde(default = "default_true")]
    pub strict_actions: bool,

    /// Handling of events that follow a death
    #[serde(default)]
    pub death_policy: DeathPolicy,

    /// Remove literal `\n` markers from action text
    #[serde(default = "default_true")]
    pub strip_escaped_newlines: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict_actions: true,
            death_policy: DeathPolicy::Reject,
            strip_escaped_newlines: true,
        }
    }
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable rejection of unknown actions
    pub fn with_strict_actions(mut self, enabled: bool) -> Self {
        self.strict_actions = enabled;
        self
    }

    /// Builder method: set the death policy
    pub fn with_death_policy(mut self, policy: DeathPolicy) -> Self {
        self.death_policy = policy;
        self
    }

    /// Builder method: keep or strip escaped newline markers
    pub fn with_escaped_newline_stripping(mut self, enabled: bool) -> Self {
        self.strip_escaped_newlines = enabled;
        self
    }

    /// Relaxed settings: unknown actions pass through, events after death are kept
    pub fn lenient() -> Self {
        Self::new()
            .with_strict_actions(false)
            .with_death_policy(DeathPolicy::Lenient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::new()
            .with_strict_actions(false)
            .with_death_policy(DeathPolicy::Lenient)
            .with_escaped_newline_stripping(false);

        assert!(!config.strict_actions);
        assert_eq!(config.death_policy, DeathPolicy::Lenient);
        assert!(!config.strip_escaped_newlines);
    }

    #[test]
    fn test_defaults_are_strict() {
        let config = DecoderConfig::new();
        assert!(config.strict_actions);
        assert_eq!(config.death_policy, DeathPolicy::Reject);
        assert!(config.strip_escaped_newlines);
    }

    #[test]
    fn test_lenient_preset() {
        let config = DecoderConfig::lenient();
        assert!(!config.strict_actions);
        assert_eq!(config.death_policy, DeathPolicy::Lenient);
    }
}
