//! Event stream
//!
//! The full list of parsed events in the order the simulator printed them.

use crate::config::DecoderConfig;
use crate::parser::parse_line;
use crate::types::{DecoderError, Event, Result, Timestamp};

/// Parsed events in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStream {
    events: Vec<Event>,
}

impl EventStream {
    /// Parse every line of a simulation log
    ///
    /// The log is accepted or rejected as a whole: the first malformed line
    /// aborts the run. An empty line list fails with `EmptyInput` before any
    /// parsing happens. Blank lines at the end of the output are dropped
    /// first, so a log that ends in a newline or is only blank counts as
    /// empty.
    pub fn parse<S: AsRef<str>>(lines: &[S], config: &DecoderConfig) -> Result<Self> {
        let end = lines
            .iter()
            .rposition(|line| !line.as_ref().trim().is_empty())
            .map_or(0, |idx| idx + 1);
        let lines = &lines[..end];
        if lines.is_empty() {
            return Err(DecoderError::EmptyInput);
        }

        let mut events = Vec::with_capacity(lines.len());
        for line in lines {
            let line = line.as_ref();
            let event = parse_line(line, config.strip_escaped_newlines)?;
            if config.strict_actions && !event.action.is_known() {
                return Err(DecoderError::UnknownAction {
                    line: line.to_string(),
                });
            }
            events.push(event);
        }

        log::debug!("Parsed {} events", events.len());
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the final line of the input, whichever agent printed it
    pub fn last_timestamp(&self) -> Timestamp {
        self.events.last().map(|e| e.timestamp).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;

    #[test]
    fn test_empty_input() {
        let lines: Vec<String> = Vec::new();
        let result = EventStream::parse(&lines, &DecoderConfig::new());
        assert!(matches!(result, Err(DecoderError::EmptyInput)));
    }

    #[test]
    fn test_malformed_line_aborts_run() {
        let lines = ["0 1 is thinking", "abc 1 is eating", "10 1 is sleeping"];
        let result = EventStream::parse(&lines, &DecoderConfig::new());
        match result {
            Err(DecoderError::MalformedLogLine(line)) => assert_eq!(line, "abc 1 is eating"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_last_timestamp_is_final_line() {
        let lines = ["0 1 is thinking", "15 2 is eating", "12 1 is eating"];
        let stream = EventStream::parse(&lines, &DecoderConfig::new()).unwrap();
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.last_timestamp(), 12);
    }

    #[test]
    fn test_unknown_action_policy() {
        let lines = ["0 1 is thinking", "3 1 is juggling"];

        let strict = EventStream::parse(&lines, &DecoderConfig::new());
        assert!(matches!(strict, Err(DecoderError::UnknownAction { .. })));

        let lenient = EventStream::parse(&lines, &DecoderConfig::lenient()).unwrap();
        assert_eq!(
            lenient.events()[1].action,
            Action::Other("is juggling".to_string())
        );
    }

    #[test]
    fn test_trailing_blank_lines_are_dropped() {
        let lines = ["0 1 is thinking", "10 1 is eating", "", "  "];
        let stream = EventStream::parse(&lines, &DecoderConfig::new()).unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.last_timestamp(), 10);

        let blank = ["", " ", "\t"];
        assert!(matches!(
            EventStream::parse(&blank, &DecoderConfig::new()),
            Err(DecoderError::EmptyInput)
        ));
    }

    #[test]
    fn test_inner_blank_line_is_malformed() {
        let lines = ["0 1 is thinking", "", "10 1 is eating"];
        assert!(matches!(
            EventStream::parse(&lines, &DecoderConfig::new()),
            Err(DecoderError::MalformedLogLine(_))
        ));
    }
}
