//! Line parser
//!
//! Turns one raw simulator line of the form `<timestamp> <id> <action text>`
//! into an [`Event`]. The action text may contain spaces, so only the first
//! two whitespace-separated tokens are split off and the remainder is kept
//! verbatim.

use crate::types::{Action, DecoderError, Event, Result};

/// Literal two-character marker some simulators leave at the end of a line
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Parse a single log line
///
/// `strip_escaped_newlines` removes every literal `\n` marker from the action
/// text. Fails with `MalformedLogLine` carrying the raw line when fewer than
/// three tokens are present or the first two are not unsigned integers.
pub fn parse_line(line: &str, strip_escaped_newlines: bool) -> Result<Event> {
    let malformed = || DecoderError::MalformedLogLine(line.to_string());

    let (timestamp, rest) = split_token(line).ok_or_else(malformed)?;
    let (agent, rest) = split_token(rest).ok_or_else(malformed)?;
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(malformed());
    }

    let timestamp = timestamp.parse::<u64>().map_err(|_| malformed())?;
    let agent = agent.parse::<u32>().map_err(|_| malformed())?;

    let action = if strip_escaped_newlines {
        rest.replace(ESCAPED_NEWLINE, "")
    } else {
        rest.to_string()
    };
    if action.trim().is_empty() {
        return Err(malformed());
    }

    Ok(Event::new(timestamp, agent, Action::from_label(&action)))
}

/// Split off the first whitespace-delimited token, skipping leading whitespace
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(idx) => Some((&s[..idx], &s[idx..])),
        None => Some((s, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        let event = parse_line("42 3 is eating", true).unwrap();
        assert_eq!(event, Event::new(42, 3, Action::Eating));

        let event = parse_line("7 1 has taken a fork", true).unwrap();
        assert_eq!(event.action, Action::Forked);

        let event = parse_line("900 2 died", true).unwrap();
        assert_eq!(event.action, Action::Died);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let event = parse_line("   10\t4   is sleeping  \r\n", true).unwrap();
        assert_eq!(event, Event::new(10, 4, Action::Sleeping));
    }

    #[test]
    fn test_action_keeps_inner_spacing() {
        let event = parse_line("1 1 is   eating", true).unwrap();
        assert_eq!(event.action, Action::Other("is   eating".to_string()));
    }

    #[test]
    fn test_escaped_newline_marker() {
        let event = parse_line("5 2 is thinking\\n", true).unwrap();
        assert_eq!(event.action, Action::Thinking);

        let event = parse_line("5 2 is thinking\\n", false).unwrap();
        assert_eq!(event.action, Action::Other("is thinking\\n".to_string()));
    }

    #[test]
    fn test_malformed_lines() {
        for line in [
            "abc 1 is eating",
            "1 x is eating",
            "-5 1 is eating",
            "10 1",
            "10",
            "",
            "   ",
            "10 1 \\n",
        ] {
            match parse_line(line, true) {
                Err(DecoderError::MalformedLogLine(raw)) => assert_eq!(raw, line),
                other => panic!("expected MalformedLogLine for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_unknown_action_is_kept() {
        let event = parse_line("3 1 is dancing", true).unwrap();
        assert_eq!(event.action, Action::Other("is dancing".to_string()));
    }
}
