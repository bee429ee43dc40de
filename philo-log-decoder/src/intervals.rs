//! Interval reconstruction
//!
//! The simulator only logs state transitions. A state ends when the next
//! state of the same agent starts, so every adjacent pair of events yields one
//! interval. Two kinds of event are special:
//!
//! - `has taken a fork` is an instantaneous marker. No interval starts at it,
//!   which leaves a small gap before the following state.
//! - The last event of an agent has no successor. A death becomes a
//!   zero-length marker, any other live state is extended to the global last
//!   timestamp of the run, and a trailing fork marker produces nothing.

use crate::config::DeathPolicy;
use crate::types::{Action, AgentId, DecoderError, Event, Interval, Result, Timestamp};

/// Converts one agent's ordered events into labeled intervals
#[derive(Debug, Clone, Copy)]
pub struct IntervalReconstructor {
    last_timestamp: Timestamp,
    death_policy: DeathPolicy,
}

impl IntervalReconstructor {
    /// `last_timestamp` is the timestamp of the final line of the whole log
    pub fn new(last_timestamp: Timestamp, death_policy: DeathPolicy) -> Self {
        Self {
            last_timestamp,
            death_policy,
        }
    }

    /// Build the interval list of one agent
    ///
    /// Fails when timestamps go backwards, or when an event follows a death
    /// under [`DeathPolicy::Reject`].
    pub fn reconstruct(&self, agent: AgentId, events: &[Event]) -> Result<Vec<Interval>> {
        self.validate(agent, events)?;

        let Some((last, rest)) = events.split_last() else {
            return Ok(Vec::new());
        };

        let mut intervals = Vec::with_capacity(events.len());
        for (current, next) in rest.iter().zip(events.iter().skip(1)) {
            if current.action == Action::Forked {
                continue;
            }
            intervals.push(Interval::new(
                agent,
                current.action.clone(),
                current.timestamp,
                next.timestamp,
            ));
        }

        match last.action {
            Action::Died => {
                intervals.push(Interval::new(agent, Action::Died, last.timestamp, last.timestamp));
            }
            Action::Forked => {
                log::debug!(
                    "Philosopher {} ends on a fork marker at {}, no terminal interval",
                    agent,
                    last.timestamp
                );
            }
            _ => {
                // Lines of different agents may interleave slightly out of order
                let end = self.last_timestamp.max(last.timestamp);
                intervals.push(Interval::new(agent, last.action.clone(), last.timestamp, end));
            }
        }

        log::trace!("Philosopher {}: {} intervals", agent, intervals.len());
        Ok(intervals)
    }

    fn validate(&self, agent: AgentId, events: &[Event]) -> Result<()> {
        let mut death: Option<Timestamp> = None;

        for pair in events.windows(2) {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(DecoderError::NonMonotonicTimestamp {
                    agent,
                    previous: pair[0].timestamp,
                    current: pair[1].timestamp,
                });
            }
        }

        for event in events {
            if let Some(died_at) = death {
                match self.death_policy {
                    DeathPolicy::Reject => {
                        return Err(DecoderError::EventAfterDeath {
                            agent,
                            timestamp: event.timestamp,
                        });
                    }
                    DeathPolicy::Lenient => {
                        log::warn!(
                            "Philosopher {} died at {} but logged `{}' at {}",
                            agent,
                            died_at,
                            event.action,
                            event.timestamp
                        );
                    }
                }
            }
            if event.action == Action::Died && death.is_none() {
                death = Some(event.timestamp);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(timestamp: Timestamp, action: Action) -> Event {
        Event::new(timestamp, 1, action)
    }

    fn spans(intervals: &[Interval]) -> Vec<(Action, Timestamp, Timestamp, u64)> {
        intervals
            .iter()
            .map(|i| (i.action.clone(), i.start, i.end, i.duration))
            .collect()
    }

    #[test]
    fn test_reference_timeline() {
        let events = vec![
            ev(0, Action::Thinking),
            ev(5, Action::Forked),
            ev(10, Action::Eating),
            ev(210, Action::Sleeping),
            ev(410, Action::Died),
        ];
        let intervals = IntervalReconstructor::new(410, DeathPolicy::Reject)
            .reconstruct(1, &events)
            .unwrap();

        assert_eq!(
            spans(&intervals),
            vec![
                (Action::Thinking, 0, 5, 5),
                (Action::Eating, 10, 210, 200),
                (Action::Sleeping, 210, 410, 200),
                (Action::Died, 410, 410, 0),
            ]
        );
        assert!(intervals.iter().all(|i| i.agent == 1));
    }

    #[test]
    fn test_open_final_interval_covers_run() {
        let events = vec![
            ev(0, Action::Thinking),
            ev(10, Action::Eating),
            ev(210, Action::Sleeping),
            ev(410, Action::Thinking),
        ];
        let intervals = IntervalReconstructor::new(600, DeathPolicy::Reject)
            .reconstruct(1, &events)
            .unwrap();

        assert_eq!(intervals.first().map(|i| i.start), Some(0));
        assert_eq!(intervals.last().map(|i| i.end), Some(600));
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let total: u64 = intervals.iter().map(|i| i.duration).sum();
        assert_eq!(total, 600);
    }

    #[test]
    fn test_final_interval_may_be_empty() {
        let events = vec![ev(0, Action::Thinking), ev(50, Action::Eating)];
        let intervals = IntervalReconstructor::new(50, DeathPolicy::Reject)
            .reconstruct(1, &events)
            .unwrap();
        assert_eq!(
            spans(&intervals),
            vec![(Action::Thinking, 0, 50, 50), (Action::Eating, 50, 50, 0)]
        );
    }

    #[test]
    fn test_only_fork_markers() {
        let events = vec![
            ev(0, Action::Thinking),
            ev(1, Action::Forked),
            ev(2, Action::Forked),
        ];
        let intervals = IntervalReconstructor::new(100, DeathPolicy::Reject)
            .reconstruct(1, &events)
            .unwrap();

        // Only the first state yields an interval; forks and the trailing fork emit nothing
        assert_eq!(spans(&intervals), vec![(Action::Thinking, 0, 1, 1)]);
        assert!(intervals.iter().all(|i| i.action != Action::Forked));
    }

    #[test]
    fn test_single_event() {
        let reconstructor = IntervalReconstructor::new(30, DeathPolicy::Reject);

        let intervals = reconstructor.reconstruct(1, &[ev(10, Action::Thinking)]).unwrap();
        assert_eq!(spans(&intervals), vec![(Action::Thinking, 10, 30, 20)]);

        let intervals = reconstructor.reconstruct(1, &[ev(10, Action::Died)]).unwrap();
        assert_eq!(spans(&intervals), vec![(Action::Died, 10, 10, 0)]);

        let intervals = reconstructor.reconstruct(1, &[ev(10, Action::Forked)]).unwrap();
        assert!(intervals.is_empty());

        assert!(reconstructor.reconstruct(1, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_death_is_last_interval() {
        let events = vec![ev(0, Action::Thinking), ev(800, Action::Died)];
        let intervals = IntervalReconstructor::new(900, DeathPolicy::Reject)
            .reconstruct(1, &events)
            .unwrap();

        let deaths: Vec<&Interval> = intervals.iter().filter(|i| i.action == Action::Died).collect();
        assert_eq!(deaths.len(), 1);
        assert!(deaths[0].is_death_marker());
        assert_eq!(intervals.last().map(|i| i.end), Some(800));
    }

    #[test]
    fn test_non_monotonic_timestamps() {
        let events = vec![ev(10, Action::Thinking), ev(5, Action::Eating)];
        let result = IntervalReconstructor::new(10, DeathPolicy::Reject).reconstruct(4, &events);
        assert!(matches!(
            result,
            Err(DecoderError::NonMonotonicTimestamp {
                agent: 4,
                previous: 10,
                current: 5
            })
        ));
    }

    #[test]
    fn test_event_after_death() {
        let events = vec![
            ev(0, Action::Thinking),
            ev(800, Action::Died),
            ev(810, Action::Eating),
        ];

        let strict = IntervalReconstructor::new(810, DeathPolicy::Reject).reconstruct(1, &events);
        assert!(matches!(
            strict,
            Err(DecoderError::EventAfterDeath {
                agent: 1,
                timestamp: 810
            })
        ));

        let lenient = IntervalReconstructor::new(900, DeathPolicy::Lenient)
            .reconstruct(1, &events)
            .unwrap();
        assert_eq!(
            spans(&lenient),
            vec![
                (Action::Thinking, 0, 800, 800),
                (Action::Died, 800, 810, 10),
                (Action::Eating, 810, 900, 90),
            ]
        );
    }

    #[test]
    fn test_other_action_passes_through() {
        let juggling = Action::Other("is juggling".to_string());
        let events = vec![ev(0, juggling.clone()), ev(7, Action::Thinking)];
        let intervals = IntervalReconstructor::new(7, DeathPolicy::Reject)
            .reconstruct(1, &events)
            .unwrap();
        assert_eq!(intervals[0].action, juggling);
        assert_eq!(intervals[0].duration, 7);
    }
}
