//! Philosopher Log Decoder Library
//!
//! A stateless library that turns the textual event log of a dining
//! philosophers simulation into per-philosopher timelines.
//!
//! # Architecture
//!
//! The whole log is processed as one synchronous batch:
//! - Parses every line into a timestamped, per-philosopher event
//! - Groups events by philosopher, ascending by id
//! - Reconstructs labeled time intervals from the point events
//! - Counts meals, sleeps, thoughts and deaths per philosopher
//!
//! The library does NOT:
//! - Run the simulator or read from stdin
//! - Save logs
//! - Render charts or print reports
//!
//! All of that is in the application layer (philo-log-cli).
//!
//! # Example Usage
//!
//! ```
//! use philo_log_decoder::{Action, Decoder, DecoderConfig};
//!
//! let lines = [
//!     "0 1 is thinking",
//!     "5 1 has taken a fork",
//!     "10 1 is eating",
//!     "210 1 is sleeping",
//!     "410 1 died",
//! ];
//!
//! let decoder = Decoder::with_config(DecoderConfig::new());
//! let log = decoder.decode_lines(&lines).unwrap();
//!
//! for agent in &log.agents {
//!     for interval in &agent.intervals {
//!         println!("{}: {}", agent.agent, interval);
//!     }
//! }
//! assert_eq!(log.agents[0].intervals[3].action, Action::Died);
//! ```

// Public modules
pub mod config;
pub mod decoder;
pub mod grouping;
pub mod intervals;
pub mod parser;
pub mod stream;
pub mod summary;
pub mod types;

// Re-export main types for convenience
pub use config::{DeathPolicy, DecoderConfig};
pub use decoder::{AgentIntervals, DecodedLog, Decoder};
pub use grouping::AgentTimelines;
pub use intervals::IntervalReconstructor;
pub use parser::parse_line;
pub use stream::EventStream;
pub use summary::{AgentSummary, SimulationSummary};
pub use types::{Action, AgentId, DecoderError, Event, Interval, Result, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
