//! Bounded-interval event simulator.
//!
//! Draws exponential inter-arrival gaps until one unit of time has elapsed
//! and reports how many events fit. The count is an integer-valued estimator
//! of the process rate.

mod event_counter;
mod gap_source;

pub use event_counter::{INTERVAL, count_events, simulate_rate_estimate};
pub use gap_source::{ExponentialGaps, GapSource};
