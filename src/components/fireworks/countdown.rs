//! Countdown to a fixed instant.
//!
//! Pure clock arithmetic: the caller supplies "now" in epoch milliseconds, so the
//! same type drives the browser interval and the tests.

use std::fmt;

const SECOND_MS: f64 = 1000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Time left, split into whole units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64,
}

impl Remaining {
	pub fn from_millis(ms: f64) -> Self {
		let ms = ms.max(0.0);
		Self {
			days: (ms / DAY_MS).floor() as u64,
			hours: ((ms / HOUR_MS) % 24.0).floor() as u64,
			minutes: ((ms / MINUTE_MS) % 60.0).floor() as u64,
			seconds: ((ms / SECOND_MS) % 60.0).floor() as u64,
		}
	}
}

impl fmt::Display for Remaining {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}d {}h {}m {}s",
			self.days, self.hours, self.minutes, self.seconds
		)
	}
}

/// Result of one countdown update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
	/// Still counting down.
	Remaining(Remaining),
	/// The target was reached on this update. Returned exactly once.
	Finished,
	/// Already finished on an earlier update.
	Done,
}

/// Counts down to `target_ms` and reports completion once.
#[derive(Clone, Debug)]
pub struct Countdown {
	target_ms: f64,
	finished: bool,
}

impl Countdown {
	pub fn new(target_ms: f64) -> Self {
		Self {
			target_ms,
			finished: false,
		}
	}

	pub fn update(&mut self, now_ms: f64) -> CountdownTick {
		if self.finished {
			return CountdownTick::Done;
		}
		let diff = self.target_ms - now_ms;
		if diff <= 0.0 {
			self.finished = true;
			CountdownTick::Finished
		} else {
			CountdownTick::Remaining(Remaining::from_millis(diff))
		}
	}
}
