//! Firework emission: aimed launches from clicks and staggered celebration bursts.

use std::collections::VecDeque;

use fastrand::Rng;

use super::entity::{Firework, uniform};
use super::theme::FireworkPalette;

/// Fireworks in one celebration burst.
pub const BURST_SIZE: usize = 8;
/// Delay between consecutive launches of a burst, in milliseconds.
pub const BURST_STAGGER_MS: f64 = 200.0;
/// Fraction of the canvas height that random burst heights span.
pub const TARGET_BAND: f64 = 0.4;
/// Distance in pixels between the top edge and the highest random burst.
pub const TARGET_OFFSET: f64 = 50.0;

/// Builds fireworks that start on the bottom edge of a `width` x `height` surface.
pub struct Launcher<'a> {
	pub width: f64,
	pub height: f64,
	pub palette: &'a FireworkPalette,
}

impl Launcher<'_> {
	/// A shell launched from `x` that bursts at `target_y`.
	pub fn aimed(&self, x: f64, target_y: f64, rng: &mut Rng) -> Firework {
		let color = self.palette.pick(rng);
		Firework::new(x, self.height, target_y, color, rng)
	}

	/// A shell with a random column and a random height in the upper band.
	pub fn random(&self, rng: &mut Rng) -> Firework {
		let x = rng.f64() * self.width;
		let target_y = uniform(
			rng,
			TARGET_OFFSET..self.height * TARGET_BAND + TARGET_OFFSET,
		);
		self.aimed(x, target_y, rng)
	}
}

/// Pending burst launches, ordered by due time.
#[derive(Clone, Debug, Default)]
pub struct BurstSchedule {
	due_at: VecDeque<f64>,
}

impl BurstSchedule {
	/// Queue a full burst whose first launch is due at `now_ms`.
	pub fn schedule(&mut self, now_ms: f64) {
		for i in 0..BURST_SIZE {
			self.push(now_ms + i as f64 * BURST_STAGGER_MS);
		}
	}

	fn push(&mut self, at: f64) {
		// Overlapping bursts interleave; keep the queue sorted.
		let pos = self.due_at.partition_point(|&t| t <= at);
		self.due_at.insert(pos, at);
	}

	/// Remove and count the launches due at or before `now_ms`.
	pub fn take_due(&mut self, now_ms: f64) -> usize {
		let n = self.due_at.partition_point(|&t| t <= now_ms);
		self.due_at.drain(..n);
		n
	}

	pub fn len(&self) -> usize {
		self.due_at.len()
	}

	/// Due times still waiting, earliest first.
	#[cfg(test)]
	pub fn due_times(&self) -> impl Iterator<Item = f64> + '_ {
		self.due_at.iter().copied()
	}
}
