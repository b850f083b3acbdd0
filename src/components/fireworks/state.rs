//! Simulation state and the per-frame update/draw/cull loop.
//!
//! [`FireworksState`] owns every live firework and particle together with the
//! random source and the pending burst launches. The animation loop calls
//! [`FireworksState::tick`] once per display frame; input handlers call the
//! launch methods between frames.

use fastrand::Rng;

use super::emit::{BURST_SIZE, BurstSchedule, Launcher};
use super::entity::{Firework, Particle};
use super::surface::{AudioCue, Surface, play_cue};
use super::theme::{FireworkPalette, GlowStyle};

/// Core fireworks state.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop.
pub struct FireworksState {
	pub fireworks: Vec<Firework>,
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	palette: FireworkPalette,
	burst: BurstSchedule,
	/// Bursts requested since the last frame; they start on the next one.
	requested_bursts: usize,
	rng: Rng,
}

impl FireworksState {
	pub fn new(width: f64, height: f64, palette: FireworkPalette, rng: Rng) -> Self {
		Self {
			fireworks: Vec::new(),
			particles: Vec::new(),
			width,
			height,
			palette,
			burst: BurstSchedule::default(),
			requested_bursts: 0,
			rng,
		}
	}

	/// Launch one shell from `x` that bursts at `target_y`.
	pub fn launch_at(&mut self, x: f64, target_y: f64) {
		let launcher = Launcher {
			width: self.width,
			height: self.height,
			palette: &self.palette,
		};
		let firework = launcher.aimed(x, target_y, &mut self.rng);
		self.fireworks.push(firework);
	}

	/// Launch one shell at a random column and height.
	pub fn launch_random(&mut self) {
		let launcher = Launcher {
			width: self.width,
			height: self.height,
			palette: &self.palette,
		};
		let firework = launcher.random(&mut self.rng);
		self.fireworks.push(firework);
	}

	/// Pointer click: one shell aimed at the clicked point, plus the launch sound.
	pub fn click<A: AudioCue>(&mut self, x: f64, y: f64, cue: &A) {
		self.launch_at(x, y);
		play_cue(cue);
	}

	/// Celebration trigger: queue a burst and play the launch sound once.
	pub fn start_celebration<A: AudioCue>(&mut self, cue: &A) {
		play_cue(cue);
		self.celebrate();
	}

	/// Request a celebration burst. Its first shell launches on the next frame
	/// and the rest follow at the burst stagger.
	pub fn celebrate(&mut self) {
		self.requested_bursts += 1;
	}

	/// Burst launches queued but not yet released.
	pub fn pending_launches(&self) -> usize {
		self.burst.len() + self.requested_bursts * BURST_SIZE
	}

	/// Advance one frame at `now_ms` and draw it.
	///
	/// Requested bursts are scheduled from `now_ms` and due launches released
	/// first. Fireworks then advance, draw, and drop out once burst; their trail
	/// and burst particles join the particle list. Particles advance, draw, and
	/// drop out once expired. Both passes compact in place, so each entry is
	/// visited exactly once.
	pub fn tick<S: Surface>(&mut self, now_ms: f64, surface: &mut S, glow: &GlowStyle) {
		for _ in 0..std::mem::take(&mut self.requested_bursts) {
			self.burst.schedule(now_ms);
		}
		for _ in 0..self.burst.take_due(now_ms) {
			self.launch_random();
		}

		surface.clear(self.width, self.height);

		let Self {
			fireworks,
			particles,
			rng,
			..
		} = self;

		fireworks.retain_mut(|fw| {
			let ascent = fw.advance(rng);
			fw.render(surface, glow);
			particles.extend(ascent.into_particles());
			!fw.exploded
		});

		particles.retain_mut(|p| {
			p.advance();
			p.render(surface, glow);
			!p.is_expired()
		});
	}

	/// Change the surface size for future launches; live entities keep their positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
