//! Firework shells and the particles they leave behind.
//!
//! Every entity moves by one tick per `advance` call. Nothing here touches the
//! shared collections: a rising [`Firework`] hands back what it spawned as an
//! [`Ascent`] and the owner of the collections merges it.

use std::f64::consts::TAU;
use std::ops::Range;

use fastrand::Rng;

use super::theme::Color;

/// Constant downward pull added to explosion particles each tick.
pub const GRAVITY: f64 = 0.08;
/// Per-tick speed multiplier for explosion particles.
pub const FRICTION: f64 = 0.97;
/// Ticks a trail dot stays alive.
pub const TRAIL_LIFE: u32 = 20;
/// Opacity a trail dot loses per tick.
pub const TRAIL_DECAY: f64 = 0.05;

/// Shell ascent speed, per tick.
pub const ASCENT_SPEED: Range<f64> = 6.0..9.0;
/// Number of particles in one explosion.
pub const BURST_COUNT: Range<usize> = 80..130;
/// Initial outward speed of an explosion particle.
pub const EXPLOSION_SPEED: Range<f64> = 2.0..8.0;
/// Per-tick opacity loss of an explosion particle.
pub const EXPLOSION_DECAY: Range<f64> = 0.01..0.025;
/// Drawn radius of an explosion particle.
pub const EXPLOSION_RADIUS: Range<f64> = 2.0..4.0;

/// Uniform sample from a half-open float range.
pub(crate) fn uniform(rng: &mut Rng, range: Range<f64>) -> f64 {
	range.start + rng.f64() * (range.end - range.start)
}

/// A shell rising from the bottom edge toward its burst height.
#[derive(Clone, Debug)]
pub struct Firework {
	pub x: f64,
	pub y: f64,
	pub target_y: f64,
	/// Always positive.
	pub speed: f64,
	pub color: Color,
	pub exploded: bool,
}

/// Everything a firework spawned during one tick.
#[derive(Clone, Debug)]
pub struct Ascent {
	pub trail: TrailParticle,
	/// Empty unless the shell burst this tick.
	pub explosion: Vec<ExplosionParticle>,
}

impl Ascent {
	/// Flatten into particles, trail first.
	pub fn into_particles(self) -> impl Iterator<Item = Particle> {
		std::iter::once(Particle::Trail(self.trail))
			.chain(self.explosion.into_iter().map(Particle::Explosion))
	}
}

impl Firework {
	pub fn new(x: f64, start_y: f64, target_y: f64, color: Color, rng: &mut Rng) -> Self {
		Self {
			x,
			y: start_y,
			target_y,
			speed: uniform(rng, ASCENT_SPEED),
			color,
			exploded: false,
		}
	}

	/// Rise by one tick, drop a trail dot, and burst once the target is reached.
	pub fn advance(&mut self, rng: &mut Rng) -> Ascent {
		self.y -= self.speed;
		let trail = TrailParticle::new(self.x, self.y, self.color);

		let explosion = if self.y <= self.target_y {
			self.exploded = true;
			self.explode(rng)
		} else {
			Vec::new()
		};

		Ascent { trail, explosion }
	}

	/// Burst at the current position. No clamping to `target_y`: an overshooting
	/// shell bursts where it was last computed.
	pub fn explode(&self, rng: &mut Rng) -> Vec<ExplosionParticle> {
		let count = rng.usize(BURST_COUNT);
		(0..count)
			.map(|_| ExplosionParticle::new(self.x, self.y, self.color, rng))
			.collect()
	}
}

/// A short-lived dot marking a shell's path.
#[derive(Clone, Debug)]
pub struct TrailParticle {
	pub x: f64,
	pub y: f64,
	pub color: Color,
	pub alpha: f64,
	/// Remaining ticks.
	pub life: u32,
}

impl TrailParticle {
	pub fn new(x: f64, y: f64, color: Color) -> Self {
		Self {
			x,
			y,
			color,
			alpha: 1.0,
			life: TRAIL_LIFE,
		}
	}

	pub fn advance(&mut self) {
		self.life = self.life.saturating_sub(1);
		self.alpha -= TRAIL_DECAY;
	}

	pub fn is_expired(&self) -> bool {
		self.alpha <= 0.0 || self.life == 0
	}
}

/// A spark flung out of a burst, slowed by friction and pulled down by gravity.
#[derive(Clone, Debug)]
pub struct ExplosionParticle {
	pub x: f64,
	pub y: f64,
	pub color: Color,
	pub angle: f64,
	pub speed: f64,
	pub friction: f64,
	pub alpha: f64,
	pub decay: f64,
	pub radius: f64,
}

impl ExplosionParticle {
	pub fn new(x: f64, y: f64, color: Color, rng: &mut Rng) -> Self {
		Self {
			x,
			y,
			color,
			angle: rng.f64() * TAU,
			speed: uniform(rng, EXPLOSION_SPEED),
			friction: FRICTION,
			alpha: 1.0,
			decay: uniform(rng, EXPLOSION_DECAY),
			radius: uniform(rng, EXPLOSION_RADIUS),
		}
	}

	pub fn advance(&mut self) {
		self.speed *= self.friction;
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed + GRAVITY;
		self.alpha -= self.decay;
	}

	pub fn is_expired(&self) -> bool {
		self.alpha <= 0.0
	}
}

/// Trail and explosion particles share one collection.
#[derive(Clone, Debug)]
pub enum Particle {
	Trail(TrailParticle),
	Explosion(ExplosionParticle),
}

impl Particle {
	pub fn advance(&mut self) {
		match self {
			Particle::Trail(p) => p.advance(),
			Particle::Explosion(p) => p.advance(),
		}
	}

	pub fn is_expired(&self) -> bool {
		match self {
			Particle::Trail(p) => p.is_expired(),
			Particle::Explosion(p) => p.is_expired(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const RED: Color = Color::rgb(255, 0, 0);

	#[test]
	fn trail_fades_linearly_and_dies_by_twenty_ticks() {
		let mut p = TrailParticle::new(10.0, 10.0, RED);
		for n in 1..=20u32 {
			p.advance();
			assert!((p.alpha - (1.0 - 0.05 * n as f64)).abs() < 1e-9);
			assert_eq!(p.life, 20 - n);
			if p.is_expired() {
				assert!(n <= 20);
				return;
			}
		}
		panic!("trail particle outlived its lifetime");
	}

	#[test]
	fn trail_alive_before_budget_runs_out() {
		let mut p = TrailParticle::new(0.0, 0.0, RED);
		for _ in 0..19 {
			p.advance();
		}
		assert!(!p.is_expired());
		p.advance();
		assert!(p.is_expired());
	}

	#[test]
	fn explosion_speed_follows_friction() {
		let mut rng = Rng::with_seed(42);
		let mut p = ExplosionParticle::new(0.0, 0.0, RED, &mut rng);
		let initial = p.speed;
		let mut prev = p.speed;
		for n in 1..=30 {
			p.advance();
			assert!((p.speed - initial * 0.97f64.powi(n)).abs() < 1e-9);
			assert!(p.speed <= prev);
			prev = p.speed;
		}
	}

	#[test]
	fn explosion_alpha_decays_by_own_rate_until_expired() {
		let mut rng = Rng::with_seed(3);
		let mut p = ExplosionParticle::new(0.0, 0.0, RED, &mut rng);
		let decay = p.decay;
		let mut n = 0;
		while !p.is_expired() {
			p.advance();
			n += 1;
			assert!((p.alpha - (1.0 - n as f64 * decay)).abs() < 1e-9);
		}
		assert!(p.alpha <= 0.0);
		// 1 / 0.01 is the slowest possible fade
		assert!(n <= 101);
	}

	#[test]
	fn explosion_moves_along_angle_with_gravity() {
		let mut rng = Rng::with_seed(11);
		let mut p = ExplosionParticle::new(100.0, 100.0, RED, &mut rng);
		p.angle = 0.0;
		p.speed = 4.0;
		p.advance();
		assert!((p.x - (100.0 + 4.0 * 0.97)).abs() < 1e-9);
		assert!((p.y - (100.0 + GRAVITY)).abs() < 1e-9);
	}

	#[test]
	fn explosion_parameters_stay_in_range() {
		let mut rng = Rng::with_seed(5);
		for _ in 0..500 {
			let p = ExplosionParticle::new(0.0, 0.0, RED, &mut rng);
			assert!(EXPLOSION_SPEED.contains(&p.speed));
			assert!(EXPLOSION_DECAY.contains(&p.decay));
			assert!(EXPLOSION_RADIUS.contains(&p.radius));
			assert!((0.0..TAU).contains(&p.angle));
			assert_eq!(p.friction, FRICTION);
		}
	}

	#[test]
	fn firework_rises_by_speed_and_leaves_trail() {
		let mut rng = Rng::with_seed(1);
		let mut fw = Firework::new(50.0, 600.0, 100.0, RED, &mut rng);
		assert!(ASCENT_SPEED.contains(&fw.speed));
		let before = fw.y;
		let ascent = fw.advance(&mut rng);
		assert!((fw.y - (before - fw.speed)).abs() < 1e-9);
		assert_eq!((ascent.trail.x, ascent.trail.y), (fw.x, fw.y));
		assert!(ascent.explosion.is_empty());
		assert!(!fw.exploded);
	}

	#[test]
	fn firework_bursts_on_crossing_target() {
		let mut rng = Rng::with_seed(9);
		let mut fw = Firework::new(50.0, 600.0, 300.0, RED, &mut rng);
		let mut ticks = 0;
		let burst = loop {
			let prev = fw.y;
			let ascent = fw.advance(&mut rng);
			ticks += 1;
			assert!(fw.y < prev);
			if fw.exploded {
				break ascent.explosion;
			}
			assert!(fw.y > fw.target_y);
		};
		assert!(fw.y <= fw.target_y);
		assert!(ticks >= 300 / 9);
		assert!(BURST_COUNT.contains(&burst.len()));
		for p in &burst {
			assert_eq!((p.x, p.y), (fw.x, fw.y));
			assert_eq!(p.color, RED);
		}
	}

	#[test]
	fn burst_size_covers_range() {
		let mut rng = Rng::with_seed(21);
		let fw = Firework::new(0.0, 0.0, 0.0, RED, &mut rng);
		for _ in 0..50 {
			let n = fw.explode(&mut rng).len();
			assert!((80..130).contains(&n));
		}
	}

	#[test]
	fn ascent_flattens_trail_first() {
		let mut rng = Rng::with_seed(2);
		let mut fw = Firework::new(0.0, 10.0, 5.0, RED, &mut rng);
		let ascent = fw.advance(&mut rng);
		let n = ascent.explosion.len();
		let particles: Vec<_> = ascent.into_particles().collect();
		assert_eq!(particles.len(), n + 1);
		assert!(matches!(particles[0], Particle::Trail(_)));
		assert!(particles[1..].iter().all(|p| matches!(p, Particle::Explosion(_))));
	}
}
