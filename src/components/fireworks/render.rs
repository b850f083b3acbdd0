//! Drawing for fireworks and particles.
//!
//! Each entity draws itself onto a [`Surface`] without mutating its own state.
//! Alpha and glow are surface-wide settings, so every renderer puts them back to
//! full opacity and no glow before returning.

use super::entity::{ExplosionParticle, Firework, Particle, TrailParticle};
use super::surface::Surface;
use super::theme::{Color, GlowStyle};

const NO_GLOW: Color = Color::rgba(0, 0, 0, 0.0);

/// Canvas ignores out-of-range alpha and would keep the previous value.
fn visible_alpha(alpha: f64) -> f64 {
	alpha.clamp(0.0, 1.0)
}

impl Firework {
	pub fn render<S: Surface>(&self, surface: &mut S, glow: &GlowStyle) {
		surface.set_glow(glow.firework_blur, self.color);
		surface.fill_circle(self.x, self.y, glow.firework_radius, self.color);
		surface.set_glow(0.0, NO_GLOW);
	}
}

impl TrailParticle {
	pub fn render<S: Surface>(&self, surface: &mut S, glow: &GlowStyle) {
		surface.set_global_alpha(visible_alpha(self.alpha));
		surface.fill_rect(self.x, self.y, glow.trail_size, glow.trail_size, self.color);
		surface.set_global_alpha(1.0);
	}
}

impl ExplosionParticle {
	pub fn render<S: Surface>(&self, surface: &mut S, glow: &GlowStyle) {
		surface.set_global_alpha(visible_alpha(self.alpha));
		surface.set_glow(glow.explosion_blur, self.color);
		surface.fill_circle(self.x, self.y, self.radius, self.color);
		surface.set_glow(0.0, NO_GLOW);
		surface.set_global_alpha(1.0);
	}
}

impl Particle {
	pub fn render<S: Surface>(&self, surface: &mut S, glow: &GlowStyle) {
		match self {
			Particle::Trail(p) => p.render(surface, glow),
			Particle::Explosion(p) => p.render(surface, glow),
		}
	}
}

#[cfg(test)]
mod tests {
	use fastrand::Rng;

	use super::super::surface::testing::{Draw, RecordingSurface};
	use super::super::theme::Theme;
	use super::*;

	const GOLD: Color = Color::rgb(0xff, 0xd7, 0x00);

	#[test]
	fn firework_is_a_glowing_circle() {
		let theme = Theme::default();
		let mut rng = Rng::with_seed(1);
		let fw = Firework::new(40.0, 90.0, 10.0, GOLD, &mut rng);
		let mut surface = RecordingSurface::default();
		fw.render(&mut surface, &theme.glow);

		assert_eq!(
			surface.calls,
			vec![
				Draw::Glow(10.0),
				Draw::Circle {
					x: 40.0,
					y: 90.0,
					radius: 3.0,
					color: GOLD
				},
				Draw::Glow(0.0),
			]
		);
	}

	#[test]
	fn trail_is_a_faded_square_and_restores_alpha() {
		let theme = Theme::default();
		let mut p = TrailParticle::new(5.0, 6.0, GOLD);
		p.advance();
		let mut surface = RecordingSurface::default();
		p.render(&mut surface, &theme.glow);

		assert_eq!(surface.rects(), 1);
		assert_eq!(surface.circles(), 0);
		match surface.calls[0] {
			Draw::Alpha(a) => assert!((a - 0.95).abs() < 1e-9),
			ref other => panic!("expected alpha first, got {:?}", other),
		}
		assert_eq!(surface.last_alpha(), Some(1.0));
	}

	#[test]
	fn explosion_glows_and_restores_state() {
		let theme = Theme::default();
		let mut rng = Rng::with_seed(6);
		let p = ExplosionParticle::new(1.0, 2.0, GOLD, &mut rng);
		let mut surface = RecordingSurface::default();
		Particle::Explosion(p).render(&mut surface, &theme.glow);

		assert_eq!(surface.circles(), 1);
		assert!(surface.calls.contains(&Draw::Glow(15.0)));
		assert_eq!(surface.last_glow(), Some(0.0));
		assert_eq!(surface.last_alpha(), Some(1.0));
	}

	#[test]
	fn spent_particle_drawn_fully_transparent() {
		let theme = Theme::default();
		let mut p = TrailParticle::new(0.0, 0.0, GOLD);
		p.alpha = -0.04;
		let mut surface = RecordingSurface::default();
		p.render(&mut surface, &theme.glow);
		assert_eq!(surface.calls[0], Draw::Alpha(0.0));
	}
}
