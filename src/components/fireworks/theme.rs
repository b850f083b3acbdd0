//! Visual theming for the fireworks canvas.
//!
//! Provides the shell color palette, glow sizes, and the background star style.

use fastrand::Rng;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The fixed set of shell colors a firework can burn with.
#[derive(Clone, Debug)]
pub struct FireworkPalette {
	pub colors: Vec<Color>,
}

impl FireworkPalette {
	/// Saturated party palette (default)
	pub fn festive() -> Self {
		Self {
			colors: vec![
				Color::rgb(0xff, 0x00, 0x43), // Crimson
				Color::rgb(0x14, 0xfc, 0x56), // Neon green
				Color::rgb(0x1e, 0x90, 0xff), // Dodger blue
				Color::rgb(0xf5, 0xda, 0x42), // Lemon
				Color::rgb(0xff, 0x7b, 0x00), // Orange
				Color::rgb(0xff, 0x66, 0xff), // Orchid
				Color::rgb(0x00, 0xff, 0xff), // Cyan
				Color::rgb(0xff, 0xd7, 0x00), // Gold
				Color::rgb(0xff, 0x14, 0x93), // Deep pink
			],
		}
	}

	/// Uniformly pick one palette entry.
	pub fn pick(&self, rng: &mut Rng) -> Color {
		self.colors[rng.usize(..self.colors.len())]
	}
}

/// Shape sizes and glow radii used when drawing entities.
#[derive(Clone, Debug)]
pub struct GlowStyle {
	/// Radius of the rising shell
	pub firework_radius: f64,
	/// Shadow blur around the rising shell
	pub firework_blur: f64,
	/// Side of the square trail dot
	pub trail_size: f64,
	/// Shadow blur around explosion particles
	pub explosion_blur: f64,
}

/// Background star layer configuration.
#[derive(Clone, Debug)]
pub struct StarStyle {
	/// Number of stars
	pub count: usize,
	/// Minimum star size in pixels
	pub size_min: f64,
	/// Maximum star size in pixels
	pub size_max: f64,
	/// Upper bound of the random twinkle animation delay, in seconds
	pub max_delay: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub palette: FireworkPalette,
	pub glow: GlowStyle,
	pub stars: StarStyle,
}

impl Theme {
	/// Night sky with bright shells (default)
	pub fn new_year() -> Self {
		Self {
			name: "new_year",
			palette: FireworkPalette::festive(),
			glow: GlowStyle {
				firework_radius: 3.0,
				firework_blur: 10.0,
				trail_size: 2.0,
				explosion_blur: 15.0,
			},
			stars: StarStyle {
				count: 50,
				size_min: 1.0,
				size_max: 3.0,
				max_delay: 4.0,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::new_year()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_has_nine_distinct_colors() {
		let palette = FireworkPalette::festive();
		assert_eq!(palette.colors.len(), 9);
		for (i, a) in palette.colors.iter().enumerate() {
			for b in &palette.colors[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}

	#[test]
	fn pick_stays_in_palette() {
		let palette = FireworkPalette::festive();
		let mut rng = Rng::with_seed(7);
		for _ in 0..200 {
			let c = palette.pick(&mut rng);
			assert!(palette.colors.contains(&c));
		}
	}

	#[test]
	fn css_formats() {
		assert_eq!(Color::rgb(0xff, 0x00, 0x43).to_css(), "#ff0043");
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
	}
}
