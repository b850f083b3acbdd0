//! Static background star layer.
//!
//! Stars are generated once and rendered as positioned elements; the twinkle
//! itself is a CSS animation, staggered by each star's delay.

use fastrand::Rng;

use super::theme::StarStyle;

/// A single background star, positioned in viewport percentages.
#[derive(Clone, Debug)]
pub struct Star {
	/// Edge length in pixels
	pub size: f64,
	pub left: f64,
	pub top: f64,
	/// Twinkle animation delay in seconds
	pub delay: f64,
}

impl Star {
	/// Inline CSS placing and sizing this star.
	pub fn css(&self) -> String {
		format!(
			"width: {size:.2}px; height: {size:.2}px; left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
			self.left,
			self.top,
			self.delay,
			size = self.size,
		)
	}
}

/// The full set of background stars.
#[derive(Clone, Debug, Default)]
pub struct StarField {
	pub stars: Vec<Star>,
}

impl StarField {
	pub fn new(style: &StarStyle, rng: &mut Rng) -> Self {
		let stars = (0..style.count)
			.map(|_| Star {
				size: style.size_min + rng.f64() * (style.size_max - style.size_min),
				left: rng.f64() * 100.0,
				top: rng.f64() * 100.0,
				delay: rng.f64() * style.max_delay,
			})
			.collect();
		Self { stars }
	}
}

#[cfg(test)]
mod tests {
	use super::super::theme::Theme;
	use super::*;

	#[test]
	fn generates_configured_star_count_within_bounds() {
		let style = Theme::default().stars;
		let field = StarField::new(&style, &mut Rng::with_seed(12));
		assert_eq!(field.stars.len(), 50);
		for star in &field.stars {
			assert!((1.0..3.0).contains(&star.size));
			assert!((0.0..100.0).contains(&star.left));
			assert!((0.0..100.0).contains(&star.top));
			assert!((0.0..4.0).contains(&star.delay));
		}
	}

	#[test]
	fn css_places_star() {
		let star = Star {
			size: 1.5,
			left: 10.0,
			top: 20.25,
			delay: 3.0,
		};
		assert_eq!(
			star.css(),
			"width: 1.50px; height: 1.50px; left: 10.00%; top: 20.25%; animation-delay: 3.00s;"
		);
	}
}
