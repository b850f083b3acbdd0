//! Page configuration accepted by the fireworks app.

use serde::Deserialize;

/// Countdown and sound settings, read from a JSON `<script id="countdown-config">`.
///
/// Every field is optional in the JSON; missing fields take the defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CountdownConfig {
	/// Target instant in any format `Date.parse` accepts. Local time when no
	/// offset is given.
	pub target: String,
	/// Text shown once the countdown completes.
	pub message: String,
	/// URL of the launch sound.
	pub sound_url: String,
}

impl Default for CountdownConfig {
	fn default() -> Self {
		Self {
			target: "January 1, 2026 00:00:00".into(),
			message: "🎊 HAPPY NEW YEAR! 🎊".into(),
			sound_url: "firework.mp3".into(),
		}
	}
}
