//! Host surface adapter: the draw primitives and audio cue the simulation needs.
//!
//! The simulation only ever talks to [`Surface`] and [`AudioCue`]; the browser
//! implementations live here so the rest of the module runs natively in tests.

use std::f64::consts::TAU;

use log::warn;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, Window};

use super::theme::Color;

/// Failures talking to the browser host.
#[derive(Debug, Error)]
pub enum HostError {
	#[error("no global window")]
	NoWindow,
	#[error("canvas has no {0} context")]
	NoContext(&'static str),
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for HostError {
	fn from(value: JsValue) -> Self {
		HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Draw primitives issued by entity renderers.
pub trait Surface {
	/// Erase the whole `width` x `height` area.
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
	fn set_global_alpha(&mut self, alpha: f64);
	/// Blur radius and color of the glow around subsequent shapes; `0.0` disables it.
	fn set_glow(&mut self, blur: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn set_glow(&mut self, blur: f64, color: Color) {
		self.set_shadow_blur(blur);
		self.set_shadow_color(&color.to_css());
	}
}

/// A sound that restarts from the beginning each time it is triggered.
pub trait AudioCue {
	fn restart(&self) -> Result<(), HostError>;
}

/// A missing cue plays nothing.
impl<A: AudioCue> AudioCue for Option<A> {
	fn restart(&self) -> Result<(), HostError> {
		match self {
			Some(cue) => cue.restart(),
			None => Ok(()),
		}
	}
}

/// Restart `cue`, logging instead of failing when the host refuses playback.
pub fn play_cue(cue: &impl AudioCue) {
	if let Err(e) = cue.restart() {
		warn!("fireworks: audio play failed: {}", e);
	}
}

/// An `<audio>` element used as the launch sound.
///
/// `play()` reports autoplay blocks through a rejected promise, so the element
/// keeps one rejection handler alive for every restart.
pub struct SoundCue {
	element: HtmlAudioElement,
	on_reject: Closure<dyn FnMut(JsValue)>,
}

impl SoundCue {
	pub fn new(element: HtmlAudioElement) -> Self {
		let on_reject = Closure::new(|err: JsValue| {
			warn!("fireworks: audio play failed: {}", HostError::from(err));
		});
		Self { element, on_reject }
	}
}

impl AudioCue for SoundCue {
	fn restart(&self) -> Result<(), HostError> {
		self.element.set_current_time(0.0);
		let promise = self.element.play()?;
		let _ = promise.catch(&self.on_reject);
		Ok(())
	}
}

pub fn window() -> Result<Window, HostError> {
	web_sys::window().ok_or(HostError::NoWindow)
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), HostError> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok((width, height))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, HostError> {
	canvas
		.get_context("2d")?
		.ok_or(HostError::NoContext("2d"))?
		.dyn_into()
		.map_err(|_| HostError::NoContext("2d"))
}

/// Seed for the simulation's random source.
pub fn entropy_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}


#[cfg(test)]
mod tests {
	use super::testing::FakeCue;
	use super::*;

	#[test]
	fn play_cue_swallows_blocked_audio() {
		let cue = FakeCue {
			blocked: true,
			..FakeCue::default()
		};
		play_cue(&cue);
		play_cue(&cue);
		assert_eq!(cue.restarts.get(), 2);
	}

	#[test]
	fn host_error_messages() {
		assert_eq!(HostError::NoWindow.to_string(), "no global window");
		assert_eq!(HostError::NoContext("2d").to_string(), "canvas has no 2d context");
		assert_eq!(
			HostError::Js("NotAllowedError".into()).to_string(),
			"javascript error: NotAllowedError"
		);
	}
}
