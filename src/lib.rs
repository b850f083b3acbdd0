//! new-year-fireworks: canvas fireworks with a countdown to the new year.
//!
//! This crate provides a WASM app that renders click-launched fireworks over a
//! twinkling star background, counts down to a configured instant, and fires a
//! celebration burst when the countdown completes or the celebrate button is pressed.

use fastrand::Rng;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlScriptElement, MouseEvent, Window};

pub mod components;

pub use components::fireworks::{
	Countdown, CountdownConfig, CountdownTick, FireworksCanvas, StarField, Theme,
};

use components::fireworks::entropy_seed;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("new-year-fireworks: logging initialized");
}

/// Load countdown settings from a script element with id="countdown-config".
/// Expected format: JSON with any of { target, message, sound_url }
fn load_countdown_config() -> Option<CountdownConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("countdown-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<CountdownConfig>(&json_text) {
		Ok(config) => {
			info!("new-year-fireworks: counting down to {}", config.target);
			Some(config)
		}
		Err(e) => {
			warn!("new-year-fireworks: failed to parse countdown config: {}", e);
			None
		}
	}
}

/// Resolve the configured target to epoch milliseconds, falling back to the
/// default target when the string does not parse.
fn target_millis(config: &CountdownConfig) -> f64 {
	let parsed = js_sys::Date::parse(&config.target);
	if parsed.is_nan() {
		warn!(
			"new-year-fireworks: unparseable target {:?}, using default",
			config.target
		);
		js_sys::Date::parse(&CountdownConfig::default().target)
	} else {
		parsed
	}
}

/// Evaluate the countdown now and then every second, writing the display text
/// and bumping `bursts` once when it completes.
fn start_countdown(
	mut countdown: Countdown,
	message: String,
	text: RwSignal<String>,
	bursts: RwSignal<u32>,
) {
	let mut update = move || match countdown.update(js_sys::Date::now()) {
		CountdownTick::Remaining(remaining) => text.set(remaining.to_string()),
		CountdownTick::Finished => {
			info!("new-year-fireworks: countdown finished");
			text.set(message.clone());
			bursts.update(|n| *n += 1);
		}
		CountdownTick::Done => {}
	};
	update();

	let Some(window) = web_sys::window() else {
		warn!("new-year-fireworks: no window, countdown will not advance");
		return;
	};
	let tick = Closure::<dyn FnMut()>::new(update);
	if let Err(e) = window
		.set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), 1000)
	{
		warn!("new-year-fireworks: failed to start countdown: {:?}", e);
	}
	// Runs for the lifetime of the page.
	tick.forget();
}

/// Main application component.
/// Loads the countdown config from the DOM and renders stars, fireworks and countdown.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_countdown_config().unwrap_or_default();
	let theme = Theme::default();
	let stars = StarField::new(&theme.stars, &mut Rng::with_seed(entropy_seed()));

	let text = RwSignal::new(String::new());
	let bursts = RwSignal::new(0u32);
	start_countdown(
		Countdown::new(target_millis(&config)),
		config.message.clone(),
		text,
		bursts,
	);

	let celebrate = move |_: MouseEvent| bursts.update(|n| *n += 1);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Happy New Year" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="stars">
			{stars
				.stars
				.into_iter()
				.map(|star| view! { <div class="star" style=star.css()></div> })
				.collect_view()}
		</div>
		<FireworksCanvas bursts=bursts sound_url=config.sound_url />
		<div class="fireworks-overlay">
			<h1 class="countdown">{move || text.get()}</h1>
			<button class="celebrate" on:click=celebrate>"Celebrate"</button>
		</div>
	}
}
