//! Leptos component wrapping the fireworks canvas.
//!
//! The component creates a full-viewport canvas and the launch-sound element,
//! launches a shell toward every click, and starts a celebration burst whenever
//! the `bursts` signal changes. An animation loop runs via
//! `requestAnimationFrame`, calling [`FireworksState::tick`] each frame.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, MouseEvent};

use super::state::FireworksState;
use super::surface::{self, HostError, SoundCue};
use super::theme::Theme;

/// Bundles simulation state with its visual configuration and launch sound.
struct FireworksContext {
	state: FireworksState,
	theme: Theme,
	cue: Option<SoundCue>,
}

/// Renders fireworks on a canvas that fills the viewport.
///
/// Clicking the canvas launches one shell toward the clicked point. Every change
/// of `bursts` away from zero queues a celebration burst, including a non-zero
/// value present at mount.
#[component]
pub fn FireworksCanvas(
	#[prop(into)] bursts: Signal<u32>,
	#[prop(into)] sound_url: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let audio_ref = NodeRef::<leptos::html::Audio>::new();
	let context: Rc<RefCell<Option<FireworksContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let cue = audio_ref.get().map(|audio| {
			let audio: HtmlAudioElement = audio.into();
			SoundCue::new(audio)
		});

		if let Err(e) = mount(
			&canvas,
			cue,
			&context_init,
			&animate_init,
			&resize_cb_init,
		) {
			warn!("fireworks: canvas setup failed: {}", e);
		}
	});

	let context_burst = context.clone();
	Effect::new(move |prev: Option<u32>| {
		let count = bursts.get();
		if count != prev.unwrap_or(0) {
			if let Some(ref mut c) = *context_burst.borrow_mut() {
				c.state.start_celebration(&c.cue);
				info!(
					"fireworks: celebration burst, {} launches pending",
					c.state.pending_launches()
				);
			}
		}
		count
	});

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_click.borrow_mut() {
			c.state.click(x, y, &c.cue);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="fireworks-canvas"
			on:click=on_click
			style="position: fixed; inset: 0; display: block; cursor: pointer;"
		/>
		<audio node_ref=audio_ref src=sound_url preload="auto" />
	}
}

/// Size the canvas, build the simulation, and start the resize and frame callbacks.
fn mount(
	canvas: &HtmlCanvasElement,
	cue: Option<SoundCue>,
	context: &Rc<RefCell<Option<FireworksContext>>>,
	animate: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
	resize_cb: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
) -> Result<(), HostError> {
	let window = surface::window()?;
	let (w, h) = surface::viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let mut ctx: CanvasRenderingContext2d = surface::context_2d(canvas)?;

	let theme = Theme::default();
	info!(
		"fireworks: mounted {}x{} canvas, theme {}",
		w, h, theme.name
	);
	*context.borrow_mut() = Some(FireworksContext {
		state: FireworksState::new(
			w,
			h,
			theme.palette.clone(),
			Rng::with_seed(surface::entropy_seed()),
		),
		theme,
		cue,
	});

	let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Ok((nw, nh)) = surface::window().and_then(|win| surface::viewport_size(&win)) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		debug!("fireworks: resized to {}x{}", nw, nh);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.state.resize(nw, nh);
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let (context_anim, animate_inner) = (context.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
		if let Some(ref mut c) = *context_anim.borrow_mut() {
			c.state.tick(now_ms, &mut ctx, &c.theme.glow);
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Ok(win) = surface::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}

	Ok(())
}
