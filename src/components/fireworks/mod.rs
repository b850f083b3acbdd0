//! Fireworks canvas component.
//!
//! Renders a celebratory particle animation on an HTML canvas with:
//! - Shells launched toward pointer clicks
//! - Staggered celebration bursts on demand
//! - Trail and explosion particles with friction, gravity and fading
//! - A countdown to a fixed instant and a static star background
//!
//! # Example
//!
//! ```ignore
//! use new_year_fireworks::components::fireworks::FireworksCanvas;
//!
//! let bursts = RwSignal::new(0u32);
//! view! {
//!     <FireworksCanvas bursts=bursts sound_url="firework.mp3" />
//!     <button on:click=move |_| bursts.update(|n| *n += 1)>"Celebrate"</button>
//! }
//! ```

mod component;
mod countdown;
mod emit;
mod entity;
mod render;
mod stars;
mod state;
mod surface;
pub mod theme;
mod types;

pub use component::FireworksCanvas;
pub use countdown::{Countdown, CountdownTick, Remaining};
pub use stars::{Star, StarField};
pub use surface::entropy_seed;
pub use theme::Theme;
pub use types::CountdownConfig;
