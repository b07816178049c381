//! flame-canvas: a particle fire effect for the browser.
//!
//! This crate provides a WASM-based canvas component that renders a flame
//! made of short-lived particles, softened into a glow by layered blur passes
//! and steered by the pointer.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::flame::{FlameCanvas, FlameConfig, SurfaceError, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("flame-canvas: logging initialized");
}

/// Load settings from a script element with id="flame-config".
/// Expected format: JSON with optional { particle_count, theme, seed }.
fn load_config() -> Option<FlameConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("flame-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FlameConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"flame-canvas: loaded config ({} particles, {} theme)",
				config.particle_count, config.theme
			);
			Some(config)
		}
		Err(e) => {
			warn!("flame-canvas: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads settings from the DOM and renders the flame full screen.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Flame" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-flame" style="background: black; overflow: hidden;">
			<FlameCanvas config=config_signal />
		</div>
	}
}
