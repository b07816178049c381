//! Leptos component wrapping the flame canvases.
//!
//! The component renders the visible canvas, creates a detached working
//! canvas next to it, and wires pointer and resize handlers. An animation loop
//! runs via `requestAnimationFrame`, rendering one frame per callback.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::config::FlameConfig;
use super::error::SurfaceError;
use super::particle::ParticleSystem;
use super::render::{self, CanvasSurface};
use super::scene::Scene;
use super::theme::Theme;

/// Everything the frame loop mutates, owned in one place.
struct FlameContext {
	scene: Scene,
	particles: ParticleSystem,
	theme: Theme,
	working: CanvasSurface,
	visible: CanvasSurface,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(600.0),
	)
}

fn build_context(
	canvas: HtmlCanvasElement,
	config: &FlameConfig,
) -> Result<FlameContext, SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let document = window.document().ok_or(SurfaceError::NoDocument)?;
	let (w, h) = viewport_size(&window);

	let visible = CanvasSurface::from_canvas(canvas)?;
	let working = CanvasSurface::detached(&document)?;
	visible.resize(w, h);
	working.resize(w, h);

	let theme = config.theme();
	let scene = Scene::new(w, h);
	let particles =
		ParticleSystem::new(config.particle_count, &scene, &theme.particles, config.rng());

	info!(
		"flame-canvas: {} particles on {}x{} ({} theme)",
		particles.len(),
		w,
		h,
		theme.name
	);

	Ok(FlameContext {
		scene,
		particles,
		theme,
		working,
		visible,
	})
}

/// Pointer position relative to the canvas.
fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> (f64, f64) {
	let (cx, cy) = (ev.client_x() as f64, ev.client_y() as f64);
	match canvas_ref.get() {
		Some(canvas) => {
			let canvas: HtmlCanvasElement = canvas.into();
			let rect = canvas.get_bounding_client_rect();
			(cx - rect.left(), cy - rect.top())
		}
		None => (cx, cy),
	}
}

/// Renders the flame effect on a viewport-filling canvas.
///
/// Settings come from the `config` signal and are read once on mount. The
/// flame follows the pointer while it is over the canvas and drifts back to
/// rest near the bottom of the viewport when it leaves.
#[component]
pub fn FlameCanvas(#[prop(into)] config: Signal<FlameConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FlameContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	let style = config.get_untracked().theme().canvas_css();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		let flame = match build_context(canvas, &config.get_untracked()) {
			Ok(flame) => flame,
			Err(e) => {
				error!("flame-canvas: cannot start: {}", e);
				return;
			}
		};
		*context_init.borrow_mut() = Some(flame);

		let Some(window) = web_sys::window() else {
			return;
		};

		let context_resize = context_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.visible.resize(nw, nh);
				c.working.resize(nw, nh);
				c.scene.resize(nw, nh);
				debug!("flame-canvas: resized to {}x{}", nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				render::render_frame(
					&mut c.scene,
					&mut c.particles,
					&c.theme,
					&mut c.working,
					&mut c.visible,
				);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = pointer_position(canvas_ref, &ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.scene.set_pointer(x, y, true);
		}
	};

	let context_mo = context.clone();
	let on_mouseout = move |ev: MouseEvent| {
		let (x, y) = pointer_position(canvas_ref, &ev);
		if let Some(ref mut c) = *context_mo.borrow_mut() {
			c.scene.set_pointer(x, y, false);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="flame-canvas"
			on:mousemove=on_mousemove
			on:mouseout=on_mouseout
			style=style
		/>
	}
}
