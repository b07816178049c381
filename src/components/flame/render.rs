//! Frame rendering for the flame effect.
//!
//! Each frame is built on two surfaces:
//! 1. The working surface is cleared and receives the raw particle rectangles.
//! 2. The visible surface gets a faint trail fill, then one blurred copy of the
//!    working surface per composite pass in the theme.
//!
//! Drawing goes through the [`Surface`] trait so the pipeline can run against
//! a real canvas or a recorder in tests.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::error::SurfaceError;
use super::particle::ParticleSystem;
use super::scene::{CENTER_EASE, Scene};
use super::theme::{CompositePass, Theme};

/// A 2D raster sink.
pub trait Surface {
	/// Clear the region `(0, 0, width, height)` to transparent.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill a rectangle with a CSS color.
	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);

	/// Draw `source` over this surface at the origin, filtered by `pass`.
	fn composite(&mut self, source: &Self, pass: &CompositePass);
}

/// [`Surface`] backed by an HTML canvas and its 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::ContextUnavailable)?;
		Ok(Self { canvas, ctx })
	}

	/// Creates an offscreen canvas that is never attached to the page.
	pub fn detached(document: &Document) -> Result<Self, SurfaceError> {
		let canvas = document
			.create_element("canvas")
			.map_err(|e| SurfaceError::CreateElement(format!("{e:?}")))?
			.dyn_into::<HtmlCanvasElement>()
			.map_err(|_| SurfaceError::CreateElement("element is not a canvas".into()))?;
		Self::from_canvas(canvas)
	}

	pub fn resize(&self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
		self.ctx.save();
		self.ctx.set_fill_style_str(color);
		self.ctx.fill_rect(x, y, w, h);
		self.ctx.restore();
	}

	fn composite(&mut self, source: &Self, pass: &CompositePass) {
		self.ctx.save();
		self.ctx.set_filter(&pass.filter_css());
		let _ = self
			.ctx
			.set_global_composite_operation(pass.blend.as_css());
		let _ = self
			.ctx
			.draw_image_with_html_canvas_element(&source.canvas, 0.0, 0.0);
		self.ctx.restore();
	}
}

/// Runs one full frame: clear, trail, ease, particles, composite.
pub fn render_frame<S: Surface>(
	scene: &mut Scene,
	particles: &mut ParticleSystem,
	theme: &Theme,
	working: &mut S,
	visible: &mut S,
) {
	let (w, h) = (scene.width, scene.height);

	working.clear(w, h);
	visible.fill_rect(0.0, 0.0, w, h, &theme.trail.to_css());

	scene.ease_center(CENTER_EASE);
	particles.step(scene, &theme.particles, working);

	for pass in &theme.passes {
		visible.composite(working, pass);
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// A draw call captured by [`RecordingSurface`].
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Clear {
			width: f64,
			height: f64,
		},
		FillRect {
			x: f64,
			y: f64,
			w: f64,
			h: f64,
			color: String,
		},
		Composite {
			source_ops: usize,
			pass: CompositePass,
		},
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub ops: Vec<DrawOp>,
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64) {
			self.ops.push(DrawOp::Clear { width, height });
		}

		fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
			self.ops.push(DrawOp::FillRect {
				x,
				y,
				w,
				h,
				color: color.to_string(),
			});
		}

		fn composite(&mut self, source: &Self, pass: &CompositePass) {
			self.ops.push(DrawOp::Composite {
				source_ops: source.ops.len(),
				pass: *pass,
			});
		}
	}
}
