//! Scene state: canvas bounds, the flame origin and pointer tracking.
//!
//! The origin ("center") never jumps. Each frame it eases toward either the
//! pointer, while the pointer is over the canvas, or a resting point near the
//! bottom of the canvas.

use super::math::{Point, lerp_point};

/// Per-frame ease factor for the flame origin.
pub const CENTER_EASE: f64 = 0.1;

/// Canvas size, flame origin and pointer state.
#[derive(Clone, Debug)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub center: Point,
	pub pointer: Point,
	pub hover: bool,
}

impl Scene {
	pub fn new(width: f64, height: f64) -> Self {
		let mut scene = Self {
			width,
			height,
			center: Point::default(),
			pointer: Point::default(),
			hover: false,
		};
		scene.center = scene.resting_point();
		scene
	}

	/// Where the origin settles when nothing is hovering:
	/// horizontally centered, three quarters of the way down.
	pub fn resting_point(&self) -> Point {
		Point::new(0.5 * self.width, 0.75 * self.height)
	}

	pub fn target(&self) -> Point {
		if self.hover {
			self.pointer
		} else {
			self.resting_point()
		}
	}

	/// Move the origin one step toward its target.
	pub fn ease_center(&mut self, speed: f64) {
		self.center = lerp_point(self.center, self.target(), speed);
	}

	/// Record a pointer event. `moving` is false when the pointer left the canvas.
	pub fn set_pointer(&mut self, x: f64, y: f64, moving: bool) {
		self.pointer = Point::new(x, y);
		self.hover = moving;
	}

	/// Resize the scene bounds and snap the origin back to its resting point.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.center = self.resting_point();
	}

	pub fn contains(&self, p: Point) -> bool {
		p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn starts_at_resting_point() {
		let scene = Scene::new(800.0, 600.0);
		assert_eq!(scene.center, Point::new(400.0, 450.0));
		assert!(!scene.hover);
	}

	#[test]
	fn idle_center_stays_put() {
		let mut scene = Scene::new(800.0, 600.0);
		scene.ease_center(CENTER_EASE);
		assert!((scene.center.x - 400.0).abs() < EPS);
		assert!((scene.center.y - 450.0).abs() < EPS);
	}

	#[test]
	fn hovering_pulls_center_toward_pointer() {
		let mut scene = Scene::new(800.0, 600.0);
		scene.set_pointer(100.0, 100.0, true);
		scene.ease_center(CENTER_EASE);
		assert!((scene.center.x - (0.9 * 400.0 + 0.1 * 100.0)).abs() < EPS);
		assert!((scene.center.y - (0.9 * 450.0 + 0.1 * 100.0)).abs() < EPS);
	}

	#[test]
	fn leaving_returns_center_to_rest() {
		let mut scene = Scene::new(800.0, 600.0);
		scene.set_pointer(100.0, 100.0, true);
		for _ in 0..10 {
			scene.ease_center(CENTER_EASE);
		}
		scene.set_pointer(100.0, 100.0, false);
		assert_eq!(scene.target(), Point::new(400.0, 450.0));
		for _ in 0..500 {
			scene.ease_center(CENTER_EASE);
		}
		assert!((scene.center.x - 400.0).abs() < 1e-6);
		assert!((scene.center.y - 450.0).abs() < 1e-6);
	}

	#[test]
	fn resize_recenters() {
		let mut scene = Scene::new(800.0, 600.0);
		scene.set_pointer(10.0, 10.0, true);
		scene.ease_center(CENTER_EASE);
		scene.resize(1000.0, 400.0);
		assert_eq!(scene.center, Point::new(500.0, 300.0));
	}

	#[test]
	fn contains_includes_edges() {
		let scene = Scene::new(800.0, 600.0);
		assert!(scene.contains(Point::new(0.0, 0.0)));
		assert!(scene.contains(Point::new(800.0, 600.0)));
		assert!(!scene.contains(Point::new(-0.1, 10.0)));
		assert!(!scene.contains(Point::new(10.0, 600.1)));
	}
}
