//! Small numeric helpers shared by the particle simulation.
//!
//! Everything here is a pure function. Randomness comes from an explicit
//! [`fastrand::Rng`] so callers decide how it is seeded.

use fastrand::Rng;

/// A 2D point or vector in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Uniform sample between `min` and `max`. Bounds may be given in either order.
pub fn rand_in(rng: &mut Rng, min: f64, max: f64) -> f64 {
	min + rng.f64() * (max - min)
}

/// Symmetric jitter in `(-n, n]`.
pub fn rand_range(rng: &mut Rng, n: f64) -> f64 {
	n - rng.f64() * 2.0 * n
}

/// Linear ramp from 0 at `t = 0` to 1 at `t = m`.
pub fn fade_in(t: f64, m: f64) -> f64 {
	t / m
}

/// Linear ramp from 1 at `t = 0` to 0 at `t = m`.
#[allow(
	dead_code,
	reason = "Mirror of fade_in, kept alongside it for custom particle curves"
)]
pub fn fade_out(t: f64, m: f64) -> f64 {
	(m - t) / m
}

/// Triangular curve: 0 at both ends of `[0, m]`, 1 at the midpoint.
pub fn fade_in_out(t: f64, m: f64) -> f64 {
	let hm = 0.5 * m;
	((t + hm) % m - hm).abs() / hm
}

pub fn distance(a: Point, b: Point) -> f64 {
	(b.x - a.x).hypot(b.y - a.y)
}

/// Angle of the vector from `a` to `b`, in radians.
pub fn angle(a: Point, b: Point) -> f64 {
	(b.y - a.y).atan2(b.x - a.x)
}

pub fn lerp(a: f64, b: f64, speed: f64) -> f64 {
	(1.0 - speed) * a + speed * b
}

/// Componentwise [`lerp`] between two points.
pub fn lerp_point(a: Point, b: Point, speed: f64) -> Point {
	Point {
		x: lerp(a.x, b.x, speed),
		y: lerp(a.y, b.y, speed),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-12;

	#[test]
	fn fade_curves_hit_their_endpoints() {
		for m in [1.0, 10.0, 17.5, 600.0] {
			assert!(fade_in(0.0, m).abs() < EPS);
			assert!((fade_in(m, m) - 1.0).abs() < EPS);
			assert!((fade_out(0.0, m) - 1.0).abs() < EPS);
			assert!(fade_out(m, m).abs() < EPS);
		}
	}

	#[test]
	fn fade_in_out_peaks_at_midpoint() {
		for m in [2.0, 10.0, 23.3, 30.0] {
			assert!(fade_in_out(0.0, m).abs() < EPS);
			assert!(fade_in_out(m, m).abs() < EPS);
			assert!((fade_in_out(0.5 * m, m) - 1.0).abs() < EPS);
			assert!((fade_in_out(0.25 * m, m) - 0.5).abs() < EPS);
			assert!((fade_in_out(0.75 * m, m) - 0.5).abs() < EPS);
		}
	}

	#[test]
	fn lerp_endpoints_and_monotonic() {
		assert_eq!(lerp(3.0, 9.0, 0.0), 3.0);
		assert_eq!(lerp(3.0, 9.0, 1.0), 9.0);

		let mut prev = lerp(3.0, 9.0, 0.0);
		for i in 1..=20 {
			let next = lerp(3.0, 9.0, i as f64 / 20.0);
			assert!(next >= prev);
			prev = next;
		}
	}

	#[test]
	fn lerp_point_is_componentwise() {
		let p = lerp_point(Point::new(0.0, 10.0), Point::new(10.0, 0.0), 0.25);
		assert!((p.x - 2.5).abs() < EPS);
		assert!((p.y - 7.5).abs() < EPS);
	}

	#[test]
	fn distance_and_angle() {
		let a = Point::new(1.0, 1.0);
		let b = Point::new(4.0, 5.0);
		assert!((distance(a, b) - 5.0).abs() < EPS);
		assert!((angle(a, Point::new(1.0, 3.0)) - std::f64::consts::FRAC_PI_2).abs() < EPS);
		assert!(angle(a, Point::new(2.0, 1.0)).abs() < EPS);
	}

	#[test]
	fn random_helpers_stay_in_range() {
		let mut rng = Rng::with_seed(7);
		for _ in 0..1000 {
			let v = rand_in(&mut rng, 10.0, 30.0);
			assert!((10.0..=30.0).contains(&v));

			let flipped = rand_in(&mut rng, -10.0, -30.0);
			assert!((-30.0..=-10.0).contains(&flipped));

			let j = rand_range(&mut rng, 40.0);
			assert!((-40.0..=40.0).contains(&j));
		}
	}
}
