//! Flame particles and the fixed pool that drives them.
//!
//! Particles are never destroyed. A particle whose lifetime runs out, or which
//! drifts off the canvas, is reset in place and respawns at the current flame
//! origin with freshly sampled properties.

use std::f64::consts::FRAC_PI_2;

use fastrand::Rng;

use super::math::{Point, angle, distance, fade_in, fade_in_out, lerp, rand_in, rand_range};
use super::render::Surface;
use super::scene::Scene;
use super::theme::ParticleStyle;

/// Speed reached at half a canvas height from the origin.
const SPEED_GAIN: f64 = 20.0;
/// Per-frame ease of horizontal velocity toward the drift target.
const DRIFT_EASE: f64 = 0.1;
/// Per-frame multiplier on vertical velocity.
const RISE_ACCEL: f64 = 1.01;

/// A single flame particle.
#[derive(Clone, Debug, Default)]
pub struct Particle {
	pub position: Point,
	pub velocity: Point,
	/// Rectangle width in pixels.
	pub size: f64,
	/// Hue in degrees.
	pub hue: f64,
	/// Frames since the last reset.
	pub life: u32,
	/// Lifetime in frames.
	pub ttl: f64,
	pub speed: f64,
}

impl Particle {
	pub fn new(scene: &Scene, style: &ParticleStyle, rng: &mut Rng) -> Self {
		let mut particle = Self::default();
		particle.reset(scene, style, rng);
		particle
	}

	/// Respawn near the scene center with freshly sampled properties.
	pub fn reset(&mut self, scene: &Scene, style: &ParticleStyle, rng: &mut Rng) {
		self.life = 0;
		self.ttl = rand_in(rng, style.ttl.0, style.ttl.1);
		self.speed = rand_in(rng, style.speed.0, style.speed.1);
		self.size = rand_in(rng, style.size.0, style.size.1);

		let center = scene.center;
		self.position = Point::new(
			center.x + rand_range(rng, style.spawn_jitter_x),
			center.y + rand_in(rng, style.spawn_offset_y.0, style.spawn_offset_y.1),
		);

		let direction = angle(center, self.position);
		self.velocity = Point::new(
			direction.cos() * self.speed,
			direction.sin() * self.speed * style.vertical_stretch,
		);
		self.hue = rand_in(rng, style.hue.0, style.hue.1);
	}

	/// Advance one frame, resetting when expired or off canvas.
	pub fn update(&mut self, scene: &Scene, style: &ParticleStyle, rng: &mut Rng) -> &mut Self {
		self.speed = fade_in(distance(scene.center, self.position), 0.5 * scene.height) * SPEED_GAIN;
		self.velocity.x = lerp(self.velocity.x, (-FRAC_PI_2).cos() * self.speed, DRIFT_EASE);
		self.velocity.y *= RISE_ACCEL;
		self.position.x += self.velocity.x;
		self.position.y += self.velocity.y;

		// Bounds first: an off-canvas particle does not age.
		if self.is_out_of_bounds(scene) || self.tick_life() {
			self.reset(scene, style, rng);
		}

		self
	}

	/// Ages the particle by one frame, reporting whether it was already past its ttl.
	fn tick_life(&mut self) -> bool {
		let expired = f64::from(self.life) > self.ttl;
		self.life += 1;
		expired
	}

	pub fn is_out_of_bounds(&self, scene: &Scene) -> bool {
		!scene.contains(self.position)
	}

	/// Opacity over the lifetime: transparent at birth and death, opaque halfway.
	pub fn alpha(&self) -> f64 {
		fade_in_out(f64::from(self.life), self.ttl)
	}

	pub fn color(&self, style: &ParticleStyle) -> String {
		format!(
			"hsla({}, {}%, {}%, {})",
			self.hue,
			style.saturation,
			style.lightness,
			self.alpha()
		)
	}

	pub fn draw<S: Surface>(&self, surface: &mut S, style: &ParticleStyle) {
		surface.fill_rect(
			self.position.x,
			self.position.y,
			self.size,
			self.size * style.aspect,
			&self.color(style),
		);
	}
}

/// Fixed-size particle pool. Created once, never resized.
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	rng: Rng,
}

impl ParticleSystem {
	pub fn new(count: usize, scene: &Scene, style: &ParticleStyle, mut rng: Rng) -> Self {
		let particles = (0..count)
			.map(|_| Particle::new(scene, style, &mut rng))
			.collect();
		Self { particles, rng }
	}

	/// Draw every particle at its current state, then advance it.
	pub fn step<S: Surface>(&mut self, scene: &Scene, style: &ParticleStyle, surface: &mut S) {
		for particle in &mut self.particles {
			particle.draw(surface, style);
			particle.update(scene, style, &mut self.rng);
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	#[allow(dead_code, reason = "Pairs with len for clippy::len_without_is_empty")]
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
