//! Visual theming for the flame effect.
//!
//! A [`Theme`] bundles everything that decides how the fire looks: the
//! sampling ranges particles are spawned with, the trail left on the visible
//! canvas, and the stack of blurred composite passes that turn hard
//! rectangles into a glow.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// Canvas `globalCompositeOperation` used by a composite pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
	/// Plain alpha blending.
	SourceOver,
	SoftLight,
	/// Additive blending.
	Lighter,
}

impl BlendMode {
	pub fn as_css(self) -> &'static str {
		match self {
			BlendMode::SourceOver => "source-over",
			BlendMode::SoftLight => "soft-light",
			BlendMode::Lighter => "lighter",
		}
	}
}

/// One copy of the working surface drawn onto the visible surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositePass {
	/// Blur radius in pixels.
	pub blur: f64,
	pub blend: BlendMode,
}

impl CompositePass {
	pub const fn new(blur: f64, blend: BlendMode) -> Self {
		Self { blur, blend }
	}

	/// CSS filter string for this pass, e.g. `blur(15px)`.
	pub fn filter_css(&self) -> String {
		format!("blur({}px)", self.blur)
	}
}

/// Sampling ranges and shape of the particles.
///
/// Ranges are `(min, max)` pairs sampled uniformly on every reset.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Lifetime in frames.
	pub ttl: (f64, f64),
	/// Initial speed in pixels per frame.
	pub speed: (f64, f64),
	/// Rectangle width in pixels.
	pub size: (f64, f64),
	/// Hue in degrees.
	pub hue: (f64, f64),
	/// Saturation percentage.
	pub saturation: f64,
	/// Lightness percentage.
	pub lightness: f64,
	/// Horizontal spawn jitter around the center, symmetric.
	pub spawn_jitter_x: f64,
	/// Vertical spawn offset from the center (negative is up).
	pub spawn_offset_y: (f64, f64),
	/// Rectangle height as a multiple of its width.
	pub aspect: f64,
	/// Multiplier applied to the initial vertical velocity.
	pub vertical_stretch: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	/// Low-alpha fill laid over the visible surface each frame.
	pub trail: Color,
	/// Applied in order, first pass at the bottom.
	pub passes: Vec<CompositePass>,
	/// CSS `contrast()` applied to the visible canvas element.
	pub contrast: f64,
	pub particles: ParticleStyle,
}

impl Theme {
	/// Warm orange flame (default)
	pub fn ember() -> Self {
		Self {
			name: "ember",
			trail: Color::rgba(0, 0, 0, 0.15),
			passes: vec![
				CompositePass::new(15.0, BlendMode::SourceOver),
				CompositePass::new(18.0, BlendMode::SoftLight),
				CompositePass::new(6.0, BlendMode::Lighter),
			],
			contrast: 1.5,
			particles: ParticleStyle {
				ttl: (10.0, 30.0),
				speed: (3.0, 5.0),
				size: (1.0, 5.0),
				hue: (10.0, 40.0),
				saturation: 50.0,
				lightness: 50.0,
				spawn_jitter_x: 40.0,
				spawn_offset_y: (-10.0, -30.0),
				aspect: 1.5,
				vertical_stretch: 2.0,
			},
		}
	}

	/// Cold blue spirit flame
	pub fn wisp() -> Self {
		let mut theme = Self::ember();
		theme.name = "wisp";
		theme.particles.hue = (190.0, 220.0);
		theme
	}

	/// Looks up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"ember" => Some(Self::ember()),
			"wisp" => Some(Self::wisp()),
			_ => None,
		}
	}

	/// Inline style for the visible canvas element.
	pub fn canvas_css(&self) -> String {
		format!(
			"position: absolute; top: 0; left: 0; width: 100%; height: 100%; filter: contrast({});",
			self.contrast
		)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::ember()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ember_passes_in_compositing_order() {
		let theme = Theme::ember();
		let filters: Vec<_> = theme
			.passes
			.iter()
			.map(|p| (p.filter_css(), p.blend.as_css()))
			.collect();
		assert_eq!(
			filters,
			vec![
				("blur(15px)".to_string(), "source-over"),
				("blur(18px)".to_string(), "soft-light"),
				("blur(6px)".to_string(), "lighter"),
			]
		);
	}

	#[test]
	fn trail_is_faint_black() {
		assert_eq!(Theme::default().trail.to_css(), "rgba(0,0,0,0.15)");
	}

	#[test]
	fn presets_resolve_by_name() {
		assert_eq!(Theme::by_name("ember").map(|t| t.name), Some("ember"));
		let wisp = Theme::by_name("wisp").unwrap();
		assert_eq!(wisp.particles.hue, (190.0, 220.0));
		assert_eq!(wisp.passes, Theme::ember().passes);
		assert!(Theme::by_name("plasma").is_none());
	}

	#[test]
	fn canvas_css_carries_contrast() {
		assert!(Theme::ember().canvas_css().ends_with("filter: contrast(1.5);"));
	}
}
