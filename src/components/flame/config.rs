//! Page-supplied settings for the flame component.

use fastrand::Rng;
use log::warn;
use serde::Deserialize;

use super::theme::Theme;

/// Settings read from the host page. Every field is optional in the JSON.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlameConfig {
	/// Size of the particle pool.
	pub particle_count: usize,
	/// Theme preset name (`"ember"` or `"wisp"`).
	pub theme: String,
	/// Fixed RNG seed for a reproducible flame. Random when absent.
	pub seed: Option<u64>,
}

impl Default for FlameConfig {
	fn default() -> Self {
		Self {
			particle_count: 1000,
			theme: "ember".to_string(),
			seed: None,
		}
	}
}

impl FlameConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Resolves the theme preset, falling back to the default for unknown names.
	pub fn theme(&self) -> Theme {
		Theme::by_name(&self.theme).unwrap_or_else(|| {
			warn!("flame-canvas: unknown theme {:?}, using default", self.theme);
			Theme::default()
		})
	}

	pub fn rng(&self) -> Rng {
		self.seed.map_or_else(Rng::new, Rng::with_seed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		let config = FlameConfig::from_json("{}").unwrap();
		assert_eq!(config, FlameConfig::default());
		assert_eq!(config.particle_count, 1000);
	}

	#[test]
	fn partial_object_overrides_fields() {
		let config = FlameConfig::from_json(r#"{ "theme": "wisp", "seed": 12 }"#).unwrap();
		assert_eq!(config.particle_count, 1000);
		assert_eq!(config.theme().name, "wisp");
		assert_eq!(config.seed, Some(12));
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(FlameConfig::from_json(r#"{ "particle_count": -1 }"#).is_err());
		assert!(FlameConfig::from_json("not json").is_err());
	}

	#[test]
	fn unknown_theme_falls_back() {
		let config = FlameConfig {
			theme: "plasma".into(),
			..Default::default()
		};
		assert_eq!(config.theme().name, "ember");
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let config = FlameConfig {
			seed: Some(99),
			..Default::default()
		};
		let (mut a, mut b) = (config.rng(), config.rng());
		for _ in 0..10 {
			assert_eq!(a.u64(..), b.u64(..));
		}
	}
}
