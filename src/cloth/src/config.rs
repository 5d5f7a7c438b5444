use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::ConfigError;

/// Largest cloth, in particles, a config may ask for.
pub const MAX_PARTICLES: usize = 1 << 20;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub enum Pinning {
	/// Every even column of the top row.
	#[default]
	EveryOther,
	None,
	Indices(Vec<usize>),
}

impl Pinning {
	pub fn pins(&self, x: usize, y: usize, id: usize) -> bool {
		match self {
			Pinning::EveryOther => y == 0 && x % 2 == 0,
			Pinning::None => false,
			Pinning::Indices(ids) => ids.contains(&id),
		}
	}
}

/// Physical description of a cloth. Immutable once the cloth is built.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClothConfig {
	/// Cells along x; a row holds `width_count + 1` particles.
	pub width_count: usize,
	pub height_count: usize,
	pub gap: f32,
	pub origin: [f32; 2],
	pub gravity: f32,
	pub drag: f32,
	/// Per-axis bound on the velocity a drag may inject.
	pub elasticity: f32,
	pub interaction_radius: f32,
	pub pinning: Pinning,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			width_count: 24,
			height_count: 19,
			gap: 10.,
			origin: [80., 35.],
			gravity: 9.81,
			drag: 0.01,
			elasticity: 10.,
			interaction_radius: 20.,
			pinning: Pinning::EveryOther,
		}
	}
}

impl ClothConfig {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		width_count: usize,
		height_count: usize,
		gap: f32,
		origin_x: f32,
		origin_y: f32,
		gravity: f32,
		drag: f32,
		elasticity: f32,
	) -> Self {
		Self {
			width_count,
			height_count,
			gap,
			origin: [origin_x, origin_y],
			gravity,
			drag,
			elasticity,
			..Default::default()
		}
	}

	pub fn with_interaction_radius(mut self, radius: f32) -> Self {
		self.interaction_radius = radius;
		self
	}

	pub fn with_pinning(mut self, pinning: Pinning) -> Self {
		self.pinning = pinning;
		self
	}

	pub fn with_drag(mut self, drag: f32) -> Self {
		self.drag = drag;
		self
	}

	/// `None` on overflow.
	pub fn particle_len(&self) -> Option<usize> {
		let w = self.width_count.checked_add(1)?;
		let h = self.height_count.checked_add(1)?;
		w.checked_mul(h)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		match self.particle_len() {
			Some(len) if len <= MAX_PARTICLES => {}
			_ => {
				return Err(ConfigError::invalid(
					"width_count",
					"too many particles",
				))
			}
		}
		if !(self.gap.is_finite() && self.gap > 0.) {
			return Err(ConfigError::invalid("gap", "must be positive"));
		}
		if !self.origin.iter().all(|x| x.is_finite()) {
			return Err(ConfigError::invalid("origin", "must be finite"));
		}
		if !self.gravity.is_finite() {
			return Err(ConfigError::invalid("gravity", "must be finite"));
		}
		if !(0. ..1.).contains(&self.drag) {
			return Err(ConfigError::invalid("drag", "must be in [0, 1)"));
		}
		if !(self.elasticity.is_finite() && self.elasticity >= 0.) {
			return Err(ConfigError::invalid("elasticity", "must not be negative"));
		}
		if !(self.interaction_radius.is_finite() && self.interaction_radius >= 0.) {
			return Err(ConfigError::invalid(
				"interaction_radius",
				"must not be negative",
			));
		}
		Ok(())
	}
}

/// Application settings: viewport, pacing and the cloth to hang in it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
	pub width: f32,
	pub height: f32,
	pub frame_rate: u32,
	pub fixed_dt: f32,
	/// Cloth extent in pixels, divided by `cloth.gap` into cells.
	pub cloth_width: f32,
	pub cloth_height: f32,
	pub cloth: ClothConfig,
}

impl Default for SimConfig {
	fn default() -> Self {
		Self {
			width: 400.,
			height: 350.,
			frame_rate: 60,
			fixed_dt: 1. / 60.,
			cloth_width: 240.,
			cloth_height: 190.,
			cloth: ClothConfig::default(),
		}
	}
}

impl SimConfig {
	pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(s)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let s = std::fs::read_to_string(path)?;
		let config = Self::from_toml_str(&s)?;
		info!("loaded config from {}", path.display());
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(self.width.is_finite() && self.width > 0.) {
			return Err(ConfigError::invalid("width", "must be positive"));
		}
		if !(self.height.is_finite() && self.height > 0.) {
			return Err(ConfigError::invalid("height", "must be positive"));
		}
		if self.frame_rate == 0 {
			return Err(ConfigError::invalid("frame_rate", "must be positive"));
		}
		if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.) {
			return Err(ConfigError::invalid("fixed_dt", "must be positive"));
		}
		if !(self.cloth_width >= 0. && self.cloth_height >= 0.) {
			return Err(ConfigError::invalid("cloth_width", "must not be negative"));
		}
		self.cloth.validate()?;
		let max = MAX_PARTICLES as f32;
		if self.cloth_width / self.cloth.gap > max {
			return Err(ConfigError::invalid("cloth_width", "too many particles"));
		}
		if self.cloth_height / self.cloth.gap > max {
			return Err(ConfigError::invalid("cloth_height", "too many particles"));
		}
		self.cloth_config().validate()
	}

	/// Cloth centred horizontally, hanging a tenth of the way down.
	pub fn cloth_config(&self) -> ClothConfig {
		let gap = self.cloth.gap;
		let width_count = (self.cloth_width / gap) as usize;
		let height_count = (self.cloth_height / gap) as usize;
		let x = self.width * 0.5 - width_count as f32 * gap * 0.5;
		let y = self.height * 0.1;
		ClothConfig {
			width_count,
			height_count,
			origin: [x.floor(), y.floor()],
			..self.cloth.clone()
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_layout() {
		let config = SimConfig::default();
		config.validate().unwrap();
		let cloth = config.cloth_config();
		assert_eq!(cloth.width_count, 24);
		assert_eq!(cloth.height_count, 19);
		assert_eq!(cloth.origin, [80., 35.]);
		assert_eq!(cloth, ClothConfig::default());
	}

	#[test]
	fn test_partial_toml() {
		let config = SimConfig::from_toml_str(
			r#"
			width = 800.0
			[cloth]
			gap = 20.0
			pinning = "None"
			"#,
		)
		.unwrap();
		assert_eq!(config.width, 800.);
		assert_eq!(config.height, 350.);
		assert_eq!(config.cloth.pinning, Pinning::None);
		let cloth = config.cloth_config();
		assert_eq!(cloth.width_count, 12);
		assert_eq!(cloth.height_count, 9);
		assert_eq!(cloth.origin, [280., 35.]);
	}

	#[test]
	fn test_pin_indices_toml() {
		let config =
			SimConfig::from_toml_str("[cloth]\npinning = { Indices = [0, 3] }\n")
				.unwrap();
		assert_eq!(config.cloth.pinning, Pinning::Indices(vec![0, 3]));
	}

	#[test]
	fn test_rejects_bad_values() {
		let err = SimConfig::from_toml_str("[cloth]\ngap = 0.0\n").unwrap_err();
		assert!(
			matches!(err, ConfigError::Invalid { field: "gap", .. }),
			"{}",
			err
		);
		let err = SimConfig::from_toml_str("frame_rate = 0\n").unwrap_err();
		assert!(matches!(err, ConfigError::Invalid { field: "frame_rate", .. }));
		assert!(ClothConfig::default().with_drag(1.).validate().is_err());
		assert!(matches!(
			SimConfig::from_toml_str("width = \"wide\""),
			Err(ConfigError::Parse(_))
		));
	}

	#[test]
	fn test_rejects_huge_cloth() {
		let err = SimConfig::from_toml_str("cloth_width = 1e12\n").unwrap_err();
		assert!(
			matches!(err, ConfigError::Invalid { field: "cloth_width", .. }),
			"{}",
			err
		);
		let err = SimConfig::from_toml_str("cloth_height = inf\n").unwrap_err();
		assert!(matches!(err, ConfigError::Invalid { field: "cloth_height", .. }));
		// each side fits, the product does not
		let err = SimConfig::from_toml_str(
			"cloth_width = 20000.0\ncloth_height = 20000.0\n",
		)
		.unwrap_err();
		assert!(matches!(err, ConfigError::Invalid { field: "width_count", .. }));

		let mut cloth = ClothConfig::default();
		cloth.width_count = usize::MAX;
		assert_eq!(cloth.particle_len(), None);
		assert!(cloth.validate().is_err());
		cloth.width_count = 1023;
		cloth.height_count = 1023;
		assert_eq!(cloth.particle_len(), Some(MAX_PARTICLES));
		assert!(cloth.validate().is_ok());
		assert_eq!(ClothConfig::default().particle_len(), Some(500));
	}

	#[test]
	fn test_missing_file() {
		let err = SimConfig::load("/nonexistent/cloth.toml").unwrap_err();
		assert!(matches!(err, ConfigError::Io(_)));
	}

	#[test]
	fn test_pinning() {
		assert!(Pinning::EveryOther.pins(0, 0, 0));
		assert!(!Pinning::EveryOther.pins(1, 0, 1));
		assert!(Pinning::EveryOther.pins(4, 0, 4));
		assert!(!Pinning::EveryOther.pins(0, 1, 25));
		assert!(!Pinning::None.pins(0, 0, 0));
		assert!(Pinning::Indices(vec![7]).pins(2, 1, 7));
	}
}
