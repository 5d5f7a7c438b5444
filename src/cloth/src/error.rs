use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("cannot read config: {0}")]
	Io(#[from] std::io::Error),
	#[error("cannot parse config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid {field}: {reason}")]
	Invalid {
		field: &'static str,
		reason: &'static str,
	},
}

impl ConfigError {
	pub fn invalid(field: &'static str, reason: &'static str) -> Self {
		Self::Invalid { field, reason }
	}
}
