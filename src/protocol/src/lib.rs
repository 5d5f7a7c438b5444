pub mod pr_model;
use pr_model::PrModel;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub enum Message {
	WorldUpdate(PrModel),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
		bincode::serialize(&self)
	}

	pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
		bincode::deserialize(bytes)
	}
}
