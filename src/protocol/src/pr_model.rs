// pr_model: cloth model for rendering

use serde::{Deserialize, Serialize};

/// One active link, drawn as a line between its endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PrSegment {
	pub points: [[f32; 2]; 2],
	pub selected: bool,
}

/// A whole frame worth of segments. Order carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrModel {
	pub segments: Vec<PrSegment>,
	pub particle_len: usize,
}

impl PrModel {
	pub fn selected_len(&self) -> usize {
		self.segments.iter().filter(|s| s.selected).count()
	}
}
