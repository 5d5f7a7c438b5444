use crate::V2;

/// Pointer input as seen by one fixed tick.
///
/// `primary` drags the particles under the pointer, `secondary` cuts them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
	pub pos: V2,
	pub last_pos: V2,
	pub primary: bool,
	pub secondary: bool,
}

impl PointerState {
	pub fn idle(pos: V2) -> Self {
		Self {
			pos,
			last_pos: pos,
			primary: false,
			secondary: false,
		}
	}

	pub fn with_last_pos(mut self, last_pos: V2) -> Self {
		self.last_pos = last_pos;
		self
	}

	pub fn with_primary(mut self) -> Self {
		self.primary = true;
		self
	}

	pub fn with_secondary(mut self) -> Self {
		self.secondary = true;
		self
	}

	pub fn delta(&self) -> V2 {
		self.pos - self.last_pos
	}

	pub fn clamped_delta(&self, elasticity: f32) -> V2 {
		self.delta().map(|x| x.clamp(-elasticity, elasticity))
	}

	pub fn hits(&self, p: V2, radius: f32) -> bool {
		(p - self.pos).magnitude_squared() < radius * radius
	}
}
