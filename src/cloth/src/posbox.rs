use crate::V2;

pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Posbox {
	pub fn from_size(width: f32, height: f32) -> Self {
		Self {
			xmin: 0.,
			xmax: width,
			ymin: 0.,
			ymax: height,
		}
	}

	// a clamped axis also loses its velocity
	pub fn apply(&self, pos: &mut V2, ppos: &mut V2) -> bool {
		let mut flag = false;
		let axes = [(0usize, self.xmin, self.xmax), (1, self.ymin, self.ymax)];
		for (axis, min, max) in axes {
			let clamped = if pos[axis] < min {
				min
			} else if pos[axis] > max {
				max
			} else {
				continue;
			};
			pos[axis] = clamped;
			ppos[axis] = clamped;
			flag = true;
		}
		flag
	}

	pub fn contains(&self, pos: V2) -> bool {
		pos[0] >= self.xmin
			&& pos[0] <= self.xmax
			&& pos[1] >= self.ymin
			&& pos[1] <= self.ymax
	}
}
