use std::time::{Duration, Instant};

pub enum TimeModel {
	// every frame takes exactly the budget, no sleeping
	VideoRender,
	RtFrameLock,
}

pub struct TimeManager {
	pft: f32,
	model: TimeModel,
	start_time: Instant,
}

impl TimeManager {
	pub fn new(frame_rate: u32, model: TimeModel) -> Self {
		Self {
			pft: 1. / frame_rate.max(1) as f32,
			model,
			start_time: Instant::now(),
		}
	}

	pub fn frame_budget(&self) -> f32 {
		self.pft
	}

	pub fn take_time(&mut self) -> f32 {
		match self.model {
			TimeModel::VideoRender => {
				self.start_time = Instant::now();
				self.pft
			}
			TimeModel::RtFrameLock => {
				let budget = Duration::from_secs_f32(self.pft);
				let passed = self.start_time.elapsed();
				if passed < budget {
					std::thread::sleep(budget - passed);
				}
				let now = Instant::now();
				let dt = now.duration_since(self.start_time).as_secs_f32();
				self.start_time = now;
				dt
			}
		}
	}
}
