use log::info;

use crate::config::SimConfig;
use crate::time_manager::{TimeManager, TimeModel};

/// Hooks called by [`Runner`], in this order every frame:
/// `fixed_update`, `update`, `render`.
pub trait Lifecycle {
	fn begin(&mut self);

	fn fixed_update(&mut self, fixed_dt: f32);

	fn update(&mut self, dt: f32);

	fn render(&mut self);

	fn is_running(&self) -> bool {
		true
	}
}

pub struct Runner {
	fixed_dt: f32,
	time: TimeManager,
	frame_limit: Option<usize>,
}

impl Runner {
	pub fn new(config: &SimConfig, model: TimeModel) -> Self {
		Self {
			fixed_dt: config.fixed_dt,
			time: TimeManager::new(config.frame_rate, model),
			frame_limit: None,
		}
	}

	pub fn with_frame_limit(mut self, frames: usize) -> Self {
		self.frame_limit = Some(frames);
		self
	}

	/// Returns the number of frames run.
	pub fn run<L: Lifecycle>(&mut self, app: &mut L) -> usize {
		app.begin();
		let mut frames = 0;
		let mut report_frames = 0;
		let mut report_time = 0f32;
		let mut dt = self.time.frame_budget();
		while app.is_running() && self.frame_limit.map_or(true, |n| frames < n) {
			app.fixed_update(self.fixed_dt);
			app.update(dt);
			app.render();
			frames += 1;

			dt = self.time.take_time();
			report_frames += 1;
			report_time += dt;
			if report_time >= 1.0 {
				info!("frame rate: {:.1}", report_frames as f32 / report_time);
				report_frames = 0;
				report_time = 0.;
			}
		}
		frames
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[derive(Default)]
	struct Recorder {
		calls: Vec<&'static str>,
		stop_after: usize,
	}

	impl Lifecycle for Recorder {
		fn begin(&mut self) {
			self.calls.push("begin");
		}

		fn fixed_update(&mut self, fixed_dt: f32) {
			assert_eq!(fixed_dt, 1. / 60.);
			self.calls.push("fixed");
		}

		fn update(&mut self, dt: f32) {
			assert!(dt > 0.);
			self.calls.push("update");
		}

		fn render(&mut self) {
			self.calls.push("render");
		}

		fn is_running(&self) -> bool {
			self.calls.iter().filter(|c| **c == "render").count() < self.stop_after
		}
	}

	#[test]
	fn test_hook_order() {
		let config = SimConfig::default();
		let mut runner =
			Runner::new(&config, TimeModel::VideoRender).with_frame_limit(2);
		let mut app = Recorder {
			stop_after: usize::MAX,
			..Default::default()
		};
		assert_eq!(runner.run(&mut app), 2);
		assert_eq!(
			app.calls,
			vec!["begin", "fixed", "update", "render", "fixed", "update", "render"]
		);
	}

	#[test]
	fn test_stops_when_app_quits() {
		let config = SimConfig::default();
		let mut runner = Runner::new(&config, TimeModel::VideoRender);
		let mut app = Recorder {
			stop_after: 5,
			..Default::default()
		};
		assert_eq!(runner.run(&mut app), 5);
	}
}
