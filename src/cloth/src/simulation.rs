use std::collections::VecDeque;

use log::debug;

use crate::cloth::Cloth;
use crate::config::SimConfig;
use crate::lifecycle::Lifecycle;
use crate::pointer::PointerState;
use crate::posbox::Posbox;
use crate::V2;
use protocol::pr_model::PrModel;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
	pub pos: V2,
	pub primary: bool,
	pub secondary: bool,
}

impl PointerSample {
	pub fn hover(pos: V2) -> Self {
		Self {
			pos,
			primary: false,
			secondary: false,
		}
	}
}

/// Where pointer input comes from. `None` means the input is gone and the
/// simulation should stop, like a closed window.
pub trait PointerSource {
	fn sample(&mut self) -> Option<PointerSample>;
}

pub trait RenderSink {
	fn draw(&mut self, model: PrModel);
}

/// Replays a fixed list of samples, one per frame.
#[derive(Default)]
pub struct ScriptedPointer {
	samples: VecDeque<PointerSample>,
}

impl ScriptedPointer {
	pub fn new(samples: Vec<PointerSample>) -> Self {
		Self {
			samples: samples.into(),
		}
	}

	pub fn push(&mut self, sample: PointerSample) {
		self.samples.push_back(sample);
	}

	/// Straight line from `from` to `to` over `frames` samples.
	pub fn sweep(
		&mut self,
		from: V2,
		to: V2,
		frames: usize,
		primary: bool,
		secondary: bool,
	) {
		for i in 0..frames {
			let t = i as f32 / frames.max(2).saturating_sub(1) as f32;
			self.push(PointerSample {
				pos: from.lerp(&to, t.min(1.)),
				primary,
				secondary,
			});
		}
	}
}

impl PointerSource for ScriptedPointer {
	fn sample(&mut self) -> Option<PointerSample> {
		self.samples.pop_front()
	}
}

#[derive(Default)]
pub struct LastFrame {
	pub model: Option<PrModel>,
	pub frames: usize,
}

impl RenderSink for LastFrame {
	fn draw(&mut self, model: PrModel) {
		self.model = Some(model);
		self.frames += 1;
	}
}

/// A cloth hanging in a viewport, driven by sampled pointer input.
pub struct ClothSimulation<S, R> {
	config: SimConfig,
	posbox: Posbox,
	cloth: Option<Cloth>,
	source: S,
	sink: R,
	// sampled in `update`, consumed by the next `fixed_update`
	pointer: PointerState,
	running: bool,
}

impl<S: PointerSource, R: RenderSink> ClothSimulation<S, R> {
	pub fn new(config: SimConfig, source: S, sink: R) -> Self {
		let posbox = Posbox::from_size(config.width, config.height);
		Self {
			config,
			posbox,
			cloth: None,
			source,
			sink,
			pointer: PointerState::idle(V2::zeros()),
			running: true,
		}
	}

	pub fn cloth(&self) -> Option<&Cloth> {
		self.cloth.as_ref()
	}

	pub fn sink(&self) -> &R {
		&self.sink
	}

	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}
}

impl<S: PointerSource, R: RenderSink> Lifecycle for ClothSimulation<S, R> {
	fn begin(&mut self) {
		self.cloth = Some(Cloth::new(&self.config.cloth_config()));
	}

	fn fixed_update(&mut self, fixed_dt: f32) {
		if let Some(cloth) = self.cloth.as_mut() {
			cloth.update(fixed_dt, &self.pointer, &self.posbox);
		}
	}

	fn update(&mut self, _dt: f32) {
		match self.source.sample() {
			Some(sample) => {
				self.pointer = PointerState {
					pos: sample.pos,
					last_pos: self.pointer.pos,
					primary: sample.primary,
					secondary: sample.secondary,
				};
			}
			None => {
				debug!("pointer source closed");
				self.running = false;
			}
		}
	}

	fn render(&mut self) {
		if let Some(cloth) = self.cloth.as_ref() {
			self.sink.draw(cloth.pr_model());
		}
	}

	fn is_running(&self) -> bool {
		self.running
	}
}
