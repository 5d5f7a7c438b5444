use std::time::Instant;

use log::info;

use cloth::config::SimConfig;
use cloth::lifecycle::Runner;
use cloth::simulation::{
	ClothSimulation, LastFrame, PointerSample, ScriptedPointer,
};
use cloth::time_manager::TimeModel;
use cloth::V2;
use protocol::Message;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.init();
	let config = match std::env::args().nth(1) {
		Some(path) => SimConfig::load(path)?,
		None => SimConfig::default(),
	};

	// settle, drag across the middle, then cut through it
	let w = config.width;
	let h = config.height;
	let mut pointer = ScriptedPointer::default();
	for _ in 0..60 {
		pointer.push(PointerSample::hover(V2::zeros()));
	}
	let left = V2::new(w * 0.3, h * 0.4);
	let right = V2::new(w * 0.7, h * 0.4);
	pointer.sweep(left, right, 60, true, false);
	let top = V2::new(w * 0.5, h * 0.2);
	let bottom = V2::new(w * 0.5, h * 0.8);
	pointer.sweep(top, bottom, 60, false, true);
	for _ in 0..120 {
		pointer.push(PointerSample::hover(V2::zeros()));
	}

	let start = Instant::now();
	let mut runner = Runner::new(&config, TimeModel::VideoRender);
	let mut sim =
		ClothSimulation::new(config.clone(), pointer, LastFrame::default());
	let frames = runner.run(&mut sim);
	let duration = start.elapsed().as_secs_f32();
	let time = frames as f32 * config.fixed_dt;
	info!("{} frames, load {:.3}%", frames, duration / time * 100.);

	if let Some(cloth) = sim.cloth() {
		info!(
			"{} of {} links left",
			cloth.active_constraint_len(),
			cloth.constraints().len()
		);
	}
	if let Some(model) = sim.sink().model.clone() {
		let bytes = Message::WorldUpdate(model).to_bytes()?;
		info!("last frame: {} bytes", bytes.len());
	}
	Ok(())
}
