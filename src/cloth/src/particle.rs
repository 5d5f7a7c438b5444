use log::debug;

use crate::constraint::Constraint;
use crate::pointer::PointerState;
use crate::posbox::Posbox;
use crate::V2;

/// Scales acceleration from world units into pixel space.
pub const ACCEL_SCALE: f32 = 100.;

pub const SLOT_HORIZONTAL: usize = 0;
pub const SLOT_VERTICAL: usize = 1;

/// Per-tick quantities shared by every particle of a cloth.
#[derive(Clone, Copy, Debug)]
pub struct Environment {
	pub accel: V2,
	pub drag: f32,
	pub elasticity: f32,
	pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct Particle {
	pos: V2,
	ppos: V2,
	apos: V2,
	pinned: bool,
	active: bool,
	selected: bool,
	// indices into the owning cloth's constraints
	cs: [Option<usize>; 2],
}

impl Particle {
	pub fn new(x: f32, y: f32) -> Self {
		let pos = V2::new(x, y);
		Self {
			pos,
			ppos: pos,
			apos: pos,
			pinned: false,
			active: true,
			selected: false,
			cs: [None; 2],
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn set_pos(&mut self, p: V2) {
		self.pos = p;
	}

	pub fn reset_pos(&mut self, p: V2) {
		self.pos = p;
		self.ppos = p;
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	pub fn get_anchor(&self) -> V2 {
		self.apos
	}

	pub fn pin(&mut self) {
		self.pinned = true;
	}

	pub fn is_pinned(&self) -> bool {
		self.pinned
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn is_selected(&self) -> bool {
		self.selected
	}

	pub fn add_constraint(&mut self, id: usize, slot: usize) {
		self.cs[slot] = Some(id);
	}

	pub fn constraint_slots(&self) -> [Option<usize>; 2] {
		self.cs
	}

	pub fn update(
		&mut self,
		dt: f32,
		pointer: &PointerState,
		env: &Environment,
		posbox: &Posbox,
		constraints: &mut [Constraint],
	) {
		if !self.active {
			return;
		}

		self.selected = pointer.hits(self.pos, env.radius);
		if self.selected {
			for id in self.cs.into_iter().flatten() {
				constraints[id].set_selected(true);
			}
		}

		if pointer.primary && self.selected {
			self.ppos = self.pos - pointer.clamped_delta(env.elasticity);
		}

		if pointer.secondary && self.selected {
			debug!("cut particle at {:?}", self.pos);
			self.active = false;
			for id in self.cs.into_iter().flatten() {
				constraints[id].destroy();
			}
		}

		if self.pinned {
			self.pos = self.apos;
			return;
		}

		let keep = 1. - env.drag;
		let new_pos = self.pos
			+ (self.pos - self.ppos) * keep
			+ env.accel * ACCEL_SCALE * keep * dt * dt;
		self.ppos = self.pos;
		self.pos = new_pos;

		posbox.apply(&mut self.pos, &mut self.ppos);
	}

	/// Runs after constraint relaxation, which may nudge pins and push free
	/// particles past the edges.
	pub fn contain(&mut self, posbox: &Posbox) {
		if self.pinned {
			self.pos = self.apos;
		} else if self.active {
			posbox.apply(&mut self.pos, &mut self.ppos);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn env() -> Environment {
		Environment {
			accel: V2::new(0., 9.81),
			drag: 0.01,
			elasticity: 10.,
			radius: 20.,
		}
	}

	fn far() -> PointerState {
		PointerState::idle(V2::new(-1000., -1000.))
	}

	#[test]
	fn test_free_fall() {
		let posbox = Posbox::from_size(400., 350.);
		let mut p = Particle::new(100., 100.);
		let dt = 1. / 60.;
		p.update(dt, &far(), &env(), &posbox, &mut []);
		let expect = 9.81 * ACCEL_SCALE * 0.99 * dt * dt;
		assert!((p.get_pos()[1] - 100. - expect).abs() < 1e-4);
		assert_eq!(p.get_pos()[0], 100.);
		assert_eq!(p.get_ppos(), V2::new(100., 100.));
	}

	#[test]
	fn test_pinned_snaps_to_anchor() {
		let posbox = Posbox::from_size(400., 350.);
		let mut p = Particle::new(50., 60.);
		p.pin();
		p.set_pos(V2::new(52., 61.));
		p.update(1. / 60., &far(), &env(), &posbox, &mut []);
		assert_eq!(p.get_pos(), p.get_anchor());
	}

	#[test]
	fn test_drag_injects_bounded_velocity() {
		let posbox = Posbox::from_size(400., 350.);
		let env = Environment {
			accel: V2::zeros(),
			drag: 0.,
			..env()
		};
		let mut p = Particle::new(100., 100.);
		let pointer = PointerState::idle(V2::new(105., 100.))
			.with_last_pos(V2::new(65., 103.))
			.with_primary();
		p.update(1. / 60., &pointer, &env, &posbox, &mut []);
		assert!(p.is_selected());
		assert!((p.get_pos() - V2::new(110., 97.)).magnitude() < 1e-4);
	}

	#[test]
	fn test_inactive_is_frozen() {
		let posbox = Posbox::from_size(400., 350.);
		let mut p = Particle::new(100., 100.);
		let cut = PointerState::idle(V2::new(100., 100.)).with_secondary();
		p.update(1. / 60., &cut, &env(), &posbox, &mut []);
		assert!(!p.is_active());
		let pos = p.get_pos();
		for _ in 0..10 {
			p.update(1. / 60., &far(), &env(), &posbox, &mut []);
		}
		assert_eq!(p.get_pos(), pos);
	}

	#[test]
	fn test_contain_returns_pin_to_anchor() {
		let posbox = Posbox::from_size(400., 350.);
		let mut p = Particle::new(50., 60.);
		p.pin();
		p.set_pos(V2::new(50., 63.));
		p.contain(&posbox);
		assert_eq!(p.get_pos(), V2::new(50., 60.));
	}

	#[test]
	fn test_floor() {
		let posbox = Posbox::from_size(400., 350.);
		let mut p = Particle::new(100., 349.9);
		for _ in 0..30 {
			p.update(1. / 60., &far(), &env(), &posbox, &mut []);
			assert!(posbox.contains(p.get_pos()));
		}
		assert_eq!(p.get_pos()[1], 350.);
	}
}
