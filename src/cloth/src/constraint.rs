use log::trace;

use crate::particle::Particle;
use protocol::pr_model::PrSegment;

/// Distance link between two particles of the same cloth, by index.
#[derive(Clone, Debug)]
pub struct Constraint {
	ps: [usize; 2],
	l0: f32,
	active: bool,
	selected: bool,
}

impl Constraint {
	pub fn new(p1: usize, p2: usize, l0: f32) -> Self {
		debug_assert!(l0 > 0f32);
		Self {
			ps: [p1, p2],
			l0,
			active: true,
			selected: false,
		}
	}

	pub fn get_particles(&self) -> [usize; 2] {
		self.ps
	}

	pub fn get_l0(&self) -> f32 {
		self.l0
	}

	pub fn set_selected(&mut self, value: bool) {
		self.selected = value;
	}

	pub fn is_selected(&self) -> bool {
		self.selected
	}

	/// Irreversible.
	pub fn destroy(&mut self) {
		self.active = false;
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn pre_iteration(&mut self) {
		self.selected = false;
	}

	/// One relaxation pass toward the rest length, split evenly between the
	/// endpoints. Pinned endpoints move too; the cloth puts them back.
	pub fn step(&self, particles: &mut [Particle]) {
		if !self.active {
			return;
		}
		let [i1, i2] = self.ps;
		let pos1 = particles[i1].get_pos();
		let pos2 = particles[i2].get_pos();
		let dp = pos1 - pos2;
		let l = dp.magnitude();
		if !l.is_normal() {
			trace!("skip degenerate link {:?}: distance {}", self.ps, l);
			return;
		}
		let offset = dp * ((self.l0 - l) / l * 0.5);
		particles[i1].set_pos(pos1 + offset);
		particles[i2].set_pos(pos2 - offset);
	}

	pub fn render(&self, particles: &[Particle]) -> PrSegment {
		let [i1, i2] = self.ps;
		let pos1 = particles[i1].get_pos();
		let pos2 = particles[i2].get_pos();
		PrSegment {
			points: [[pos1[0], pos1[1]], [pos2[0], pos2[1]]],
			selected: self.selected,
		}
	}
}
