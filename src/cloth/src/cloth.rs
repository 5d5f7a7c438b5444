use log::info;

use crate::config::ClothConfig;
use crate::constraint::Constraint;
use crate::particle::{Environment, Particle, SLOT_HORIZONTAL, SLOT_VERTICAL};
use crate::pointer::PointerState;
use crate::posbox::Posbox;
use crate::V2;
use protocol::pr_model::PrModel;

/// A rectangular mesh of particles held together by distance links.
///
/// Particles and links are created once; afterwards the mesh can only lose
/// links, so indices stay valid for the lifetime of the cloth.
pub struct Cloth {
	gravity: V2,
	drag: f32,
	elasticity: f32,
	radius: f32,
	particles: Vec<Particle>,
	constraints: Vec<Constraint>,
}

impl Cloth {
	pub fn new(config: &ClothConfig) -> Self {
		debug_assert!(config.validate().is_ok());
		let w = config.width_count + 1;
		let h = config.height_count + 1;
		let gap = config.gap;
		let [x0, y0] = config.origin;

		let len = config.particle_len().unwrap_or(0);
		let mut particles = Vec::with_capacity(len);
		let mut constraints = Vec::with_capacity(2 * len);
		for y in 0..h {
			for x in 0..w {
				let id = particles.len();
				let mut p =
					Particle::new(x0 + x as f32 * gap, y0 + y as f32 * gap);
				if config.pinning.pins(x, y, id) {
					p.pin();
				}
				particles.push(p);

				if x != 0 {
					let slot = SLOT_HORIZONTAL;
					Self::link(&mut particles, &mut constraints, id, id - 1, gap, slot);
				}
				if y != 0 {
					let up = x + (y - 1) * w;
					let slot = SLOT_VERTICAL;
					Self::link(&mut particles, &mut constraints, id, up, gap, slot);
				}
			}
		}
		info!(
			"cloth: {} particles, {} constraints",
			particles.len(),
			constraints.len()
		);
		Self {
			gravity: V2::new(0., config.gravity),
			drag: config.drag,
			elasticity: config.elasticity,
			radius: config.interaction_radius,
			particles,
			constraints,
		}
	}

	fn link(
		particles: &mut [Particle],
		constraints: &mut Vec<Constraint>,
		p1: usize,
		p2: usize,
		l0: f32,
		slot: usize,
	) {
		let id = constraints.len();
		constraints.push(Constraint::new(p1, p2, l0));
		particles[p2].add_constraint(id, slot);
		particles[p1].add_constraint(id, slot);
	}

	pub fn environment(&self) -> Environment {
		Environment {
			accel: self.gravity,
			drag: self.drag,
			elasticity: self.elasticity,
			radius: self.radius,
		}
	}

	/// One fixed tick: every particle, then every link once, then containment.
	pub fn update(&mut self, dt: f32, pointer: &PointerState, posbox: &Posbox) {
		let env = self.environment();
		for constraint in self.constraints.iter_mut() {
			constraint.pre_iteration();
		}
		for particle in self.particles.iter_mut() {
			particle.update(dt, pointer, &env, posbox, &mut self.constraints);
		}
		for constraint in self.constraints.iter() {
			constraint.step(&mut self.particles);
		}
		for particle in self.particles.iter_mut() {
			particle.contain(posbox);
		}
	}

	pub fn pin(&mut self, id: usize) {
		self.particles[id].pin();
	}

	pub fn destroy_constraint(&mut self, id: usize) {
		self.constraints[id].destroy();
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn constraints(&self) -> &[Constraint] {
		&self.constraints
	}

	pub fn particle(&self, id: usize) -> &Particle {
		&self.particles[id]
	}

	pub fn constraint(&self, id: usize) -> &Constraint {
		&self.constraints[id]
	}

	pub fn active_constraint_len(&self) -> usize {
		self.constraints.iter().filter(|c| c.is_active()).count()
	}

	pub fn pinned_len(&self) -> usize {
		self.particles.iter().filter(|p| p.is_pinned()).count()
	}

	pub fn pr_model(&self) -> PrModel {
		let segments = self
			.constraints
			.iter()
			.filter(|c| c.is_active())
			.map(|c| c.render(&self.particles))
			.collect();
		PrModel {
			segments,
			particle_len: self.particles.len(),
		}
	}
}
