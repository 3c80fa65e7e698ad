//! Background dust drifting around the brain.

use glam::DQuat;
use rand::Rng;

use super::palette::{Rgb, WHITE};
use crate::network::DVec3;

/// Particle red, `(0.9, 0.0, 0.07)` in unit channels.
pub const PARTICLE_RED: Rgb = Rgb(230, 0, 18);

/// Share of particles drawn red; the rest are white.
pub const RED_SHARE: f64 = 0.6;

/// Vertical drift amplitude.
const BOB: f64 = 0.06;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Rest position inside the cube.
	pub home: DVec3,
	/// Fill colour.
	pub color: Rgb,
}

/// Scatter `count` particles uniformly inside a cube of side `extent`.
pub fn scatter<R: Rng + ?Sized>(count: usize, extent: f64, rng: &mut R) -> Vec<Particle> {
	(0..count)
		.map(|_| {
			let home = DVec3::new(
				(rng.r#gen::<f64>() - 0.5) * extent,
				(rng.r#gen::<f64>() - 0.5) * extent,
				(rng.r#gen::<f64>() - 0.5) * extent,
			);
			let color = if rng.gen_bool(RED_SHARE) {
				PARTICLE_RED
			} else {
				WHITE
			};
			Particle { home, color }
		})
		.collect()
}

impl Particle {
	/// Position of particle `index` at time `t`, including the swarm's spin.
	pub fn position(&self, index: usize, t: f64) -> DVec3 {
		let phase = index as f64;
		let drift = BOB * (phase.cos() - (t + phase).cos());
		DQuat::from_rotation_y(t * 0.02) * DVec3::new(self.home.x, self.home.y + drift, self.home.z)
	}
}
