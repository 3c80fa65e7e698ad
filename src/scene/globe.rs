//! The earth hemisphere the tower network sits on.

use std::f64::consts::{PI, TAU};

use glam::DQuat;

use crate::network::DVec3;

/// Spin in radians per second (about -0.0005 rad per 60 Hz frame).
pub const SPIN_RATE: f64 = -0.03;

/// A slowly spinning wireframe globe.
#[derive(Clone, Debug, PartialEq)]
pub struct Globe {
	/// World-space centre.
	pub center: DVec3,
	/// Surface radius.
	pub radius: f64,
}

impl Globe {
	/// Spin angle at time `t`.
	pub fn rotation(&self, t: f64) -> f64 {
		SPIN_RATE * t
	}

	/// Map a globe-local point to world space at time `t`.
	pub fn to_world(&self, local: DVec3, t: f64) -> DVec3 {
		DQuat::from_rotation_y(self.rotation(t)) * local + self.center
	}

	/// Whether a world point on (or just above) the surface faces `eye`.
	pub fn faces(&self, world: DVec3, eye: DVec3) -> bool {
		(world - self.center).dot(eye - world) > 0.0
	}

	/// Latitude circles and meridians as closed polylines in local space.
	pub fn wireframe(&self, parallels: usize, meridians: usize, samples: usize) -> Vec<Vec<DVec3>> {
		let mut lines = Vec::with_capacity(parallels + meridians);
		for k in 1..=parallels {
			let inclination = PI * k as f64 / (parallels + 1) as f64;
			let (ring, y) = (self.radius * inclination.sin(), self.radius * inclination.cos());
			lines.push(
				(0..=samples)
					.map(|s| {
						let a = TAU * s as f64 / samples as f64;
						DVec3::new(ring * a.cos(), y, ring * a.sin())
					})
					.collect(),
			);
		}
		for m in 0..meridians {
			let azimuth = TAU * m as f64 / meridians as f64;
			lines.push(
				(0..=samples)
					.map(|s| {
						let inclination = PI * s as f64 / samples as f64;
						DVec3::new(
							self.radius * inclination.sin() * azimuth.cos(),
							self.radius * inclination.cos(),
							self.radius * inclination.sin() * azimuth.sin(),
						)
					})
					.collect(),
			);
		}
		lines
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn globe() -> Globe {
		Globe {
			center: DVec3::new(0.0, -9.0, 0.0),
			radius: 6.5,
		}
	}

	#[test]
	fn wireframe_lies_on_the_surface() {
		let g = globe();
		let lines = g.wireframe(6, 8, 24);
		assert_eq!(lines.len(), 14);
		for line in &lines {
			assert_eq!(line.len(), 25);
			for p in line {
				assert!((p.length() - 6.5).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn pole_is_fixed_under_spin() {
		let g = globe();
		let pole = g.to_world(DVec3::new(0.0, 6.5, 0.0), 100.0);
		assert!(pole.distance(DVec3::new(0.0, -2.5, 0.0)) < 1e-9);
	}

	#[test]
	fn front_faces_the_eye_back_does_not() {
		let g = globe();
		let eye = DVec3::new(0.0, 0.0, 11.0);
		assert!(g.faces(g.center + DVec3::new(0.0, 0.0, 6.5), eye));
		assert!(!g.faces(g.center + DVec3::new(0.0, 0.0, -6.5), eye));
	}
}
