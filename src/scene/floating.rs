//! The indigo sphere drifting off to the side of the brain.
//!
//! Its own spin runs on the wall clock. On top of that it sways and bobs
//! with a slow sinusoidal float whose phase is offset per page load.

use glam::DQuat;
use rand::Rng;

use crate::network::DVec3;

/// Own spin about X, radians per second.
pub const SPIN_X: f64 = 0.2;
/// Own spin about Y, radians per second.
pub const SPIN_Y: f64 = 0.3;
/// Speed multiplier of the float cycle.
pub const FLOAT_SPEED: f64 = 1.4;
/// Scale of the sway angles.
pub const ROTATION_INTENSITY: f64 = 1.0;
/// Scale of the vertical bob.
pub const FLOAT_INTENSITY: f64 = 2.0;
/// Upper bound of the random float phase offset, in seconds.
pub const MAX_FLOAT_OFFSET: f64 = 10_000.0;

/// A floating sphere in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingObject {
	/// Rest position of the centre.
	pub center: DVec3,
	/// Sphere radius.
	pub radius: f64,
	/// Phase offset of the float cycle.
	pub offset: f64,
}

impl FloatingObject {
	/// A sphere at `center` with a random float phase.
	pub fn spawn<R: Rng + ?Sized>(center: DVec3, radius: f64, rng: &mut R) -> Self {
		Self {
			center,
			radius,
			offset: rng.r#gen::<f64>() * MAX_FLOAT_OFFSET,
		}
	}

	fn float_angle(&self, t: f64) -> f64 {
		(self.offset + t) / 4.0 * FLOAT_SPEED
	}

	/// Sway angles `(x, y, z)` of the float at time `t`.
	pub fn sway(&self, t: f64) -> (f64, f64, f64) {
		let (s, c) = self.float_angle(t).sin_cos();
		(
			c / 8.0 * ROTATION_INTENSITY,
			s / 8.0 * ROTATION_INTENSITY,
			s / 20.0 * ROTATION_INTENSITY,
		)
	}

	/// Vertical displacement of the centre at time `t`.
	pub fn bob(&self, t: f64) -> f64 {
		self.float_angle(t).sin() / 10.0 * FLOAT_INTENSITY
	}

	/// Full orientation at time `t`: the sway applied over the own spin.
	pub fn orientation(&self, t: f64) -> DQuat {
		let (sx, sy, sz) = self.sway(t);
		let sway = DQuat::from_rotation_x(sx) * DQuat::from_rotation_y(sy) * DQuat::from_rotation_z(sz);
		sway * spin(t)
	}

	/// Map a point on the unit sphere to world space at time `t`.
	pub fn to_world(&self, unit: DVec3, t: f64) -> DVec3 {
		self.center + DVec3::Y * self.bob(t) + self.orientation(t) * (unit * self.radius)
	}
}

/// The sphere's own rotation at time `t`.
pub fn spin(t: f64) -> DQuat {
	DQuat::from_rotation_x(SPIN_X * t) * DQuat::from_rotation_y(SPIN_Y * t)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn sphere(offset: f64) -> FloatingObject {
		FloatingObject {
			center: DVec3::new(-6.0, 3.0, -4.0),
			radius: 1.4,
			offset,
		}
	}

	#[test]
	fn spawn_draws_an_offset_in_range() {
		let mut rng = StdRng::seed_from_u64(5);
		for _ in 0..20 {
			let s = FloatingObject::spawn(DVec3::ZERO, 1.0, &mut rng);
			assert!((0.0..MAX_FLOAT_OFFSET).contains(&s.offset));
		}
	}

	#[test]
	fn bob_stays_within_its_range() {
		let s = sphere(0.0);
		let limit = FLOAT_INTENSITY / 10.0;
		for k in 0..200 {
			assert!(s.bob(k as f64 * 0.37).abs() <= limit + 1e-12);
		}
		assert_eq!(s.bob(0.0), 0.0);
	}

	#[test]
	fn sway_is_a_small_tilt() {
		let (x, y, z) = sphere(0.0).sway(0.0);
		assert!((x - 0.125).abs() < 1e-12);
		assert_eq!(y, 0.0);
		assert_eq!(z, 0.0);
		for k in 0..50 {
			let (x, y, z) = sphere(3.0).sway(k as f64);
			assert!(x.abs() <= 0.125 && y.abs() <= 0.125 && z.abs() <= 0.05);
		}
	}

	#[test]
	fn spin_follows_the_per_axis_rates() {
		let p = spin(2.0) * DVec3::X;
		let expected = DQuat::from_rotation_x(0.4) * (DQuat::from_rotation_y(0.6) * DVec3::X);
		assert!(p.distance(expected) < 1e-12);
		assert!(spin(0.0).angle_between(DQuat::IDENTITY) < 1e-12);
	}

	#[test]
	fn surface_points_stay_on_the_bobbing_sphere() {
		let s = sphere(12.5);
		for t in [0.0, 1.0, 4.2, 30.0] {
			let centre = s.center + DVec3::Y * s.bob(t);
			for unit in [DVec3::X, DVec3::Y, DVec3::new(0.6, 0.0, 0.8)] {
				let p = s.to_world(unit, t);
				assert!((p.distance(centre) - s.radius).abs() < 1e-9);
			}
		}
	}
}
