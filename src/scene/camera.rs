//! Perspective projection of world points onto the canvas.

use glam::DQuat;

use crate::network::DVec3;

/// Limits on the vertical orbit angle, in radians.
pub const PITCH_LIMIT: f64 = 0.6;

/// An orbiting perspective camera looking at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
	/// Point the camera orbits and looks at.
	pub target: DVec3,
	/// Distance from the eye to `target`.
	pub distance: f64,
	/// Vertical field of view in radians.
	pub fov_y: f64,
	/// Rotation around the world Y axis.
	pub yaw: f64,
	/// Elevation above the target's horizontal plane.
	pub pitch: f64,
	/// Points closer to the eye than this are culled.
	pub near: f64,
}

/// A world point mapped to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	/// Canvas x in pixels.
	pub x: f64,
	/// Canvas y in pixels, growing downwards.
	pub y: f64,
	/// Distance along the view axis.
	pub depth: f64,
	/// Pixels per world unit at this depth.
	pub scale: f64,
}

impl Camera {
	/// Eye position in world space.
	pub fn eye(&self) -> DVec3 {
		self.target + self.view_rotation().inverse() * DVec3::new(0.0, 0.0, self.distance)
	}

	/// Rotation from world offsets (relative to `target`) into view space.
	pub fn view_rotation(&self) -> DQuat {
		DQuat::from_rotation_x(self.pitch) * DQuat::from_rotation_y(-self.yaw)
	}

	/// Orbit to `yaw`/`pitch`, clamping the pitch.
	pub fn orbit_to(&mut self, yaw: f64, pitch: f64) {
		self.yaw = yaw;
		self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
	}

	/// Project `p` for a `width` x `height` canvas, `None` if behind the near plane.
	pub fn project(&self, p: DVec3, width: f64, height: f64) -> Option<Projected> {
		let view = self.view_rotation() * (p - self.target);
		let depth = self.distance - view.z;
		if depth < self.near {
			return None;
		}
		let focal = (height / 2.0) / (self.fov_y / 2.0).tan();
		let scale = focal / depth;
		Some(Projected {
			x: width / 2.0 + view.x * scale,
			y: height / 2.0 - view.y * scale,
			depth,
			scale,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	fn camera() -> Camera {
		Camera {
			target: DVec3::new(0.0, 0.5, 0.0),
			distance: 10.0,
			fov_y: FRAC_PI_2,
			yaw: 0.0,
			pitch: 0.0,
			near: 0.1,
		}
	}

	#[test]
	fn target_projects_to_the_centre() {
		let p = camera().project(DVec3::new(0.0, 0.5, 0.0), 800.0, 600.0).unwrap();
		assert!((p.x - 400.0).abs() < 1e-9);
		assert!((p.y - 300.0).abs() < 1e-9);
		assert!((p.depth - 10.0).abs() < 1e-9);
	}

	#[test]
	fn up_is_up_on_screen_and_far_is_smaller() {
		let cam = camera();
		let high = cam.project(DVec3::new(0.0, 2.0, 0.0), 800.0, 600.0).unwrap();
		assert!(high.y < 300.0);
		let near = cam.project(DVec3::new(1.0, 0.5, 2.0), 800.0, 600.0).unwrap();
		let far = cam.project(DVec3::new(1.0, 0.5, -2.0), 800.0, 600.0).unwrap();
		assert!(near.scale > far.scale);
		assert!(near.x > far.x);
	}

	#[test]
	fn points_behind_the_eye_are_culled() {
		assert_eq!(camera().project(DVec3::new(0.0, 0.5, 12.0), 800.0, 600.0), None);
	}

	#[test]
	fn eye_sits_at_depth_zero_along_the_axis() {
		let mut cam = camera();
		cam.orbit_to(0.7, 0.3);
		let eye = cam.eye();
		assert!((eye.distance(cam.target) - cam.distance).abs() < 1e-9);
		let view = cam.view_rotation() * (eye - cam.target);
		assert!(view.distance(DVec3::new(0.0, 0.0, cam.distance)) < 1e-9);
	}

	#[test]
	fn pitch_is_clamped() {
		let mut cam = camera();
		cam.orbit_to(0.0, 3.0);
		assert_eq!(cam.pitch, PITCH_LIMIT);
	}
}
