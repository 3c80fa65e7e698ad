//! Tunable constants for the landing scene.

use std::f64::consts::PI;

use super::camera::Camera;
use super::globe::Globe;
use crate::network::{DVec3, NetworkParams};

/// Everything the scene can be tuned with.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
	/// Number of towers on the globe.
	pub tower_count: usize,
	/// Globe radius.
	pub globe_radius: f64,
	/// Globe centre, below the fold so only the cap shows.
	pub globe_center: DVec3,
	/// Area-fraction term of the tower cap.
	pub cap_coverage: f64,
	/// Segments per connector arc.
	pub arc_segments: usize,
	/// Brain centre.
	pub brain_center: DVec3,
	/// Uniform scale of the brain group.
	pub brain_scale: f64,
	/// Neural cloud point count.
	pub brain_nodes: usize,
	/// Neural cloud radius before scaling.
	pub brain_radius: f64,
	/// Number of energy beams.
	pub beam_count: usize,
	/// Floating particle count.
	pub particle_count: usize,
	/// Side of the particle cube before scaling.
	pub particle_extent: f64,
	/// Signals in flight at once.
	pub signal_count: usize,
	/// Rest centre of the floating sphere.
	pub floating_center: DVec3,
	/// Floating sphere radius.
	pub floating_radius: f64,
	/// Camera distance from its target.
	pub camera_distance: f64,
	/// Camera target.
	pub camera_target: DVec3,
	/// Vertical field of view in degrees.
	pub fov_degrees: f64,
	/// Fixed simulation step per animation frame, in seconds.
	pub frame_dt: f64,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			tower_count: 25,
			globe_radius: 6.5,
			globe_center: DVec3::new(0.0, -9.0, 0.0),
			cap_coverage: 0.4,
			arc_segments: 12,
			brain_center: DVec3::new(0.0, 1.5, 0.0),
			brain_scale: 0.55,
			brain_nodes: 200,
			brain_radius: 2.2,
			beam_count: 12,
			particle_count: 100,
			particle_extent: 15.0,
			signal_count: 5,
			floating_center: DVec3::new(-6.0, 3.0, -4.0),
			floating_radius: 1.4,
			camera_distance: 11.0,
			camera_target: DVec3::new(0.0, 0.5, 0.0),
			fov_degrees: 55.0,
			frame_dt: 0.016,
		}
	}
}

impl SceneConfig {
	/// Initial camera.
	pub fn camera(&self) -> Camera {
		Camera {
			target: self.camera_target,
			distance: self.camera_distance,
			fov_y: self.fov_degrees * PI / 180.0,
			yaw: 0.0,
			pitch: 0.0,
			near: 0.1,
		}
	}

	/// The globe the towers sit on.
	pub fn globe(&self) -> Globe {
		Globe {
			center: self.globe_center,
			radius: self.globe_radius,
		}
	}

	/// Map a brain-local point to world space.
	pub fn brain_to_world(&self, local: DVec3) -> DVec3 {
		local * self.brain_scale + self.brain_center
	}
}

impl From<&SceneConfig> for NetworkParams {
	fn from(config: &SceneConfig) -> Self {
		NetworkParams {
			node_count: config.tower_count,
			radius: config.globe_radius,
			cap_coverage: config.cap_coverage,
			segments_per_edge: config.arc_segments,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_generator_defaults() {
		let params = NetworkParams::from(&SceneConfig::default());
		assert_eq!(params, NetworkParams::default());
	}

	#[test]
	fn brain_points_are_scaled_then_offset() {
		let config = SceneConfig::default();
		let p = config.brain_to_world(DVec3::new(2.0, 0.0, 0.0));
		assert!(p.distance(DVec3::new(1.1, 1.5, 0.0)) < 1e-12);
	}
}
