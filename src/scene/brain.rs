//! The neural "brain": point cloud, pulsing core, data rings and energy beams.
//!
//! Everything is in brain-local coordinates; the renderer scales by
//! [`super::config::SceneConfig::brain_scale`] and offsets to the brain centre.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI, TAU};

use glam::DQuat;
use rand::Rng;

use super::palette::{Rgb, VisualVariant};
use crate::network::DVec3;

/// Pairs closer than this may be linked.
pub const LINK_DISTANCE: f64 = 0.8;
/// Probability that an eligible pair is linked.
pub const LINK_PROBABILITY: f64 = 0.3;

/// A point of the neural cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct NeuralPoint {
	/// Brain-local position.
	pub position: DVec3,
	/// Gradient colour by index.
	pub color: Rgb,
}

/// Brain-shaped point cloud with sparse links between nearby points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeuralCloud {
	/// Cloud points.
	pub points: Vec<NeuralPoint>,
	/// Index pairs `(i, j)` with `i < j`.
	pub links: Vec<(usize, usize)>,
}

impl NeuralCloud {
	/// Scatter `count` points in a lobed, flattened sphere of `radius`.
	pub fn generate<R: Rng + ?Sized>(count: usize, radius: f64, rng: &mut R) -> Self {
		let points: Vec<NeuralPoint> = (0..count)
			.map(|i| {
				let theta = rng.gen_range(0.0..TAU);
				let phi = (2.0 * rng.r#gen::<f64>() - 1.0).acos();
				let lobe = 1.0 + 0.3 * (phi * 2.0).sin() * (theta * 3.0).cos();
				let r = radius * lobe * (0.7 + rng.r#gen::<f64>() * 0.3);
				NeuralPoint {
					position: DVec3::new(
						r * phi.sin() * theta.cos(),
						r * phi.cos() * 0.8,
						r * phi.sin() * theta.sin(),
					),
					color: gradient_color(i as f64 / count as f64),
				}
			})
			.collect();

		let mut links = Vec::new();
		for i in 0..points.len() {
			for j in (i + 1)..points.len() {
				let close = points[i].position.distance(points[j].position) < LINK_DISTANCE;
				if close && rng.gen_bool(LINK_PROBABILITY) {
					links.push((i, j));
				}
			}
		}

		Self { points, links }
	}
}

/// Red to light red over the first 60 %, then light red to white.
pub fn gradient_color(t: f64) -> Rgb {
	if t < 0.6 {
		Rgb::from_unit(0.9 + t * 0.1, t * 0.3, t * 0.3)
	} else {
		let t2 = (t - 0.6) / 0.4;
		Rgb::from_unit(1.0, 0.2 + t2 * 0.8, 0.2 + t2 * 0.8)
	}
}

/// Apply the cloud's slow tumble at time `t`.
pub fn cloud_transform(p: DVec3, t: f64) -> DVec3 {
	DQuat::from_rotation_x((t * 0.05).sin() * 0.1) * DQuat::from_rotation_y(t * 0.1) * p
}

/// Inner and glow shell scales at time `t`; they pulse in antiphase.
pub fn core_pulse(t: f64) -> (f64, f64) {
	(1.0 + (t * 2.0).sin() * 0.1, 1.0 + (t * 2.0 + PI).sin() * 0.15)
}

/// Radius of the inner core shell before pulsing.
pub const CORE_RADIUS: f64 = 0.5;
/// Radius of the glow shell before pulsing.
pub const GLOW_RADIUS: f64 = 0.7;

/// One of the three orbiting data rings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRing {
	/// Ring radius before the brain scale.
	pub radius: f64,
	/// Stroke colour.
	pub variant: VisualVariant,
	/// Stroke width in pixels.
	pub line_width: f64,
}

/// Inner, middle and outer ring.
pub const DATA_RINGS: [DataRing; 3] = [
	DataRing {
		radius: 2.25,
		variant: VisualVariant::RingInner,
		line_width: 2.0,
	},
	DataRing {
		radius: 2.75,
		variant: VisualVariant::RingMiddle,
		line_width: 1.5,
	},
	DataRing {
		radius: 3.25,
		variant: VisualVariant::RingOuter,
		line_width: 1.0,
	},
];

/// Euler angles (x, y, z) of ring `index` at time `t`.
pub fn ring_rotation(index: usize, t: f64) -> (f64, f64, f64) {
	match index {
		0 => (t * 0.3, 0.0, t * 0.2),
		1 => (FRAC_PI_3, t * 0.4, 0.0),
		_ => (0.0, FRAC_PI_4, t * 0.25),
	}
}

/// Sample `samples` points around ring `index` at time `t`.
pub fn ring_points(index: usize, t: f64, samples: usize) -> Vec<DVec3> {
	let ring = DATA_RINGS[index.min(DATA_RINGS.len() - 1)];
	let (rx, ry, rz) = ring_rotation(index, t);
	let rotation = DQuat::from_rotation_x(rx) * DQuat::from_rotation_y(ry) * DQuat::from_rotation_z(rz);
	(0..=samples)
		.map(|k| {
			let a = TAU * k as f64 / samples as f64;
			rotation * DVec3::new(ring.radius * a.cos(), ring.radius * a.sin(), 0.0)
		})
		.collect()
}

/// A beam radiating from the core.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyBeam {
	/// Beam centre.
	pub origin: DVec3,
	/// Unit direction along the beam.
	pub axis: DVec3,
	/// Full length at peak stretch.
	pub length: f64,
	/// Time offset of the stretch cycle.
	pub delay: f64,
	/// Stroke colour.
	pub variant: VisualVariant,
}

impl EnergyBeam {
	/// `count` beams evenly spaced around the core with a random tilt and length.
	pub fn ring<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Self> {
		(0..count)
			.map(|i| {
				let angle = i as f64 / count as f64 * TAU;
				let tilt = (rng.r#gen::<f64>() - 0.5) * 0.5;
				EnergyBeam {
					origin: DVec3::new(angle.cos() * 0.5, 0.0, angle.sin() * 0.5),
					axis: DQuat::from_rotation_y(-angle)
						* DQuat::from_rotation_z(FRAC_PI_2 + tilt)
						* DVec3::Y,
					length: 3.0 + rng.r#gen::<f64>() * 2.0,
					delay: i as f64 * 0.1,
					variant: if i % 2 == 0 {
						VisualVariant::BeamRed
					} else {
						VisualVariant::BeamWhite
					},
				}
			})
			.collect()
	}

	/// Visible length and opacity at time `t`.
	pub fn pulse(&self, t: f64) -> (f64, f64) {
		let wave = ((t + self.delay) * 2.0).sin();
		((0.5 + wave * 0.5) * self.length, 0.1 + wave * 0.1)
	}

	/// Segment endpoints at time `t`.
	pub fn endpoints(&self, t: f64) -> (DVec3, DVec3) {
		let (length, _) = self.pulse(t);
		let half = self.axis * (length / 2.0);
		(self.origin - half, self.origin + half)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn gradient_runs_red_to_white() {
		let start = gradient_color(0.0);
		assert!(start.0 >= 229 && start.1 == 0 && start.2 == 0);
		assert_eq!(gradient_color(0.9999), Rgb(255, 255, 255));
		let mid = gradient_color(0.6);
		assert_eq!(mid, Rgb(255, 51, 51));
	}

	#[test]
	fn cloud_stays_within_its_envelope() {
		let cloud = NeuralCloud::generate(200, 2.2, &mut StdRng::seed_from_u64(5));
		assert_eq!(cloud.points.len(), 200);
		for p in &cloud.points {
			assert!(p.position.length() <= 2.2 * 1.3 + 1e-9);
		}
		for &(i, j) in &cloud.links {
			assert!(i < j);
			assert!(cloud.points[i].position.distance(cloud.points[j].position) < LINK_DISTANCE);
		}
	}

	#[test]
	fn core_shells_pulse_in_antiphase() {
		let (inner, glow) = core_pulse(PI / 4.0);
		assert!((inner - 1.1).abs() < 1e-12);
		assert!((glow - 0.85).abs() < 1e-12);
	}

	#[test]
	fn rings_keep_their_radius() {
		for index in 0..DATA_RINGS.len() {
			for p in ring_points(index, 3.7, 16) {
				assert!((p.length() - DATA_RINGS[index].radius).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn beams_point_outwards() {
		let beams = EnergyBeam::ring(12, &mut StdRng::seed_from_u64(9));
		assert_eq!(beams.len(), 12);
		for beam in &beams {
			let horizontal = DVec3::new(beam.origin.x, 0.0, beam.origin.z);
			assert!(beam.axis.dot(horizontal).abs() > 0.4 * 0.5);
			assert!((3.0..5.0).contains(&beam.length));
			let (len, opacity) = beam.pulse(0.0);
			assert!(len >= 0.0 && len <= beam.length);
			assert!((0.0..=0.2).contains(&opacity));
		}
	}
}
