//! Labelled "satellite app" badges orbiting the brain.

use std::f64::consts::TAU;

use glam::DQuat;

use super::clock::HoverClock;
use super::palette::VisualVariant;
use crate::network::DVec3;

/// Tilt of the whole satellite system about X.
pub const SYSTEM_TILT: f64 = 0.2;
/// Spin of the whole satellite system, radians per second.
pub const SYSTEM_SPIN: f64 = 0.02;
/// Badge core spin, radians per second.
pub const CORE_SPIN: f64 = 1.2;
/// Radius of the badge's orbiting ring.
pub const RING_RADIUS: f64 = 0.3;

/// Static description of one orbiting app.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatelliteApp {
	/// Label drawn above the badge.
	pub name: &'static str,
	/// Accent colour.
	pub variant: VisualVariant,
	/// Orbit radius.
	pub radius: f64,
	/// Orbit speed, radians per second.
	pub speed: f64,
	/// Height of the orbit plane.
	pub y_offset: f64,
}

/// The apps shown around the brain.
pub const APPS: [SatelliteApp; 4] = [
	SatelliteApp {
		name: "CoDev",
		variant: VisualVariant::SatelliteWhite,
		radius: 4.0,
		speed: 0.2,
		y_offset: 0.5,
	},
	SatelliteApp {
		name: "PowerSaving",
		variant: VisualVariant::SatelliteLightRed,
		radius: 4.8,
		speed: 0.1,
		y_offset: -0.5,
	},
	SatelliteApp {
		name: "Chatbot",
		variant: VisualVariant::SatelliteRed,
		radius: 3.5,
		speed: 0.3,
		y_offset: 0.0,
	},
	SatelliteApp {
		name: "PCTT",
		variant: VisualVariant::SatelliteDarkRed,
		radius: 4.4,
		speed: 0.15,
		y_offset: 0.8,
	},
];

/// An orbiting badge with its own pausable clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Satellite {
	/// What this badge shows.
	pub app: SatelliteApp,
	/// Orbit angle at animation time zero.
	pub initial_angle: f64,
	/// Pauses while the pointer is over the badge.
	pub clock: HoverClock,
}

impl Satellite {
	/// One satellite per entry of [`APPS`], evenly spaced around the orbit.
	pub fn all() -> Vec<Satellite> {
		APPS.iter()
			.enumerate()
			.map(|(i, app)| Satellite {
				app: *app,
				initial_angle: i as f64 / APPS.len() as f64 * TAU,
				clock: HoverClock::new(),
			})
			.collect()
	}

	/// Orbit-local position at animation time `t`.
	pub fn orbit_position(&self, t: f64) -> DVec3 {
		let angle = t * self.app.speed + self.initial_angle;
		DVec3::new(
			angle.cos() * self.app.radius,
			self.app.y_offset + (t * 1.5).sin() * 0.2,
			angle.sin() * self.app.radius,
		)
	}

	/// World position at wall-clock `now` around `center`.
	///
	/// The orbit uses the satellite's own clock so hovering freezes it,
	/// the system spin keeps following the wall clock.
	pub fn world_position(&self, now: f64, center: DVec3) -> DVec3 {
		system_transform(self.orbit_position(self.clock.time(now)), now) + center
	}

	/// Offsets of the badge ring's sample points at animation time `t`.
	pub fn ring_offsets(&self, t: f64, samples: usize) -> Vec<DVec3> {
		(0..=samples)
			.map(|k| {
				let a = TAU * k as f64 / samples as f64;
				DQuat::from_rotation_x(t.sin() * 0.5)
					* DQuat::from_rotation_y(t * 2.0)
					* DVec3::new(RING_RADIUS * a.cos(), RING_RADIUS * a.sin(), 0.0)
			})
			.collect()
	}
}

/// Apply the system spin and tilt.
pub fn system_transform(p: DVec3, now: f64) -> DVec3 {
	DQuat::from_rotation_x(SYSTEM_TILT) * DQuat::from_rotation_y(SYSTEM_SPIN * now) * p
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn satellites_are_evenly_spaced() {
		let sats = Satellite::all();
		assert_eq!(sats.len(), 4);
		assert_eq!(sats[2].initial_angle, std::f64::consts::PI);
		let p = sats[0].orbit_position(0.0);
		assert!((p.x - 4.0).abs() < 1e-12 && p.z.abs() < 1e-12 && (p.y - 0.5).abs() < 1e-12);
	}

	#[test]
	fn orbit_radius_is_constant() {
		let sat = &Satellite::all()[1];
		for t in [0.0, 1.0, 7.5, 42.0] {
			let p = sat.orbit_position(t);
			assert!((p.x.hypot(p.z) - 4.8).abs() < 1e-9);
		}
	}

	#[test]
	fn hover_freezes_the_orbit_only() {
		let mut sat = Satellite::all().remove(0);
		sat.clock.hover_enter(1.0);
		let a = sat.orbit_position(sat.clock.time(1.0));
		let b = sat.orbit_position(sat.clock.time(3.0));
		assert_eq!(a, b);
		let wa = sat.world_position(1.0, DVec3::ZERO);
		let wb = sat.world_position(3.0, DVec3::ZERO);
		assert!((wa.length() - wb.length()).abs() < 1e-9);
	}

	#[test]
	fn ring_offsets_keep_their_radius() {
		let sat = &Satellite::all()[3];
		for p in sat.ring_offsets(2.3, 12) {
			assert!((p.length() - RING_RADIUS).abs() < 1e-12);
		}
	}
}
