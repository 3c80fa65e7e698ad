//! Tower masts, their broadcast wave rings and the signals flying to them.

use rand::Rng;

use super::palette::VisualVariant;
use crate::network::{DVec3, Node};

/// Height of the tower head above the surface, where signals land.
pub const HEAD_HEIGHT: f64 = 0.6;

/// Stacked mast sections as `(from, to, variant)` heights along the normal.
pub const MAST_SECTIONS: [(f64, f64, VisualVariant); 4] = [
	(0.0, 0.2, VisualVariant::TowerRed),
	(0.2, 0.4, VisualVariant::TowerWhite),
	(0.4, 0.6, VisualVariant::TowerRed),
	(0.6, 0.8, VisualVariant::TowerWhite),
];

/// Height of the antenna platform.
pub const PLATFORM_HEIGHT: f64 = 0.55;

/// Phase offsets of the three wave rings per tower.
pub const WAVE_OFFSETS: [f64; 3] = [0.0, 1.3, 2.6];

/// Radius of a wave ring at scale 1.
pub const WAVE_BASE_RADIUS: f64 = 0.11;

/// Scale and opacity of an expanding wave ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveRing {
	/// Multiplier on [`WAVE_BASE_RADIUS`], in `[1, 5)`.
	pub scale: f64,
	/// Fades from 0.8 to 0 as the ring grows.
	pub opacity: f64,
}

/// Wave ring state at time `t` for a ring with the given offsets.
pub fn wave_ring(t: f64, offset: f64, phase: f64) -> WaveRing {
	let growth = (t * 2.0 + offset + phase).rem_euclid(4.0);
	WaveRing {
		scale: 1.0 + growth,
		opacity: (0.8 - growth / 4.0).max(0.0),
	}
}

/// Outward unit normal of a tower, falling back to +Y.
pub fn normal(node: &Node) -> DVec3 {
	node.position.try_normalize().unwrap_or(DVec3::Y)
}

/// Globe-local point `height` above a tower base, scaled by its tier.
pub fn mast_point(node: &Node, height: f64) -> DVec3 {
	node.position + normal(node) * (height * node.tier.height_scale())
}

/// Globe-local landing point of signals aimed at `node`.
pub fn head(node: &Node, radius: f64) -> DVec3 {
	normal(node) * (radius + HEAD_HEIGHT)
}

/// A pulse travelling from the brain to a tower head.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
	/// Target tower id.
	pub target: usize,
	/// Fraction of the path covered, in `[0, 1]`.
	pub progress: f64,
	/// Path fraction per second.
	pub speed: f64,
}

impl Signal {
	fn spawn<R: Rng + ?Sized>(targets: usize, rng: &mut R) -> Self {
		Self {
			target: rng.gen_range(0..targets),
			progress: rng.r#gen(),
			speed: 0.3 + rng.r#gen::<f64>() * 0.6,
		}
	}

	/// Advance by `dt` seconds, retargeting a random tower on arrival.
	pub fn advance<R: Rng + ?Sized>(&mut self, dt: f64, targets: usize, rng: &mut R) {
		self.progress += self.speed * dt;
		if self.progress > 1.0 {
			self.progress = 0.0;
			self.target = rng.gen_range(0..targets);
		}
	}

	/// Size multiplier, largest half way along the path.
	pub fn pulse(&self) -> f64 {
		1.0 - (self.progress - 0.5).abs() * 0.5
	}

	/// Position between `from` and `to`.
	pub fn position(&self, from: DVec3, to: DVec3) -> DVec3 {
		from.lerp(to, self.progress)
	}
}

/// `count` signals spread over `targets` towers; empty when there are none.
pub fn spawn_signals<R: Rng + ?Sized>(count: usize, targets: usize, rng: &mut R) -> Vec<Signal> {
	if targets == 0 {
		return Vec::new();
	}
	(0..count).map(|_| Signal::spawn(targets, rng)).collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::network::TowerTier;

	fn tower(tier: TowerTier) -> Node {
		Node {
			id: 0,
			position: DVec3::new(0.0, 0.0, 2.0),
			tier,
			phase: 0.0,
		}
	}

	#[test]
	fn wave_rings_grow_and_fade() {
		let start = wave_ring(0.0, 0.0, 0.0);
		assert_eq!(start, WaveRing { scale: 1.0, opacity: 0.8 });
		let later = wave_ring(1.0, 0.0, 0.0);
		assert_eq!(later.scale, 3.0);
		assert!((later.opacity - 0.3).abs() < 1e-12);
		let wrapped = wave_ring(2.0, 0.0, 0.0);
		assert_eq!(wrapped.scale, 1.0);
	}

	#[test]
	fn wave_offsets_desync_rings() {
		let rings: Vec<_> = WAVE_OFFSETS.iter().map(|&o| wave_ring(0.5, o, 0.0)).collect();
		assert!(rings[0].scale != rings[1].scale && rings[1].scale != rings[2].scale);
	}

	#[test]
	fn masts_follow_the_normal_and_tier() {
		let tall = mast_point(&tower(TowerTier::A), 0.8);
		let short = mast_point(&tower(TowerTier::C), 0.8);
		assert!((tall.z - (2.0 + 0.8 * 1.25)).abs() < 1e-12);
		assert!(tall.z > short.z);
		assert!(head(&tower(TowerTier::B), 2.0).distance(DVec3::new(0.0, 0.0, 2.6)) < 1e-12);
	}

	#[test]
	fn signals_retarget_on_arrival() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut signal = Signal {
			target: 0,
			progress: 0.95,
			speed: 0.5,
		};
		signal.advance(0.2, 25, &mut rng);
		assert_eq!(signal.progress, 0.0);
		assert!(signal.target < 25);
		assert!((signal.pulse() - 0.75).abs() < 1e-12);
	}

	#[test]
	fn no_towers_no_signals() {
		let mut rng = StdRng::seed_from_u64(3);
		assert!(spawn_signals(5, 0, &mut rng).is_empty());
		let signals = spawn_signals(5, 10, &mut rng);
		assert_eq!(signals.len(), 5);
		for s in &signals {
			assert!(s.target < 10 && (0.3..0.9).contains(&s.speed));
		}
	}
}
