//! Golden-ratio spiral placement of tower nodes on a polar cap.

use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;

use super::error::NetworkError;

/// Fractional part of the golden ratio, `(√5 + 1) / 2 - 1`.
pub const GOLDEN_RATIO_FRACTION: f64 = 0.618_033_988_749_894_8;

/// Upper bound (exclusive) of the animation phase offset.
pub const MAX_PHASE: f64 = 2.0;

/// Tower category, used only to vary how a node is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TowerTier {
	/// Backbone tower.
	A,
	/// Regional tower.
	B,
	/// Local tower.
	C,
}

impl TowerTier {
	/// Every tier, in declaration order.
	pub const ALL: [TowerTier; 3] = [TowerTier::A, TowerTier::B, TowerTier::C];

	/// Mast height multiplier for this tier.
	pub fn height_scale(self) -> f64 {
		match self {
			TowerTier::A => 1.25,
			TowerTier::B => 1.0,
			TowerTier::C => 0.8,
		}
	}
}

/// A placed tower node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Index of the node in placement order.
	pub id: usize,
	/// Position on the sphere surface.
	pub position: DVec3,
	/// Category tag.
	pub tier: TowerTier,
	/// Animation desync offset in `[0, MAX_PHASE)`.
	pub phase: f64,
}

/// Place `count` nodes on the polar cap (around +Y) of a sphere of `radius`.
///
/// `cap_coverage` is the area-fraction term of the inclination formula
/// `acos(1 - cap_coverage * t)`; `1.0` spans a full hemisphere. A single node
/// sits on the pole. Positions depend only on the three numeric inputs,
/// `rng` drives the tier and phase fields.
pub fn place_nodes<R: Rng + ?Sized>(
	count: usize,
	radius: f64,
	cap_coverage: f64,
	rng: &mut R,
) -> Result<Vec<Node>, NetworkError> {
	if count < 1 {
		return Err(NetworkError::invalid("node_count", count));
	}
	if !radius.is_finite() || radius <= 0.0 {
		return Err(NetworkError::invalid("radius", radius));
	}
	if !(cap_coverage > 0.0 && cap_coverage <= 1.0) {
		return Err(NetworkError::invalid("cap_coverage", cap_coverage));
	}

	let last = (count - 1) as f64;
	let nodes = (0..count)
		.map(|i| {
			let t = if count == 1 { 0.0 } else { i as f64 / last };
			let inclination = (1.0 - cap_coverage * t).acos();
			let azimuth = TAU * GOLDEN_RATIO_FRACTION * i as f64;
			let (sin_inc, cos_inc) = inclination.sin_cos();
			let (sin_az, cos_az) = azimuth.sin_cos();

			Node {
				id: i,
				position: DVec3::new(
					radius * sin_inc * cos_az,
					radius * cos_inc,
					radius * sin_inc * sin_az,
				),
				tier: TowerTier::ALL[rng.gen_range(0..TowerTier::ALL.len())],
				phase: rng.gen_range(0.0..MAX_PHASE),
			}
		})
		.collect();

	Ok(nodes)
}

/// Largest inclination a node may have for the given coverage.
pub fn cap_half_angle(cap_coverage: f64) -> f64 {
	(1.0 - cap_coverage).acos()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn golden_fraction_matches_formula() {
		let phi = (5f64.sqrt() + 1.0) / 2.0 - 1.0;
		assert!((phi - GOLDEN_RATIO_FRACTION).abs() < 1e-15);
	}

	#[test]
	fn first_node_is_on_the_pole() {
		let mut rng = StdRng::seed_from_u64(7);
		let nodes = place_nodes(25, 6.5, 0.4, &mut rng).unwrap();
		assert_eq!(nodes.len(), 25);
		assert!(nodes[0].position.distance(DVec3::new(0.0, 6.5, 0.0)) < 1e-9);
	}

	#[test]
	fn last_node_sits_on_the_cap_edge() {
		let mut rng = StdRng::seed_from_u64(7);
		let nodes = place_nodes(10, 2.0, 0.4, &mut rng).unwrap();
		let last = nodes.last().unwrap().position;
		assert!((last.y - 2.0 * 0.6).abs() < 1e-9);
		assert!((last.angle_between(DVec3::Y) - cap_half_angle(0.4)).abs() < 1e-9);
	}

	#[test]
	fn single_node_does_not_divide_by_zero() {
		let mut rng = StdRng::seed_from_u64(1);
		let nodes = place_nodes(1, 3.0, 0.4, &mut rng).unwrap();
		assert_eq!(nodes.len(), 1);
		assert!(nodes[0].position.x.is_finite());
		assert!((nodes[0].position.y - 3.0).abs() < 1e-12);
	}

	#[test]
	fn positions_ignore_the_random_source() {
		let a = place_nodes(12, 1.0, 0.7, &mut StdRng::seed_from_u64(1)).unwrap();
		let b = place_nodes(12, 1.0, 0.7, &mut StdRng::seed_from_u64(99)).unwrap();
		for (na, nb) in a.iter().zip(&b) {
			assert_eq!(na.position, nb.position);
		}
	}

	#[test]
	fn phases_stay_in_range() {
		let mut rng = StdRng::seed_from_u64(3);
		for node in place_nodes(50, 1.0, 0.4, &mut rng).unwrap() {
			assert!((0.0..MAX_PHASE).contains(&node.phase));
		}
	}

	#[test]
	fn rejects_invalid_inputs() {
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			place_nodes(0, 1.0, 0.4, &mut rng),
			Err(NetworkError::InvalidParameter { name: "node_count", .. })
		));
		assert!(matches!(
			place_nodes(5, 0.0, 0.4, &mut rng),
			Err(NetworkError::InvalidParameter { name: "radius", .. })
		));
		assert!(matches!(
			place_nodes(5, -2.0, 0.4, &mut rng),
			Err(NetworkError::InvalidParameter { name: "radius", .. })
		));
		assert!(matches!(
			place_nodes(5, 1.0, 0.0, &mut rng),
			Err(NetworkError::InvalidParameter { name: "cap_coverage", .. })
		));
		assert!(matches!(
			place_nodes(5, 1.0, 1.5, &mut rng),
			Err(NetworkError::InvalidParameter { name: "cap_coverage", .. })
		));
	}
}
