//! Procedural tower network: node placement on a spherical cap, a sparse
//! degree-bounded graph between the nodes, and arc geometry for drawing it.
//!
//! Everything here is pure data; the scene only reads the resulting
//! [`NetworkLayout`].

mod connectivity;
mod connectors;
mod error;
mod placement;

use log::info;
use rand::Rng;

pub use connectivity::{Adjacency, MAX_DEGREE, MIN_DEGREE, TARGET_DEGREE, build_connectivity};
pub use connectors::{ConnectorPaths, Edge, build_connector_paths, unique_edges};
pub use error::NetworkError;
pub use glam::DVec3;
pub use placement::{GOLDEN_RATIO_FRACTION, MAX_PHASE, Node, TowerTier, cap_half_angle, place_nodes};

/// Generator input.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkParams {
	/// Number of towers, at least 1.
	pub node_count: usize,
	/// Sphere radius, strictly positive.
	pub radius: f64,
	/// Area-fraction term of the cap, in `(0, 1]`.
	pub cap_coverage: f64,
	/// Line segments per connector arc, at least 1.
	pub segments_per_edge: usize,
}

impl Default for NetworkParams {
	fn default() -> Self {
		Self {
			node_count: 25,
			radius: 6.5,
			cap_coverage: 0.4,
			segments_per_edge: 12,
		}
	}
}

/// Generator output, immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkLayout {
	/// Sphere radius the layout was built for.
	pub radius: f64,
	/// Towers in placement order.
	pub nodes: Vec<Node>,
	/// Symmetric neighbour sets.
	pub adjacency: Adjacency,
	/// Unique edges and their arc segments.
	pub connectors: ConnectorPaths,
}

impl NetworkLayout {
	/// Run placement, connectivity and arc generation for `params`.
	pub fn generate<R: Rng + ?Sized>(
		params: &NetworkParams,
		rng: &mut R,
	) -> Result<Self, NetworkError> {
		if params.segments_per_edge < 1 {
			return Err(NetworkError::invalid(
				"segments_per_edge",
				params.segments_per_edge,
			));
		}
		let nodes = place_nodes(params.node_count, params.radius, params.cap_coverage, rng)?;
		let adjacency = build_connectivity(&nodes);
		let connectors =
			build_connector_paths(&nodes, &adjacency, params.segments_per_edge, params.radius)?;

		info!(
			"generated tower network: {} nodes, {} edges, {} arc points",
			nodes.len(),
			connectors.edges.len(),
			connectors.points.len()
		);

		Ok(Self {
			radius: params.radius,
			nodes,
			adjacency,
			connectors,
		})
	}

	/// Unique edges.
	pub fn edges(&self) -> &[Edge] {
		&self.connectors.edges
	}

	/// Flat segment point list, two points per segment.
	pub fn connector_points(&self) -> &[DVec3] {
		&self.connectors.points
	}
}
