//! Arc geometry for the connector lines between linked towers.

use std::collections::HashSet;

use glam::DVec3;

use super::connectivity::Adjacency;
use super::error::NetworkError;
use super::placement::Node;

/// An undirected edge, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
	/// Lower node id.
	pub a: usize,
	/// Higher node id.
	pub b: usize,
}

impl Edge {
	/// Canonical edge for the pair `{i, j}`.
	pub fn new(i: usize, j: usize) -> Self {
		Self {
			a: i.min(j),
			b: i.max(j),
		}
	}

	/// Whether `id` is one of the endpoints.
	pub fn touches(&self, id: usize) -> bool {
		self.a == id || self.b == id
	}
}

/// Deduplicated edges and the line-segment points drawn for them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorPaths {
	/// Every unordered pair exactly once, in discovery order.
	pub edges: Vec<Edge>,
	/// Consecutive pairs form one segment; `segments_per_edge` segments per edge.
	pub points: Vec<DVec3>,
}

impl ConnectorPaths {
	/// Segment endpoints as `(start, end)` pairs.
	pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
		self.points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
	}
}

/// Collapse the symmetric adjacency into unique edges, keeping first occurrence.
pub fn unique_edges(adjacency: &Adjacency) -> Vec<Edge> {
	let mut seen = HashSet::new();
	adjacency
		.iter()
		.flat_map(|(i, neighbors)| neighbors.iter().map(move |&j| Edge::new(i, j)))
		.filter(|edge| edge.a != edge.b && seen.insert(*edge))
		.collect()
}

/// Subdivide each unique edge into `segments_per_edge` segments hugging the sphere.
///
/// Interpolated points are pushed back out to `radius` so the chord bows into
/// an arc over the surface. A point that lands on the centre (antipodal
/// endpoints) is projected onto the +Y pole instead.
pub fn build_connector_paths(
	nodes: &[Node],
	adjacency: &Adjacency,
	segments_per_edge: usize,
	radius: f64,
) -> Result<ConnectorPaths, NetworkError> {
	if segments_per_edge < 1 {
		return Err(NetworkError::invalid("segments_per_edge", segments_per_edge));
	}
	if !radius.is_finite() || radius <= 0.0 {
		return Err(NetworkError::invalid("radius", radius));
	}

	let edges = unique_edges(adjacency);
	let mut points = Vec::with_capacity(edges.len() * segments_per_edge * 2);
	let steps = segments_per_edge as f64;

	for edge in &edges {
		let (start, end) = (nodes[edge.a].position, nodes[edge.b].position);
		let on_sphere = |t: f64| start.lerp(end, t).try_normalize().unwrap_or(DVec3::Y) * radius;
		for k in 0..segments_per_edge {
			points.push(on_sphere(k as f64 / steps));
			points.push(on_sphere((k + 1) as f64 / steps));
		}
	}

	Ok(ConnectorPaths { edges, points })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::placement::TowerTier;

	fn node(id: usize, position: DVec3) -> Node {
		Node {
			id,
			position,
			tier: TowerTier::A,
			phase: 0.0,
		}
	}

	fn triangle() -> (Vec<Node>, Adjacency) {
		let nodes = vec![
			node(0, DVec3::new(0.0, 2.0, 0.0)),
			node(1, DVec3::new(2.0, 0.0, 0.0)),
			node(2, DVec3::new(0.0, 0.0, 2.0)),
		];
		let mut adj = Adjacency::new(3);
		adj.connect(0, 1);
		adj.connect(1, 2);
		adj.connect(2, 0);
		(nodes, adj)
	}

	#[test]
	fn edges_are_canonical_and_unique() {
		let (_, adj) = triangle();
		let edges = unique_edges(&adj);
		assert_eq!(edges, vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)]);
		assert!(edges.iter().all(|e| e.a < e.b));
	}

	#[test]
	fn segment_count_and_radius() {
		let (nodes, adj) = triangle();
		let paths = build_connector_paths(&nodes, &adj, 8, 2.0).unwrap();
		assert_eq!(paths.points.len(), 3 * 8 * 2);
		assert_eq!(paths.segments().count(), 3 * 8);
		for p in &paths.points {
			assert!((p.length() - 2.0).abs() < 1e-9);
		}
	}

	#[test]
	fn arcs_start_and_end_on_their_towers() {
		let (nodes, adj) = triangle();
		let paths = build_connector_paths(&nodes, &adj, 4, 2.0).unwrap();
		let first: Vec<_> = paths.segments().take(4).collect();
		assert!(first[0].0.distance(nodes[0].position) < 1e-9);
		assert!(first[3].1.distance(nodes[1].position) < 1e-9);
		for w in first.windows(2) {
			assert!(w[0].1.distance(w[1].0) < 1e-12);
		}
	}

	#[test]
	fn antipodal_midpoint_falls_back_to_the_pole() {
		let nodes = vec![
			node(0, DVec3::new(1.0, 0.0, 0.0)),
			node(1, DVec3::new(-1.0, 0.0, 0.0)),
		];
		let mut adj = Adjacency::new(2);
		adj.connect(0, 1);
		let paths = build_connector_paths(&nodes, &adj, 2, 1.0).unwrap();
		assert!(paths.points[1].distance(DVec3::Y) < 1e-12);
		assert!(paths.points.iter().all(|p| p.x.is_finite()));
	}

	#[test]
	fn rejects_zero_segments() {
		let (nodes, adj) = triangle();
		assert!(matches!(
			build_connector_paths(&nodes, &adj, 0, 2.0),
			Err(NetworkError::InvalidParameter { name: "segments_per_edge", .. })
		));
	}

	#[test]
	fn touches_either_endpoint() {
		let e = Edge::new(5, 2);
		assert_eq!((e.a, e.b), (2, 5));
		assert!(e.touches(2) && e.touches(5) && !e.touches(3));
	}
}
