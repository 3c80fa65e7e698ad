//! Degree-bounded nearest-neighbour graph over placed nodes.

use std::collections::BTreeSet;

use log::{debug, warn};

use super::placement::Node;

/// Degree at which a node stops initiating greedy edges.
pub const TARGET_DEGREE: usize = 3;
/// Degree at which a node refuses greedy edges from others.
pub const MAX_DEGREE: usize = 4;
/// Degree the repair pass tries to reach for every node.
pub const MIN_DEGREE: usize = 2;

/// Symmetric adjacency sets, indexed by node id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
	neighbors: Vec<BTreeSet<usize>>,
}

impl Adjacency {
	/// An edgeless graph over `len` nodes.
	pub fn new(len: usize) -> Self {
		Self {
			neighbors: vec![BTreeSet::new(); len],
		}
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.neighbors.len()
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.neighbors.is_empty()
	}

	/// Neighbours of node `i`, in ascending id order.
	pub fn neighbors(&self, i: usize) -> &BTreeSet<usize> {
		&self.neighbors[i]
	}

	/// Degree of node `i`.
	pub fn degree(&self, i: usize) -> usize {
		self.neighbors[i].len()
	}

	/// Whether `i` and `j` are connected.
	pub fn contains(&self, i: usize, j: usize) -> bool {
		self.neighbors[i].contains(&j)
	}

	/// Insert the undirected edge `{i, j}`; a no-op if it already exists.
	pub fn connect(&mut self, i: usize, j: usize) {
		debug_assert_ne!(i, j, "self loops are not allowed");
		self.neighbors[i].insert(j);
		self.neighbors[j].insert(i);
	}

	/// Iterate `(i, neighbours)` for every node.
	pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> {
		self.neighbors.iter().enumerate()
	}
}

/// Build the connector graph for `nodes`.
///
/// A greedy pass links every node to its nearest neighbours until it reaches
/// [`TARGET_DEGREE`], skipping neighbours already at [`MAX_DEGREE`]. A repair
/// pass then force-links any node below [`MIN_DEGREE`] to its nearest
/// unlinked node, ignoring the cap. The result depends only on positions.
pub fn build_connectivity(nodes: &[Node]) -> Adjacency {
	let mut adjacency = Adjacency::new(nodes.len());
	link_nearest(nodes, &mut adjacency);
	repair_under_connected(nodes, &mut adjacency);
	adjacency
}

fn link_nearest(nodes: &[Node], adjacency: &mut Adjacency) {
	for i in 0..nodes.len() {
		for (j, _) in sorted_candidates(nodes, i) {
			if adjacency.degree(i) >= TARGET_DEGREE {
				break;
			}
			if adjacency.degree(j) >= MAX_DEGREE {
				continue;
			}
			adjacency.connect(i, j);
		}
	}
}

fn repair_under_connected(nodes: &[Node], adjacency: &mut Adjacency) {
	for i in 0..nodes.len() {
		while adjacency.degree(i) < MIN_DEGREE {
			let Some(j) = nearest_unlinked(nodes, adjacency, i) else {
				warn!("node {i} left with degree {}", adjacency.degree(i));
				break;
			};
			debug!("forcing edge {i}-{j} (neighbour degree {})", adjacency.degree(j));
			adjacency.connect(i, j);
		}
	}
}

/// Every other node with its distance to `i`, nearest first; ties keep id order.
fn sorted_candidates(nodes: &[Node], i: usize) -> Vec<(usize, f64)> {
	let origin = nodes[i].position;
	let mut candidates: Vec<(usize, f64)> = nodes
		.iter()
		.enumerate()
		.filter(|&(j, _)| j != i)
		.map(|(j, n)| (j, origin.distance(n.position)))
		.collect();
	candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
	candidates
}

fn nearest_unlinked(nodes: &[Node], adjacency: &Adjacency, i: usize) -> Option<usize> {
	let origin = nodes[i].position;
	let mut best: Option<(usize, f64)> = None;
	for (j, node) in nodes.iter().enumerate() {
		if j == i || adjacency.contains(i, j) {
			continue;
		}
		let d = origin.distance(node.position);
		if best.is_none_or(|(_, min)| d < min) {
			best = Some((j, d));
		}
	}
	best.map(|(j, _)| j)
}
