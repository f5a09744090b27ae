use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::SimulationConfig;
use super::error::GraphError;
use super::interaction::DragState;
use super::types::{GraphData, GraphLink, GraphNode, NodeGroup};

/// A node with a live position and velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct SimNode {
	/// Host-supplied identifier.
	pub id: String,
	/// Text drawn next to the node.
	pub label: String,
	/// Colour category.
	pub group: NodeGroup,
	/// Pass-through fields from the input node.
	pub extra: BTreeMap<String, String>,
	/// Position in surface pixels.
	pub x: f64,
	/// Vertical counterpart of `x`.
	pub y: f64,
	/// Velocity in pixels per frame.
	pub vx: f64,
	/// Vertical counterpart of `vx`.
	pub vy: f64,
}

/// An edge resolved to indices into the node table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimEdge {
	/// Index of the source node.
	pub source: usize,
	/// Index of the target node.
	pub target: usize,
}

/// The nodes, edges and drag marker owned by one graph view.
pub struct Simulation {
	pub(super) config: SimulationConfig,
	pub(super) nodes: Vec<SimNode>,
	pub(super) edges: Vec<SimEdge>,
	pub(super) drag: DragState,
	id_to_idx: HashMap<String, usize>,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl Simulation {
	/// An empty simulation over a `width` x `height` surface.
	pub fn new(config: SimulationConfig, width: f64, height: f64) -> Result<Self, GraphError> {
		Self::with_rng(config, width, height, SmallRng::from_entropy())
	}

	/// Like [`Simulation::new`] but with reproducible initial layouts.
	pub fn with_seed(
		config: SimulationConfig,
		width: f64,
		height: f64,
		seed: u64,
	) -> Result<Self, GraphError> {
		Self::with_rng(config, width, height, SmallRng::seed_from_u64(seed))
	}

	fn with_rng(
		config: SimulationConfig,
		width: f64,
		height: f64,
		rng: SmallRng,
	) -> Result<Self, GraphError> {
		config.validate()?;
		Ok(Self {
			config,
			nodes: Vec::new(),
			edges: Vec::new(),
			drag: DragState::Idle,
			id_to_idx: HashMap::new(),
			width,
			height,
			rng,
		})
	}

	/// Replace every node and edge.
	///
	/// Nodes land uniformly at random inside the current surface with zero
	/// velocity. Links whose endpoints are not in `nodes` are dropped.
	/// Any drag in progress is released, since its node no longer exists.
	pub fn set_data(&mut self, nodes: &[GraphNode], links: &[GraphLink]) {
		let (w, h) = (self.width.max(0.0), self.height.max(0.0));
		self.nodes = nodes
			.iter()
			.map(|node| SimNode {
				id: node.id.clone(),
				label: node.label.clone(),
				group: node.group.clone(),
				extra: node.extra.clone(),
				x: self.rng.r#gen::<f64>() * w,
				y: self.rng.r#gen::<f64>() * h,
				vx: 0.0,
				vy: 0.0,
			})
			.collect();

		self.id_to_idx.clear();
		for (idx, node) in self.nodes.iter().enumerate() {
			// Duplicate ids resolve to the first occurrence.
			self.id_to_idx.entry(node.id.clone()).or_insert(idx);
		}

		self.edges = links
			.iter()
			.filter_map(|link| {
				let resolved = self.resolve(link);
				if resolved.is_none() {
					trace!("dropping link {} -> {}", link.source, link.target);
				}
				resolved
			})
			.collect();
		self.drag = DragState::Idle;

		debug!(
			"graph data loaded: {} nodes, {} edges ({} dropped)",
			self.nodes.len(),
			self.edges.len(),
			links.len() - self.edges.len()
		);
	}

	/// Convenience wrapper over [`Simulation::set_data`].
	pub fn load(&mut self, data: &GraphData) {
		self.set_data(&data.nodes, &data.links);
	}

	fn resolve(&self, link: &GraphLink) -> Option<SimEdge> {
		Some(SimEdge {
			source: *self.id_to_idx.get(&link.source)?,
			target: *self.id_to_idx.get(&link.target)?,
		})
	}

	/// Track a new surface size. Positions are left alone until the next step.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Current surface width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Constants this simulation was built with.
	pub fn config(&self) -> &SimulationConfig {
		&self.config
	}

	/// Nodes in load order.
	pub fn nodes(&self) -> &[SimNode] {
		&self.nodes
	}

	/// Edges that resolved on the last load.
	pub fn edges(&self) -> &[SimEdge] {
		&self.edges
	}

	/// Index of the node with `id`, if loaded.
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.id_to_idx.get(id).copied()
	}

	/// Node with `id`, if loaded.
	pub fn node(&self, id: &str) -> Option<&SimNode> {
		self.index_of(id).map(|idx| &self.nodes[idx])
	}

	/// The node currently held by the pointer.
	pub fn dragging(&self) -> Option<&SimNode> {
		match self.drag {
			DragState::Dragging(idx) => self.nodes.get(idx),
			DragState::Idle => None,
		}
	}

	/// Sum of squared velocities over all nodes.
	pub fn kinetic_energy(&self) -> f64 {
		self.nodes.iter().map(|n| n.vx * n.vx + n.vy * n.vy).sum()
	}

	/// Pin a node at `(x, y)` at rest.
	#[cfg(test)]
	pub(crate) fn place(&mut self, idx: usize, x: f64, y: f64) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.x = x;
			node.y = y;
			node.vx = 0.0;
			node.vy = 0.0;
		}
	}
}
