//! Pointer handling: hit-testing and dragging a single node.

use log::debug;

use super::state::Simulation;

/// Whether the pointer is currently holding a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
	/// Nothing held.
	#[default]
	Idle,
	/// Index of the held node.
	Dragging(usize),
}

impl Simulation {
	/// First node (in load order) whose centre is within the hit radius.
	///
	/// Coordinates are surface pixels; there is no zoom to undo.
	pub fn node_at(&self, x: f64, y: f64) -> Option<usize> {
		let limit = self.config.hit_radius_sq();
		self.nodes.iter().position(|node| {
			let (dx, dy) = (node.x - x, node.y - y);
			dx * dx + dy * dy < limit
		})
	}

	/// Start dragging whatever is under the pointer. Ignored mid-drag.
	pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<usize> {
		if let DragState::Dragging(idx) = self.drag {
			return Some(idx);
		}
		let idx = self.node_at(x, y)?;
		self.drag = DragState::Dragging(idx);
		let node = &mut self.nodes[idx];
		node.vx = 0.0;
		node.vy = 0.0;
		debug!("drag start: {}", node.id);
		Some(idx)
	}

	/// Move the held node to the pointer. No-op while idle.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		let DragState::Dragging(idx) = self.drag else {
			return;
		};
		if let Some(node) = self.nodes.get_mut(idx) {
			node.x = x;
			node.y = y;
			node.vx = 0.0;
			node.vy = 0.0;
		}
	}

	/// Release the held node, wherever the pointer is.
	pub fn pointer_up(&mut self) {
		if let DragState::Dragging(idx) = std::mem::take(&mut self.drag) {
			if let Some(node) = self.nodes.get(idx) {
				debug!("drag end: {}", node.id);
			}
		}
	}

	/// Current pointer state.
	pub fn drag_state(&self) -> DragState {
		self.drag
	}
}
