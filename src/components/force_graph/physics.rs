//! One integration step of the layout.
//!
//! Forces go straight into velocity (unit mass, unit time step):
//! pairwise repulsion, edge springs, then centre pull and damping,
//! integration and a hard clamp to the surface. The dragged node sits out
//! everything after the forces and has its velocity zeroed instead.

use super::interaction::DragState;
use super::state::{SimNode, Simulation};

/// Distances below this are treated as coincident.
const MIN_DISTANCE: f64 = 1e-9;

/// Separation between two points, floored to 1 when they coincide.
fn separation(dx: f64, dy: f64) -> f64 {
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < MIN_DISTANCE { 1.0 } else { dist }
}

/// Repulsive push on `a` away from `b`. `b` gets the negation.
pub fn repulsion(a: &SimNode, b: &SimNode, strength: f64) -> (f64, f64) {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	let dist = separation(dx, dy);
	let force = strength / (dist * dist);
	(dx / dist * force, dy / dist * force)
}

/// Spring pull on `source` toward `target`. `target` gets the negation.
///
/// Positive when the edge is stretched past `length`, negative when
/// compressed.
pub fn spring(source: &SimNode, target: &SimNode, length: f64, stiffness: f64) -> (f64, f64) {
	let (dx, dy) = (target.x - source.x, target.y - source.y);
	let dist = separation(dx, dy);
	let force = (dist - length) * stiffness;
	(dx / dist * force, dy / dist * force)
}

impl Simulation {
	/// Advance the layout by one frame.
	pub fn step(&mut self) {
		self.apply_repulsion();
		self.apply_springs();
		self.integrate();
	}

	fn apply_repulsion(&mut self) {
		let strength = self.config.repulsion;
		let n = self.nodes.len();
		for i in 0..n {
			for j in (i + 1)..n {
				let (fx, fy) = repulsion(&self.nodes[i], &self.nodes[j], strength);
				push(&mut self.nodes[i], fx, fy);
				push(&mut self.nodes[j], -fx, -fy);
			}
		}
	}

	fn apply_springs(&mut self) {
		let (length, stiffness) = (self.config.spring_length, self.config.spring_stiffness);
		for edge in &self.edges {
			let (fx, fy) = spring(
				&self.nodes[edge.source],
				&self.nodes[edge.target],
				length,
				stiffness,
			);
			push(&mut self.nodes[edge.source], fx, fy);
			push(&mut self.nodes[edge.target], -fx, -fy);
		}
	}

	fn integrate(&mut self) {
		let (cx, cy) = (self.width() / 2.0, self.height() / 2.0);
		let margin = self.config.margin();
		let (max_x, max_y) = (
			(self.width() - margin).max(margin),
			(self.height() - margin).max(margin),
		);
		let (gravity, damping) = (self.config.center_gravity, self.config.damping);
		let held = match self.drag {
			DragState::Dragging(idx) => Some(idx),
			DragState::Idle => None,
		};

		for (idx, node) in self.nodes.iter_mut().enumerate() {
			if held == Some(idx) {
				node.vx = 0.0;
				node.vy = 0.0;
				continue;
			}

			node.vx += (cx - node.x) * gravity;
			node.vy += (cy - node.y) * gravity;
			node.vx *= damping;
			node.vy *= damping;

			node.x = (node.x + node.vx).clamp(margin, max_x);
			node.y = (node.y + node.vy).clamp(margin, max_y);
		}
	}
}

fn push(node: &mut SimNode, fx: f64, fy: f64) {
	node.vx += fx;
	node.vy += fy;
}
