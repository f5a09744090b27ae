use super::config::RenderStyle;
use super::state::Simulation;

/// A 2D drawing target. The canvas implements it; tests record into it.
pub trait Surface {
	/// Wipe the whole surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Stroke every segment as one path.
	fn stroke_segments(&mut self, segments: &[((f64, f64), (f64, f64))], color: &str, width: f64);
	/// Filled circle with a thin outline.
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, fill: &str, outline: &str);
	/// Draw `text` with its baseline starting at `at`.
	fn fill_text(&mut self, text: &str, at: (f64, f64), color: &str, font: &str);
}

/// Draw the current state: edges, then nodes, then labels on top of each node.
pub fn render<S: Surface + ?Sized>(sim: &Simulation, surface: &mut S, style: &RenderStyle) {
	surface.clear(sim.width(), sim.height());

	let nodes = sim.nodes();
	let segments: Vec<_> = sim
		.edges()
		.iter()
		.map(|edge| {
			let (a, b) = (&nodes[edge.source], &nodes[edge.target]);
			((a.x, a.y), (b.x, b.y))
		})
		.collect();
	if !segments.is_empty() {
		surface.stroke_segments(&segments, style.edge, style.edge_width);
	}

	let config = sim.config();
	let (off_x, off_y) = config.label_offset;
	for node in nodes {
		surface.fill_circle(
			(node.x, node.y),
			config.node_radius,
			style.group_color(&node.group),
			style.outline,
		);
		surface.fill_text(&node.label, (node.x + off_x, node.y + off_y), style.label, style.font);
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::force_graph::config::SimulationConfig;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	#[derive(Debug, Clone, PartialEq)]
	pub enum Draw {
		Clear(f64, f64),
		Segments(usize, String),
		Circle((f64, f64), String),
		Text(String, (f64, f64)),
	}

	/// Records every call so tests can inspect draw order.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub calls: Vec<Draw>,
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64) {
			self.calls.push(Draw::Clear(width, height));
		}

		fn stroke_segments(&mut self, segments: &[((f64, f64), (f64, f64))], color: &str, _: f64) {
			self.calls.push(Draw::Segments(segments.len(), color.to_string()));
		}

		fn fill_circle(&mut self, center: (f64, f64), _: f64, fill: &str, _: &str) {
			self.calls.push(Draw::Circle(center, fill.to_string()));
		}

		fn fill_text(&mut self, text: &str, at: (f64, f64), _: &str, _: &str) {
			self.calls.push(Draw::Text(text.to_string(), at));
		}
	}

	fn sample() -> Simulation {
		let mut s = Simulation::with_seed(SimulationConfig::default(), 400.0, 300.0, 2).unwrap();
		s.set_data(
			&[
				GraphNode::new("d", "Aspirin", "drug"),
				GraphNode::new("c", "Bayer", "company"),
				GraphNode::new("x", "Mystery", "device"),
			],
			&[GraphLink::new("d", "c"), GraphLink::new("d", "x")],
		);
		s.place(0, 50.0, 60.0);
		s
	}

	#[test]
	fn test_render_order_and_colors() {
		let s = sample();
		let mut surface = RecordingSurface::default();
		render(&s, &mut surface, &RenderStyle::light());

		assert_eq!(surface.calls[0], Draw::Clear(400.0, 300.0));
		assert_eq!(surface.calls[1], Draw::Segments(2, "#cbd5e1".into()));
		assert_eq!(surface.calls[2], Draw::Circle((50.0, 60.0), "#3b82f6".into()));
		assert_eq!(surface.calls[3], Draw::Text("Aspirin".into(), (62.0, 63.0)));
		assert!(matches!(&surface.calls[4], Draw::Circle(_, c) if c == "#ef4444"));
		assert!(matches!(&surface.calls[6], Draw::Circle(_, c) if c == "#64748b"));
		assert_eq!(surface.calls.len(), 8);
	}

	#[test]
	fn test_render_skips_empty_edge_path() {
		let mut s = Simulation::with_seed(SimulationConfig::default(), 100.0, 100.0, 2).unwrap();
		s.set_data(&[GraphNode::new("a", "A", "drug")], &[]);
		let mut surface = RecordingSurface::default();
		render(&s, &mut surface, &RenderStyle::dark());

		assert!(!surface.calls.iter().any(|c| matches!(c, Draw::Segments(..))));
		assert_eq!(surface.calls.len(), 3);
	}

	#[test]
	fn test_render_does_not_touch_state() {
		let s = sample();
		let before = s.nodes().to_vec();
		render(&s, &mut RecordingSurface::default(), &RenderStyle::light());
		assert_eq!(s.nodes(), &before[..]);
	}
}
