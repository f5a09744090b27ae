//! Simulation tuning knobs and render palette.

use super::error::GraphError;
use super::types::NodeGroup;

/// Physics and interaction constants for one simulation.
///
/// Only `damping` is correctness-critical: it must lie strictly between
/// 0 and 1 or the layout never settles.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
	/// Coulomb constant for pairwise repulsion.
	pub repulsion: f64,
	/// Separation a spring pulls its endpoints toward.
	pub spring_length: f64,
	/// Spring force per pixel of stretch.
	pub spring_stiffness: f64,
	/// Velocity multiplier per step, in (0, 1).
	pub damping: f64,
	/// Fraction of the offset from the surface centre added to velocity.
	pub center_gravity: f64,
	/// Drawn node radius.
	pub node_radius: f64,
	/// Pointer distance that still grabs a node.
	pub hit_radius: f64,
	/// Gap beyond the node radius kept from the surface edge.
	pub boundary_padding: f64,
	/// Label position relative to the node centre.
	pub label_offset: (f64, f64),
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			repulsion: 200.0,
			spring_length: 100.0,
			spring_stiffness: 0.05,
			damping: 0.9,
			center_gravity: 0.005,
			node_radius: 8.0,
			hit_radius: 20.0,
			boundary_padding: 2.0,
			label_offset: (12.0, 3.0),
		}
	}
}

impl SimulationConfig {
	/// Override the repulsion constant.
	pub fn with_repulsion(mut self, repulsion: f64) -> Self {
		self.repulsion = repulsion;
		self
	}

	/// Override both spring knobs at once.
	pub fn with_spring(self, length: f64, stiffness: f64) -> Self {
		self.with_spring_length(length).with_spring_stiffness(stiffness)
	}

	/// Override the spring rest length.
	pub fn with_spring_length(mut self, length: f64) -> Self {
		self.spring_length = length;
		self
	}

	/// Override the spring constant.
	pub fn with_spring_stiffness(mut self, stiffness: f64) -> Self {
		self.spring_stiffness = stiffness;
		self
	}

	/// Override the damping factor.
	pub fn with_damping(mut self, damping: f64) -> Self {
		self.damping = damping;
		self
	}

	/// Override the centring gain.
	pub fn with_center_gravity(mut self, gain: f64) -> Self {
		self.center_gravity = gain;
		self
	}

	/// Override the drawn radius.
	pub fn with_node_radius(mut self, radius: f64) -> Self {
		self.node_radius = radius;
		self
	}

	/// Override the pointer hit radius.
	pub fn with_hit_radius(mut self, radius: f64) -> Self {
		self.hit_radius = radius;
		self
	}

	/// Override the extra edge gap.
	pub fn with_boundary_padding(mut self, padding: f64) -> Self {
		self.boundary_padding = padding;
		self
	}

	/// Override where labels sit relative to their node.
	pub fn with_label_offset(mut self, dx: f64, dy: f64) -> Self {
		self.label_offset = (dx, dy);
		self
	}

	/// Distance kept between every node centre and the surface edge.
	pub fn margin(&self) -> f64 {
		self.node_radius + self.boundary_padding
	}

	/// Hit radius squared, for sqrt-free pointer tests.
	pub fn hit_radius_sq(&self) -> f64 {
		self.hit_radius * self.hit_radius
	}

	/// Reject knobs the physics cannot work with.
	pub fn validate(&self) -> Result<(), GraphError> {
		let invalid = |field, value| Err(GraphError::InvalidConfig { field, value });

		let knobs = [
			("repulsion", self.repulsion),
			("spring_length", self.spring_length),
			("spring_stiffness", self.spring_stiffness),
			("damping", self.damping),
			("center_gravity", self.center_gravity),
			("node_radius", self.node_radius),
			("hit_radius", self.hit_radius),
			("boundary_padding", self.boundary_padding),
			("label_offset.x", self.label_offset.0),
			("label_offset.y", self.label_offset.1),
		];
		if let Some(&(field, value)) = knobs.iter().find(|(_, v)| !v.is_finite()) {
			return invalid(field, value);
		}

		if !(self.damping > 0.0 && self.damping < 1.0) {
			return invalid("damping", self.damping);
		}
		for (field, value) in [
			("spring_length", self.spring_length),
			("node_radius", self.node_radius),
			("hit_radius", self.hit_radius),
		] {
			if value <= 0.0 {
				return invalid(field, value);
			}
		}
		for (field, value) in [
			("repulsion", self.repulsion),
			("spring_stiffness", self.spring_stiffness),
			("center_gravity", self.center_gravity),
			("boundary_padding", self.boundary_padding),
		] {
			if value < 0.0 {
				return invalid(field, value);
			}
		}
		Ok(())
	}
}

/// Colours and fonts used by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
	/// Fill for company nodes.
	pub company: &'static str,
	/// Fill for drug nodes.
	pub drug: &'static str,
	/// Fill for ingredient nodes.
	pub ingredient: &'static str,
	/// Fill for any other group.
	pub fallback: &'static str,
	/// Edge stroke colour.
	pub edge: &'static str,
	/// Edge stroke width.
	pub edge_width: f64,
	/// Ring drawn around every node.
	pub outline: &'static str,
	/// Label text colour.
	pub label: &'static str,
	/// Label CSS font.
	pub font: &'static str,
}

impl RenderStyle {
	/// Palette for the light theme.
	pub fn light() -> Self {
		Self {
			company: "#ef4444",
			drug: "#3b82f6",
			ingredient: "#10b981",
			fallback: "#64748b",
			edge: "#cbd5e1",
			edge_width: 1.0,
			outline: "#ffffff",
			label: "#1e293b",
			font: "10px Inter",
		}
	}

	/// Light palette with edges, outlines and labels for a dark background.
	pub fn dark() -> Self {
		Self {
			edge: "#475569",
			outline: "#0f172a",
			label: "#e2e8f0",
			..Self::light()
		}
	}

	/// Fill colour for a node group.
	pub fn group_color(&self, group: &NodeGroup) -> &'static str {
		match group {
			NodeGroup::Company => self.company,
			NodeGroup::Drug => self.drug,
			NodeGroup::Ingredient => self.ingredient,
			NodeGroup::Other(_) | NodeGroup::Unknown => self.fallback,
		}
	}
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config_is_valid() {
		let config = SimulationConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.margin(), 10.0);
		assert_eq!(config.hit_radius_sq(), 400.0);
	}

	#[test]
	fn test_damping_must_be_inside_unit_interval() {
		for damping in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
			let err = SimulationConfig::default()
				.with_damping(damping)
				.validate()
				.unwrap_err();
			assert!(matches!(err, GraphError::InvalidConfig { field: "damping", .. }));
		}
	}

	#[test]
	fn test_rejects_non_positive_sizes() {
		let err = SimulationConfig::default()
			.with_hit_radius(0.0)
			.validate()
			.unwrap_err();
		assert_eq!(
			err,
			GraphError::InvalidConfig {
				field: "hit_radius",
				value: 0.0
			}
		);
		assert!(
			SimulationConfig::default()
				.with_spring(-5.0, 0.05)
				.validate()
				.is_err()
		);
		assert!(
			SimulationConfig::default()
				.with_repulsion(-1.0)
				.validate()
				.is_err()
		);
	}

	#[test]
	fn test_every_knob_has_a_setter() {
		let config = SimulationConfig::default()
			.with_repulsion(150.0)
			.with_spring_length(80.0)
			.with_spring_stiffness(0.1)
			.with_damping(0.8)
			.with_center_gravity(0.01)
			.with_node_radius(6.0)
			.with_hit_radius(15.0)
			.with_boundary_padding(4.0)
			.with_label_offset(9.0, -2.0);

		assert_eq!(
			config,
			SimulationConfig {
				repulsion: 150.0,
				spring_length: 80.0,
				spring_stiffness: 0.1,
				damping: 0.8,
				center_gravity: 0.01,
				node_radius: 6.0,
				hit_radius: 15.0,
				boundary_padding: 4.0,
				label_offset: (9.0, -2.0),
			}
		);
		assert_eq!(config.margin(), 10.0);
		assert_eq!(
			SimulationConfig::default().with_spring(80.0, 0.1),
			SimulationConfig::default()
				.with_spring_length(80.0)
				.with_spring_stiffness(0.1)
		);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_negative_padding_is_rejected() {
		let err = SimulationConfig::default()
			.with_boundary_padding(-1.0)
			.validate()
			.unwrap_err();
		assert!(matches!(err, GraphError::InvalidConfig { field: "boundary_padding", .. }));
		assert!(
			SimulationConfig::default()
				.with_label_offset(f64::INFINITY, 0.0)
				.validate()
				.is_err()
		);
	}

	#[test]
	fn test_unknown_groups_use_fallback_color() {
		let style = RenderStyle::light();
		assert_eq!(style.group_color(&NodeGroup::Drug), "#3b82f6");
		assert_eq!(style.group_color(&NodeGroup::Company), "#ef4444");
		assert_eq!(style.group_color(&NodeGroup::Ingredient), "#10b981");
		assert_eq!(style.group_color(&NodeGroup::Other("x".into())), "#64748b");
		assert_eq!(style.group_color(&NodeGroup::Unknown), "#64748b");
		assert_eq!(RenderStyle::dark().drug, style.drug);
	}
}
