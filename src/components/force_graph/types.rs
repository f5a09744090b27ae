//! Input records handed to the graph by the host application.

use std::collections::BTreeMap;

/// Category of a catalog entity. Only affects the colour a node is drawn in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeGroup {
	/// A manufacturer.
	Company,
	/// A marketed drug.
	Drug,
	/// An active ingredient.
	Ingredient,
	/// Anything else, kept verbatim.
	Other(String),
	/// No group given.
	#[default]
	Unknown,
}

impl NodeGroup {
	/// The tag as the catalog spells it.
	pub fn as_str(&self) -> &str {
		match self {
			NodeGroup::Company => "company",
			NodeGroup::Drug => "drug",
			NodeGroup::Ingredient => "ingredient",
			NodeGroup::Other(tag) => tag,
			NodeGroup::Unknown => "",
		}
	}
}

impl From<&str> for NodeGroup {
	fn from(tag: &str) -> Self {
		match tag {
			"company" => NodeGroup::Company,
			"drug" => NodeGroup::Drug,
			"ingredient" => NodeGroup::Ingredient,
			"" => NodeGroup::Unknown,
			other => NodeGroup::Other(other.to_string()),
		}
	}
}

/// A node as supplied by the host. `extra` rides along untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphNode {
	/// Unique within one data set.
	pub id: String,
	/// Display text.
	pub label: String,
	/// Colour category.
	pub group: NodeGroup,
	/// Anything else the host wants carried along.
	pub extra: BTreeMap<String, String>,
}

impl GraphNode {
	/// A node with no extra fields.
	pub fn new(id: impl Into<String>, label: impl Into<String>, group: impl Into<NodeGroup>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			group: group.into(),
			extra: BTreeMap::new(),
		}
	}

	/// Attach a pass-through field.
	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}
}

/// An edge between two node ids. Endpoints are resolved when loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// Id of the source node.
	pub source: String,
	/// Id of the target node.
	pub target: String,
}

impl GraphLink {
	/// A link from `source` to `target`.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// A full snapshot of nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes in draw and hit-test order.
	pub nodes: Vec<GraphNode>,
	/// Links between node ids.
	pub links: Vec<GraphLink>,
}
