//! Catalog records and how they become graph nodes and links.

use crate::components::force_graph::{GraphData, GraphLink, GraphNode, NodeGroup};

/// A marketed product.
#[derive(Clone, Debug, PartialEq)]
pub struct Drug {
	/// Catalog id, unique among drugs.
	pub id: String,
	/// Brand name.
	pub name: String,
	/// Dosage form, e.g. "Tablet".
	pub form: Option<String>,
	/// Manufacturer.
	pub company_id: String,
	/// Active ingredients.
	pub ingredient_ids: Vec<String>,
}

/// A manufacturer.
#[derive(Clone, Debug, PartialEq)]
pub struct Company {
	/// Catalog id, unique among companies.
	pub id: String,
	/// Display name.
	pub name: String,
}

/// An active ingredient.
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
	/// Catalog id, unique among ingredients.
	pub id: String,
	/// Display name.
	pub name: String,
}

/// Everything the browser knows about.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
	/// All drugs.
	pub drugs: Vec<Drug>,
	/// All companies.
	pub companies: Vec<Company>,
	/// All active ingredients.
	pub ingredients: Vec<Ingredient>,
}

fn node_id(group: &NodeGroup, id: &str) -> String {
	format!("{}:{id}", group.as_str())
}

impl Catalog {
	/// One node per record, plus drug -> company and drug -> ingredient links.
	///
	/// Ids are prefixed with their group so a drug and a company sharing a
	/// raw id stay distinct. References to records that are not in the
	/// catalog still produce a link; the graph drops it on load.
	pub fn relationship_graph(&self) -> GraphData {
		let mut nodes = Vec::with_capacity(
			self.drugs.len() + self.companies.len() + self.ingredients.len(),
		);
		let mut links = Vec::new();

		for company in &self.companies {
			nodes.push(GraphNode::new(
				node_id(&NodeGroup::Company, &company.id),
				company.name.clone(),
				NodeGroup::Company,
			));
		}
		for ingredient in &self.ingredients {
			nodes.push(GraphNode::new(
				node_id(&NodeGroup::Ingredient, &ingredient.id),
				ingredient.name.clone(),
				NodeGroup::Ingredient,
			));
		}
		for drug in &self.drugs {
			let id = node_id(&NodeGroup::Drug, &drug.id);
			let mut node = GraphNode::new(id.clone(), drug.name.clone(), NodeGroup::Drug);
			if let Some(form) = &drug.form {
				node = node.with_extra("form", form.clone());
			}
			nodes.push(node);

			links.push(GraphLink::new(
				id.clone(),
				node_id(&NodeGroup::Company, &drug.company_id),
			));
			for ingredient in &drug.ingredient_ids {
				links.push(GraphLink::new(
					id.clone(),
					node_id(&NodeGroup::Ingredient, ingredient),
				));
			}
		}

		GraphData { nodes, links }
	}

	/// Built-in sample used by the home page.
	pub fn sample() -> Self {
		let company = |id: &str, name: &str| Company {
			id: id.into(),
			name: name.into(),
		};
		let ingredient = |id: &str, name: &str| Ingredient {
			id: id.into(),
			name: name.into(),
		};
		let drug = |id: &str, name: &str, form: &str, company_id: &str, ingredients: &[&str]| Drug {
			id: id.into(),
			name: name.into(),
			form: Some(form.into()),
			company_id: company_id.into(),
			ingredient_ids: ingredients.iter().map(|i| i.to_string()).collect(),
		};

		Self {
			companies: vec![
				company("c1", "Bayer"),
				company("c2", "Pfizer"),
				company("c3", "Abdi Ibrahim"),
				company("c4", "Novartis"),
			],
			ingredients: vec![
				ingredient("i1", "Acetylsalicylic acid"),
				ingredient("i2", "Paracetamol"),
				ingredient("i3", "Ibuprofen"),
				ingredient("i4", "Caffeine"),
				ingredient("i5", "Amoxicillin"),
				ingredient("i6", "Clavulanic acid"),
				ingredient("i7", "Diclofenac"),
			],
			drugs: vec![
				drug("d1", "Aspirin", "Tablet", "c1", &["i1"]),
				drug("d2", "Aspirin Plus C", "Effervescent tablet", "c1", &["i1", "i4"]),
				drug("d3", "Advil", "Capsule", "c2", &["i3"]),
				drug("d4", "Parol", "Tablet", "c3", &["i2"]),
				drug("d5", "Parol Cold", "Tablet", "c3", &["i2", "i4"]),
				drug("d6", "Augmentin", "Suspension", "c3", &["i5", "i6"]),
				drug("d7", "Voltaren", "Gel", "c4", &["i7"]),
				drug("d8", "Cataflam", "Tablet", "c4", &["i7"]),
			],
		}
	}
}
