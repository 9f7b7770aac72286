use crate::{Cost, NodeID};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
	pub target: NodeID,
	pub cost: Cost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
	pub name: String,
	/// outgoing Edges, in the order they were first inserted
	pub edges: Vec<Edge>,
}

impl Node {
	pub fn new(name: String) -> Node {
		Node {
			name,
			edges: Vec::new(),
		}
	}

	pub fn edge_to(&self, target: NodeID) -> Option<Cost> {
		self.edges
			.iter()
			.find(|edge| edge.target == target)
			.map(|edge| edge.cost)
	}

	/// inserts or overwrites the Edge to `target`, keeping the position of an existing Edge
	pub fn set_edge(&mut self, target: NodeID, cost: Cost) {
		match self.edges.iter_mut().find(|edge| edge.target == target) {
			Some(edge) => edge.cost = cost,
			None => self.edges.push(Edge { target, cost }),
		}
	}
}
