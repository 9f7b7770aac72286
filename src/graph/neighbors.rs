use super::{Edge, Graph};
use crate::Cost;

/// An Iterator over the outgoing Edges of a Node as `(neighbor, cost)` pairs.
///
/// Created by [`Graph::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
	graph: &'a Graph,
	edges: std::slice::Iter<'a, Edge>,
}

impl<'a> Neighbors<'a> {
	pub(super) fn new(graph: &'a Graph, edges: &'a [Edge]) -> Neighbors<'a> {
		Neighbors {
			graph,
			edges: edges.iter(),
		}
	}
}

impl<'a> Iterator for Neighbors<'a> {
	type Item = (&'a str, Cost);
	fn next(&mut self) -> Option<Self::Item> {
		let graph = self.graph;
		self.edges
			.next()
			.map(|edge| (graph.node(edge.target).name.as_str(), edge.cost))
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.edges.size_hint()
	}
}

impl ExactSizeIterator for Neighbors<'_> {}
impl std::iter::FusedIterator for Neighbors<'_> {}
