//! The Graph store: named Nodes connected by weighted Edges.

mod node;
pub(crate) use node::{Edge, Node};

mod neighbors;
pub use neighbors::Neighbors;

use crate::{Cost, NodeID};

/// A weighted Graph of named Nodes.
///
/// Every Node is identified by a string label. Edges are directed and carry a non-negative
/// [`Cost`]. An undirected Graph simply stores every Edge in both directions, so the
/// symmetry is established when an Edge is inserted and never recomputed on a read.
///
/// ## Examples
/// Basic usage:
/// ```
/// use best_first_search::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.connect("S", "A", 2);
/// graph.connect("A", "B", 3);
///
/// assert_eq!(graph.edge_weight("B", "A"), Some(3));
/// assert_eq!(graph.edge_weight("S", "B"), None);
/// assert_eq!(graph.neighbors("A").count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
	nodes: Vec<Node>,
	ids: hashbrown::HashMap<String, NodeID>,
	directed: bool,
}

impl Graph {
	/// Creates a new, empty, directed Graph
	pub fn new() -> Graph {
		Graph {
			nodes: Vec::new(),
			ids: hashbrown::HashMap::new(),
			directed: true,
		}
	}

	/// Creates a new, empty, undirected Graph
	pub fn undirected() -> Graph {
		Graph {
			directed: false,
			..Graph::new()
		}
	}

	/// Creates a Graph from an adjacency mapping of `source -> [(target, cost)]`.
	///
	/// Sources with an empty list of targets are still registered as Nodes. If `directed` is
	/// `false`, the reverse of every supplied Edge is added right away
	/// (see [`make_undirected`](Graph::make_undirected)).
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use best_first_search::Graph;
	/// let graph = Graph::from_adjacency(
	///     [
	///         ("S", vec![("A", 2), ("F", 1)]),
	///         ("A", vec![("B", 2)]),
	///         ("X", vec![]),
	///     ],
	///     false,
	/// );
	///
	/// assert_eq!(graph.edge_weight("F", "S"), Some(1));
	/// assert!(graph.contains("X"));
	/// assert_eq!(graph.node_count(), 5);
	/// ```
	pub fn from_adjacency<I, A, E, B>(adjacency: I, directed: bool) -> Graph
	where
		I: IntoIterator<Item = (A, E)>,
		A: AsRef<str>,
		E: IntoIterator<Item = (B, Cost)>,
		B: AsRef<str>,
	{
		let mut graph = Graph::new();
		for (source, edges) in adjacency {
			let source = graph.add_node(source.as_ref());
			for (target, cost) in edges {
				let target = graph.add_node(target.as_ref());
				graph.nodes[source as usize].set_edge(target, cost);
			}
		}
		if !directed {
			graph.make_undirected();
		}
		graph
	}

	/// `false` if every Edge is stored in both directions
	pub fn is_directed(&self) -> bool {
		self.directed
	}

	/// Registers a Node without any Edges.
	///
	/// Does nothing (and returns the existing handle) if the Node is already known.
	pub fn add_node(&mut self, name: &str) -> NodeID {
		if let Some(&id) = self.ids.get(name) {
			return id;
		}
		let id = self.nodes.len() as NodeID;
		self.nodes.push(Node::new(name.to_owned()));
		self.ids.insert(name.to_owned(), id);
		id
	}

	/// Inserts the Edge `a -> b` with the given `cost`, replacing any previous Edge `a -> b`.
	///
	/// If the Graph is undirected, the Edge `b -> a` is inserted or replaced as well.
	/// Self-loops and repeated insertions are allowed.
	pub fn connect(&mut self, a: &str, b: &str, cost: Cost) {
		let a = self.add_node(a);
		let b = self.add_node(b);
		self.nodes[a as usize].set_edge(b, cost);
		if !self.directed {
			self.nodes[b as usize].set_edge(a, cost);
		}
	}

	/// Adds the reverse `b -> a` of every Edge `a -> b` that does not have one yet, and marks the
	/// Graph as undirected.
	///
	/// Existing reverse Edges keep their own cost. Calling this a second time changes nothing.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use best_first_search::Graph;
	/// let mut graph = Graph::new();
	/// graph.connect("A", "B", 4);
	/// graph.connect("B", "C", 1);
	/// graph.connect("C", "B", 7);
	/// graph.make_undirected();
	///
	/// assert!(!graph.is_directed());
	/// assert_eq!(graph.edge_weight("B", "A"), Some(4));
	/// assert_eq!(graph.edge_weight("C", "B"), Some(7));
	/// ```
	pub fn make_undirected(&mut self) {
		for source in 0..self.nodes.len() {
			for i in 0..self.nodes[source].edges.len() {
				let Edge { target, cost } = self.nodes[source].edges[i];
				let reverse = &mut self.nodes[target as usize];
				if reverse.edge_to(source as NodeID).is_none() {
					reverse.edges.push(Edge {
						target: source as NodeID,
						cost,
					});
				}
			}
		}
		self.directed = false;
	}

	/// Returns all outgoing Edges of `name` as `(neighbor, cost)` pairs, in insertion order.
	///
	/// An unknown Node simply has no neighbors. Unlike [`add_node`](Graph::add_node), this never
	/// modifies the Graph.
	pub fn neighbors(&self, name: &str) -> Neighbors<'_> {
		let edges = match self.id_of(name) {
			Some(id) => &self.nodes[id as usize].edges[..],
			None => &[],
		};
		Neighbors::new(self, edges)
	}

	/// The cost of the Edge `a -> b`, or `None` if there is no such Edge
	pub fn edge_weight(&self, a: &str, b: &str) -> Option<Cost> {
		let a = self.id_of(a)?;
		let b = self.id_of(b)?;
		self.nodes[a as usize].edge_to(b)
	}

	/// Returns the names of all Nodes in the Graph, in the order they were registered
	pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.nodes.iter().map(|node| node.name.as_str())
	}

	/// `true` if `name` is a Node of this Graph
	pub fn contains(&self, name: &str) -> bool {
		self.ids.contains_key(name)
	}

	/// The number of Nodes in the Graph
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// The number of directed Edges in the Graph. An undirected connection counts twice.
	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|node| node.edges.len()).sum()
	}

	pub(crate) fn id_of(&self, name: &str) -> Option<NodeID> {
		self.ids.get(name).copied()
	}

	#[track_caller]
	pub(crate) fn node(&self, id: NodeID) -> &Node {
		&self.nodes[id as usize]
	}
}

impl Default for Graph {
	fn default() -> Graph {
		Graph::new()
	}
}
