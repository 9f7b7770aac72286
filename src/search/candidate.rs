use crate::{Cost, NodeID};

/// Index of a [`Candidate`] in the search arena
pub(crate) type CandidateKey = usize;

/// One visit to a Node during a search.
///
/// Two candidates are equal if they visit the same Node, regardless of their costs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
	pub node: NodeID,
	pub parent: Option<CandidateKey>,
	/// accumulated Cost from the start
	pub g: Cost,
	/// estimated Cost to the Goal
	pub h: Cost,
	/// rank on the frontier, lower is better
	pub f: Cost,
}

impl Candidate {
	pub fn start(node: NodeID, h: Cost) -> Candidate {
		Candidate {
			node,
			parent: None,
			g: 0,
			h,
			f: h,
		}
	}
}

impl PartialEq for Candidate {
	fn eq(&self, rhs: &Candidate) -> bool {
		self.node == rhs.node
	}
}
impl Eq for Candidate {}

/// Owns every Candidate created during one search, so that parent links stay valid after the
/// open and closed collections are gone.
#[derive(Debug, Default)]
pub(crate) struct Arena {
	candidates: slab::Slab<Candidate>,
}

impl Arena {
	pub fn insert(&mut self, candidate: Candidate) -> CandidateKey {
		self.candidates.insert(candidate)
	}

	pub fn len(&self) -> usize {
		self.candidates.len()
	}

	/// Follows the parent links from `key` back to the start and returns `(node, g)` for
	/// every candidate on the way, beginning with the start.
	pub fn trace_back(&self, key: CandidateKey) -> Vec<(NodeID, Cost)> {
		let mut steps = vec![];
		let mut current = Some(key);
		while let Some(key) = current {
			let candidate = &self[key];
			steps.push((candidate.node, candidate.g));
			current = candidate.parent;
		}
		steps.reverse();
		steps
	}
}

use std::ops::Index;
impl Index<CandidateKey> for Arena {
	type Output = Candidate;
	#[track_caller]
	fn index(&self, key: CandidateKey) -> &Candidate {
		&self.candidates[key]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn equality_ignores_costs() {
		let a = Candidate::start(4, 10);
		let b = Candidate {
			node: 4,
			parent: Some(0),
			g: 7,
			h: 1,
			f: 8,
		};
		assert_eq!(a, b);
		assert_ne!(a, Candidate::start(5, 10));
	}

	#[test]
	fn trace_back() {
		let mut arena = Arena::default();
		let start = arena.insert(Candidate::start(0, 4));
		let middle = arena.insert(Candidate {
			node: 1,
			parent: Some(start),
			g: 2,
			h: 2,
			f: 2,
		});
		let _sibling = arena.insert(Candidate {
			node: 3,
			parent: Some(start),
			g: 1,
			h: 4,
			f: 4,
		});
		let end = arena.insert(Candidate {
			node: 2,
			parent: Some(middle),
			g: 5,
			h: 0,
			f: 0,
		});

		assert_eq!(arena.len(), 4);
		assert_eq!(arena.trace_back(end), vec![(0, 0), (1, 2), (2, 5)]);
		assert_eq!(arena.trace_back(start), vec![(0, 0)]);
	}
}
