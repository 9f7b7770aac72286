//! Estimates of the remaining distance to a Goal

use crate::Cost;

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

/// A table of estimates for how far each Node is from the Goal of a search.
///
/// The estimates rank the frontier of [`best_first_search`](crate::best_first_search).
/// They do not need to be admissible for the search to terminate, but better estimates
/// lead to shorter Routes and fewer expanded Nodes.
///
/// Implemented for the common map types keyed by anything that borrows as `str`:
/// ```
/// use best_first_search::Heuristic;
/// use std::collections::HashMap;
///
/// let heuristics: HashMap<&str, usize> = [("S", 4), ("G", 0)].into_iter().collect();
///
/// assert_eq!(heuristics.estimate("S"), Some(4));
/// assert_eq!(heuristics.estimate("X"), None);
/// ```
pub trait Heuristic {
	/// The estimated Cost from `node` to the Goal, or `None` if the table has no entry for it.
	fn estimate(&self, node: &str) -> Option<Cost>;
}

impl<T: Heuristic + ?Sized> Heuristic for &T {
	fn estimate(&self, node: &str) -> Option<Cost> {
		(**self).estimate(node)
	}
}

impl<K, S> Heuristic for std::collections::HashMap<K, Cost, S>
where
	K: Borrow<str> + Hash + Eq,
	S: BuildHasher,
{
	fn estimate(&self, node: &str) -> Option<Cost> {
		self.get(node).copied()
	}
}

impl<K, S> Heuristic for hashbrown::HashMap<K, Cost, S>
where
	K: Borrow<str> + Hash + Eq,
	S: BuildHasher,
{
	fn estimate(&self, node: &str) -> Option<Cost> {
		self.get(node).copied()
	}
}

impl<K> Heuristic for BTreeMap<K, Cost>
where
	K: Borrow<str> + Ord,
{
	fn estimate(&self, node: &str) -> Option<Cost> {
		self.get(node).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn owned_keys() {
		let mut table = hashbrown::HashMap::new();
		table.insert("A".to_owned(), 3);

		assert_eq!(table.estimate("A"), Some(3));
		assert_eq!((&table).estimate("B"), None);
	}

	#[test]
	fn btree() {
		let table: BTreeMap<String, Cost> = [("J".to_owned(), 1)].into_iter().collect();
		assert_eq!(table.estimate("J"), Some(1));
	}
}
