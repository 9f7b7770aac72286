//! Handles for interned Node names and some utilities for working with them

use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference an interned Node in a [`Graph`](crate::Graph)
pub type NodeID = u32;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildHasherDefault<NodeIDHasher>>;

/// A [`Hasher`] specialized on NodeIDs
///
/// The hash of a NodeID is the NodeID itself, which keeps iteration order independent of any
/// random state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
	/// panics, since only NodeIDs are supposed to be used
	fn write(&mut self, _: &[u8]) {
		unreachable!("This Hasher only works with NodeIDs")
	}
	/// Writes a single NodeID into this hasher.
	fn write_u32(&mut self, id: NodeID) {
		self.0 = id as u64
	}
	fn finish(&self) -> u64 {
		self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_membership() {
		let mut set = NodeIDSet::default();
		assert!(set.insert(3));
		assert!(!set.insert(3));
		assert!(set.contains(&3));
		assert!(!set.contains(&4));
	}

	#[test]
	fn map_overwrite() {
		let mut map = NodeIDMap::default();
		map.insert(7, "a");
		map.insert(7, "b");
		assert_eq!(map.len(), 1);
		assert_eq!(map[&7], "b");
	}
}
