#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Routes between named Locations with a greedy best-first search.
//!
//! ## Introduction
//! A best-first search explores a Graph by always expanding the most promising Node it has seen
//! so far. "Promising" is decided by a Heuristic: an estimate of how far each Node is from the
//! Goal, usually something like the straight-line distance between two cities.
//!
//! The search in this crate is **greedy**: it ranks Nodes by the Heuristic alone and ignores how
//! much it already cost to get there. It finds a Route quickly, but that Route is not necessarily
//! the cheapest one. Switching the ranking to `Cost so far + Heuristic` turns the search into A*,
//! which is available through [`SearchConfig::A_STAR`].
//!
//! ## Examples
//! Building the Graph:
//! ```
//! use best_first_search::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.connect("S", "A", 2);
//! graph.connect("S", "F", 1);
//! graph.connect("A", "B", 2);
//! graph.connect("B", "G", 3);
//! graph.connect("F", "G", 3);
//!
//! // add the reverse of every Edge
//! graph.make_undirected();
//!
//! assert_eq!(graph.edge_weight("G", "B"), Some(3));
//! ```
//!
//! ### Searching
//! ```
//! # use best_first_search::prelude::*;
//! # use std::collections::HashMap;
//! # let mut graph = Graph::new();
//! # graph.connect("S", "A", 2);
//! # graph.connect("S", "F", 1);
//! # graph.connect("A", "B", 2);
//! # graph.connect("B", "G", 3);
//! # graph.connect("F", "G", 3);
//! # graph.make_undirected();
//! // estimated distance of every Location to G
//! let heuristics: HashMap<&str, usize> = [("S", 4), ("A", 2), ("F", 4), ("B", 3), ("G", 0)]
//!     .into_iter()
//!     .collect();
//!
//! // Ok(None) would mean that G is not reachable from S
//! let path = best_first_search(&graph, &heuristics, "S", "G").unwrap().unwrap();
//!
//! assert_eq!(format!("{}", path), "Path[Cost = 7]: S -> A -> B -> G");
//!
//! let steps: Vec<String> = path.iter().map(|step| step.to_string()).collect();
//! assert_eq!(steps, vec!["S: 0", "A: 2", "B: 4", "G: 7"]);
//! ```
//! Note that the cheaper Route `S -> F -> G` (Cost 4) was not found, since `A` looked closer to
//! the Goal than `F`.
//!
//! ### Configuration
//! [`best_first_search_with`] takes a [`SearchConfig`] to change the ranking, the handling of
//! Nodes that are discovered more than once, or to limit the number of expanded Nodes:
//! ```
//! # use best_first_search::prelude::*;
//! # use std::collections::HashMap;
//! # let mut graph = Graph::new();
//! # graph.connect("S", "A", 2);
//! # graph.connect("S", "F", 1);
//! # graph.connect("A", "B", 2);
//! # graph.connect("B", "G", 3);
//! # graph.connect("F", "G", 3);
//! # graph.make_undirected();
//! # let heuristics: HashMap<&str, usize> = [("S", 4), ("A", 2), ("F", 4), ("B", 3), ("G", 0)]
//! #     .into_iter()
//! #     .collect();
//! let path = best_first_search_with(&graph, &heuristics, "S", "G", &SearchConfig::A_STAR)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.cost(), 4);
//!
//! let config = SearchConfig::default().with_max_expansions(1);
//! assert_eq!(
//!     best_first_search_with(&graph, &heuristics, "S", "G", &config),
//!     Err(SearchError::ExpansionLimit { expanded: 1 })
//! );
//! ```
//!
//! ## Logging
//! The crate reports the progress of every search through the [log](https://docs.rs/log)
//! facade: `debug` for the start and outcome of a search, `trace` for every expanded and
//! discovered Node. Install any logger (for example `env_logger`) to see them.

/// The Type used for Edge weights, accumulated Costs and Heuristic estimates
pub type Cost = usize;

mod node_id;
pub use self::node_id::{NodeID, NodeIDHasher, NodeIDMap, NodeIDSet};

mod graph;
pub use self::graph::{Graph, Neighbors};

mod heuristic;
pub use self::heuristic::Heuristic;

mod path;
pub use self::path::{Path, Step};

mod error;
pub use self::error::SearchError;

mod search;
pub use self::search::{
	best_first_search, best_first_search_with, search_many, DuplicatePolicy, Ranking,
	SearchConfig,
};

/// The most commonly used items, for glob imports
pub mod prelude {
	pub use crate::{
		best_first_search, best_first_search_with, search_many, Cost, Graph, Heuristic, Path,
		SearchConfig, SearchError, Step,
	};
}
