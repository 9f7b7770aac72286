//! The greedy best-first search engine.

mod candidate;
use self::candidate::{Arena, Candidate, CandidateKey};

mod config;
pub use self::config::{DuplicatePolicy, Ranking, SearchConfig};

use crate::{Cost, Graph, Heuristic, NodeIDSet, Path, SearchError, Step};

use log::{debug, trace};

/// Searches `graph` for a Route from `start` to `goal` using a greedy best-first search.
///
/// The search always expands the discovered Node with the lowest estimate in `heuristics`,
/// ignoring how expensive it was to get there. This makes it fast, but the resulting Route is
/// not necessarily the cheapest one. Use [`best_first_search_with`] and
/// [`SearchConfig::A_STAR`] for cheapest Routes.
///
/// ## Examples
/// Basic usage:
/// ```
/// use best_first_search::{best_first_search, Graph};
/// use std::collections::HashMap;
///
/// //     2     3
/// // S ---- A ---- G
/// //  \           /
/// //   1--- B ---1
/// let mut graph = Graph::undirected();
/// graph.connect("S", "A", 2);
/// graph.connect("A", "G", 3);
/// graph.connect("S", "B", 1);
/// graph.connect("B", "G", 1);
///
/// let heuristics: HashMap<&str, usize> = [("S", 3), ("A", 1), ("B", 2), ("G", 0)]
///     .into_iter()
///     .collect();
///
/// let path = best_first_search(&graph, &heuristics, "S", "G").unwrap();
///
/// // the greedy choice of A leads to a Route of Cost 5, although S -> B -> G only costs 2
/// let path = path.unwrap();
/// assert_eq!(path.nodes().collect::<Vec<_>>(), vec!["S", "A", "G"]);
/// assert_eq!(path.cost(), 5);
/// ```
///
/// If the Goal cannot be reached, `Ok(None)` is returned:
/// ```
/// # use best_first_search::{best_first_search, Graph};
/// # use std::collections::HashMap;
/// let mut graph = Graph::undirected();
/// graph.connect("S", "A", 2);
/// graph.add_node("island");
///
/// let heuristics: HashMap<&str, usize> = [("S", 3), ("A", 1), ("island", 0)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(best_first_search(&graph, &heuristics, "S", "island"), Ok(None));
/// ```
///
/// ## Errors
/// - [`SearchError::MissingHeuristic`] if `heuristics` has no estimate for a start that is part of
///   the Graph, or for a Node that is discovered during the search. A start that is not part of
///   the Graph is never looked up.
/// - [`SearchError::CostOverflow`] if the accumulated Cost of a discovered Node does not fit into
///   a [`Cost`]
pub fn best_first_search<H: Heuristic + ?Sized>(
	graph: &Graph,
	heuristics: &H,
	start: &str,
	goal: &str,
) -> Result<Option<Path>, SearchError> {
	best_first_search_with(graph, heuristics, start, goal, &SearchConfig::default())
}

/// Same as [`best_first_search`], but with the ranking, duplicate handling and expansion limit
/// taken from `config`.
///
/// ## Examples
/// Finding the cheapest Route with A*:
/// ```
/// # use best_first_search::{best_first_search_with, Graph, SearchConfig};
/// # use std::collections::HashMap;
/// # let mut graph = Graph::undirected();
/// # graph.connect("S", "A", 2);
/// # graph.connect("A", "G", 3);
/// # graph.connect("S", "B", 1);
/// # graph.connect("B", "G", 1);
/// # let heuristics: HashMap<&str, usize> = [("S", 3), ("A", 1), ("B", 2), ("G", 0)]
/// #     .into_iter()
/// #     .collect();
/// let path = best_first_search_with(&graph, &heuristics, "S", "G", &SearchConfig::A_STAR)
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(path.nodes().collect::<Vec<_>>(), vec!["S", "B", "G"]);
/// assert_eq!(path.cost(), 2);
/// ```
///
/// ## Errors
/// - [`SearchError::MissingHeuristic`] and [`SearchError::CostOverflow`] as in
///   [`best_first_search`], the latter also if `g + h` overflows with [`Ranking::AStar`]
/// - [`SearchError::ExpansionLimit`] if `config.max_expansions` Nodes were expanded without
///   reaching the Goal
pub fn best_first_search_with<H: Heuristic + ?Sized>(
	graph: &Graph,
	heuristics: &H,
	start: &str,
	goal: &str,
	config: &SearchConfig,
) -> Result<Option<Path>, SearchError> {
	debug!("searching Route {} -> {} ({:?})", start, goal, config.ranking);

	let estimate = |node: &str| {
		heuristics
			.estimate(node)
			.ok_or_else(|| SearchError::MissingHeuristic(node.to_owned()))
	};

	let start_id = match graph.id_of(start) {
		Some(id) => id,
		None if start == goal => return Ok(Some(Path::new(vec![Step::new(start, 0)]))),
		None => {
			debug!("{} is not part of the Graph", start);
			return Ok(None);
		}
	};
	let start_h = estimate(start)?;
	let goal_id = graph.id_of(goal);

	let mut arena = Arena::default();
	let mut open: Vec<CandidateKey> = vec![arena.insert(Candidate::start(start_id, start_h))];
	let mut closed = NodeIDSet::default();
	let mut expanded = 0;

	while let Some(index) = select(&open, &arena) {
		let current_key = open.remove(index);
		let current = arena[current_key];
		closed.insert(current.node);

		if Some(current.node) == goal_id {
			let steps = arena
				.trace_back(current_key)
				.into_iter()
				.map(|(id, g)| Step::new(graph.node(id).name.as_str(), g))
				.collect();
			let path = Path::new(steps);
			debug!(
				"found {} after expanding {} nodes ({} candidates)",
				path,
				expanded,
				arena.len()
			);
			return Ok(Some(path));
		}

		if config.max_expansions.is_some_and(|max| expanded >= max) {
			debug!("giving up on {} -> {} after {} expansions", start, goal, expanded);
			return Err(SearchError::ExpansionLimit { expanded });
		}
		expanded += 1;

		let node = graph.node(current.node);
		trace!("expanding {} (g = {}, f = {})", node.name, current.g, current.f);

		for edge in node.edges.iter() {
			if closed.contains(&edge.target) {
				continue;
			}
			let name = graph.node(edge.target).name.as_str();
			let overflow = || SearchError::CostOverflow(name.to_owned());
			let g = current.g.checked_add(edge.cost).ok_or_else(overflow)?;
			let h = estimate(name)?;
			let f = rank(config.ranking, g, h).ok_or_else(overflow)?;
			let neighbor = Candidate {
				node: edge.target,
				parent: Some(current_key),
				g,
				h,
				f,
			};

			if config.duplicates == DuplicatePolicy::Replace {
				if open
					.iter()
					.any(|&key| arena[key] == neighbor && arena[key].f <= neighbor.f)
				{
					continue;
				}
				open.retain(|&key| arena[key] != neighbor);
			}

			trace!("  discovered {} (g = {}, f = {})", name, g, neighbor.f);
			open.push(arena.insert(neighbor));
		}
	}

	debug!(
		"no Route {} -> {} after expanding {} nodes",
		start, goal, expanded
	);
	Ok(None)
}

/// Runs one independent search from each of `starts` to `goal`.
///
/// All searches share the read-only `graph` and `heuristics`, but each one uses its own
/// frontier. With the `parallel` feature (enabled by default) the searches run on the
/// [rayon](https://docs.rs/rayon) thread pool.
///
/// The results are in the same order as `starts`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use best_first_search::{search_many, Graph, SearchConfig};
/// # use std::collections::HashMap;
/// let mut graph = Graph::undirected();
/// graph.connect("A", "B", 1);
/// graph.connect("B", "G", 2);
/// graph.add_node("X");
///
/// let heuristics: HashMap<&str, usize> = [("A", 2), ("B", 1), ("G", 0), ("X", 9)]
///     .into_iter()
///     .collect();
///
/// let results = search_many(&graph, &heuristics, &["A", "X"], "G", &SearchConfig::default());
///
/// assert_eq!(results[0].as_ref().unwrap().as_ref().unwrap().cost(), 3);
/// assert_eq!(results[1], Ok(None));
/// ```
pub fn search_many<H, S>(
	graph: &Graph,
	heuristics: &H,
	starts: &[S],
	goal: &str,
	config: &SearchConfig,
) -> Vec<Result<Option<Path>, SearchError>>
where
	H: Heuristic + Sync + ?Sized,
	S: AsRef<str> + Sync,
{
	#[cfg(feature = "parallel")]
	{
		use rayon::prelude::*;
		starts
			.par_iter()
			.map(|start| best_first_search_with(graph, heuristics, start.as_ref(), goal, config))
			.collect()
	}

	#[cfg(not(feature = "parallel"))]
	{
		starts
			.iter()
			.map(|start| best_first_search_with(graph, heuristics, start.as_ref(), goal, config))
			.collect()
	}
}

/// `None` if the rank does not fit into a [`Cost`]
fn rank(ranking: Ranking, g: Cost, h: Cost) -> Option<Cost> {
	match ranking {
		Ranking::Greedy => Some(h),
		Ranking::AStar => g.checked_add(h),
	}
}

/// position of the first candidate with the lowest rank
fn select(open: &[CandidateKey], arena: &Arena) -> Option<usize> {
	open.iter()
		.enumerate()
		.min_by_key(|&(_, &key)| arena[key].f)
		.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn table<'a>(entries: &[(&'a str, Cost)]) -> HashMap<&'a str, Cost> {
		entries.iter().copied().collect()
	}

	fn nodes(path: &Path) -> Vec<&str> {
		path.nodes().collect()
	}

	#[test]
	fn select_prefers_first_of_equals() {
		let mut arena = Arena::default();
		let open = [(0, 5), (1, 2), (2, 7), (3, 2)]
			.iter()
			.map(|&(node, h)| arena.insert(Candidate::start(node, h)))
			.collect::<Vec<_>>();

		assert_eq!(select(&open, &arena), Some(1));
		assert_eq!(select(&[], &arena), None);
	}

	#[test]
	fn greedy_ignores_accumulated_cost() {
		let mut graph = Graph::new();
		graph.connect("S", "A", 10);
		graph.connect("S", "B", 1);
		graph.connect("A", "G", 10);
		graph.connect("B", "G", 1);
		let heuristics = table(&[("S", 5), ("A", 1), ("B", 2), ("G", 0)]);

		let path = best_first_search(&graph, &heuristics, "S", "G")
			.unwrap()
			.unwrap();
		assert_eq!(nodes(&path), vec!["S", "A", "G"]);
		assert_eq!(path.cost(), 20);

		let path = best_first_search_with(&graph, &heuristics, "S", "G", &SearchConfig::A_STAR)
			.unwrap()
			.unwrap();
		assert_eq!(nodes(&path), vec!["S", "B", "G"]);
		assert_eq!(path.cost(), 2);
	}

	#[test]
	fn ties_go_to_first_discovered() {
		let mut graph = Graph::new();
		graph.connect("S", "A", 1);
		graph.connect("S", "B", 1);
		graph.connect("A", "G", 5);
		graph.connect("B", "G", 1);
		let heuristics = table(&[("S", 2), ("A", 1), ("B", 1), ("G", 0)]);

		let path = best_first_search(&graph, &heuristics, "S", "G")
			.unwrap()
			.unwrap();
		assert_eq!(nodes(&path), vec!["S", "A", "G"]);
	}

	#[test]
	fn start_is_goal() {
		let mut graph = Graph::new();
		graph.connect("S", "A", 1);
		let heuristics = table(&[("S", 0), ("A", 1)]);

		let path = best_first_search(&graph, &heuristics, "S", "S")
			.unwrap()
			.unwrap();
		assert_eq!(path.into_steps(), vec![Step::new("S", 0)]);

		let heuristics = table(&[("nowhere", 0)]);
		let path = best_first_search(&graph, &heuristics, "nowhere", "nowhere")
			.unwrap()
			.unwrap();
		assert_eq!(nodes(&path), vec!["nowhere"]);
	}

	#[test]
	fn unknown_start_or_goal() {
		let mut graph = Graph::undirected();
		graph.connect("S", "A", 1);
		let heuristics = table(&[("S", 1), ("A", 1), ("X", 0)]);

		assert_eq!(best_first_search(&graph, &heuristics, "X", "S"), Ok(None));
		assert_eq!(best_first_search(&graph, &heuristics, "S", "X"), Ok(None));
	}

	#[test]
	fn missing_heuristic() {
		let mut graph = Graph::new();
		graph.connect("S", "A", 1);
		graph.connect("A", "G", 1);
		let heuristics = table(&[("S", 2), ("G", 0)]);

		assert_eq!(
			best_first_search(&graph, &heuristics, "S", "G"),
			Err(SearchError::MissingHeuristic("A".to_owned()))
		);
		assert_eq!(
			best_first_search(&graph, &heuristics, "A", "G"),
			Err(SearchError::MissingHeuristic("A".to_owned()))
		);
	}

	#[test]
	fn unknown_start_needs_no_heuristic() {
		let mut graph = Graph::new();
		graph.connect("S", "G", 1);
		let heuristics = table(&[("S", 1), ("G", 0)]);

		assert_eq!(best_first_search(&graph, &heuristics, "X", "G"), Ok(None));
		let path = best_first_search(&graph, &heuristics, "X", "X")
			.unwrap()
			.unwrap();
		assert_eq!(path.into_steps(), vec![Step::new("X", 0)]);
	}

	#[test]
	fn accumulated_cost_overflow() {
		let mut graph = Graph::new();
		graph.connect("S", "A", Cost::MAX);
		graph.connect("A", "G", 1);
		let heuristics = table(&[("S", 2), ("A", 0), ("G", 0)]);

		for config in [SearchConfig::GREEDY, SearchConfig::A_STAR] {
			assert_eq!(
				best_first_search_with(&graph, &heuristics, "S", "G", &config),
				Err(SearchError::CostOverflow("G".to_owned()))
			);
		}
	}

	#[test]
	fn rank_overflow() {
		let mut graph = Graph::new();
		graph.connect("S", "A", Cost::MAX);
		graph.connect("A", "G", 0);
		let heuristics = table(&[("S", 2), ("A", 1), ("G", 0)]);

		let path = best_first_search(&graph, &heuristics, "S", "G")
			.unwrap()
			.unwrap();
		assert_eq!(path.cost(), Cost::MAX);

		assert_eq!(
			best_first_search_with(&graph, &heuristics, "S", "G", &SearchConfig::A_STAR),
			Err(SearchError::CostOverflow("A".to_owned()))
		);
		assert_eq!(rank(Ranking::Greedy, Cost::MAX, 3), Some(3));
		assert_eq!(rank(Ranking::AStar, Cost::MAX, 3), None);
	}

	#[test]
	fn expansion_limit() {
		let mut graph = Graph::new();
		graph.connect("A", "B", 1);
		graph.connect("B", "C", 1);
		graph.connect("C", "D", 1);
		let heuristics = table(&[("A", 3), ("B", 2), ("C", 1), ("D", 0)]);

		let config = SearchConfig::default().with_max_expansions(2);
		assert_eq!(
			best_first_search_with(&graph, &heuristics, "A", "D", &config),
			Err(SearchError::ExpansionLimit { expanded: 2 })
		);

		let config = SearchConfig::default().with_max_expansions(3);
		let path = best_first_search_with(&graph, &heuristics, "A", "D", &config)
			.unwrap()
			.unwrap();
		assert_eq!(path.cost(), 3);
	}

	#[test]
	fn replace_drops_worse_duplicates() {
		// A and B both lead to C, the first discovery of C is more expensive
		let mut graph = Graph::new();
		graph.connect("S", "A", 1);
		graph.connect("S", "B", 2);
		graph.connect("A", "C", 10);
		graph.connect("B", "C", 1);
		graph.connect("C", "G", 1);
		let heuristics = table(&[("S", 3), ("A", 2), ("B", 2), ("C", 1), ("G", 0)]);

		let config = SearchConfig {
			ranking: Ranking::AStar,
			duplicates: DuplicatePolicy::Keep,
			max_expansions: None,
		};
		let kept = best_first_search_with(&graph, &heuristics, "S", "G", &config)
			.unwrap()
			.unwrap();
		let replaced = best_first_search_with(&graph, &heuristics, "S", "G", &SearchConfig::A_STAR)
			.unwrap()
			.unwrap();

		assert_eq!(nodes(&replaced), vec!["S", "B", "C", "G"]);
		assert_eq!(replaced.cost(), 4);
		assert_eq!(kept.cost(), replaced.cost());
	}

	#[test]
	fn many_starts() {
		let mut graph = Graph::undirected();
		graph.connect("A", "B", 1);
		graph.connect("B", "G", 2);
		graph.connect("C", "G", 4);
		let heuristics = table(&[("A", 2), ("B", 1), ("C", 3), ("G", 0)]);

		let results = search_many(
			&graph,
			&heuristics,
			&["A", "C", "G"],
			"G",
			&SearchConfig::default(),
		);
		let costs: Vec<Option<Cost>> = results
			.into_iter()
			.map(|result| result.unwrap().map(|path| path.cost()))
			.collect();
		assert_eq!(costs, vec![Some(3), Some(4), Some(0)]);
	}
}
