/// How candidates on the frontier are ranked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ranking {
	/// `f = h`: always expand the candidate that looks closest to the Goal,
	/// ignoring the Cost accumulated so far (default)
	#[default]
	Greedy,
	/// `f = g + h`: classic [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) ranking
	AStar,
}

/// What happens when a Node that is already on the frontier is discovered again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
	/// every newly discovered candidate is added to the frontier, even if a candidate for the
	/// same Node is already waiting there (default)
	#[default]
	Keep,
	/// a new candidate is dropped if the frontier already holds one for the same Node with a
	/// lower or equal rank. Otherwise the worse candidates are removed in favor of the new one.
	Replace,
}

/// Options for configuring [`best_first_search_with`](crate::best_first_search_with)
///
/// Default options:
/// ```
/// # use best_first_search::{DuplicatePolicy, Ranking, SearchConfig};
/// assert_eq!(
///     SearchConfig {
///         ranking: Ranking::Greedy,
///         duplicates: DuplicatePolicy::Keep,
///         max_expansions: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The rank used to pick the next candidate (defaults to [`Ranking::Greedy`])
	pub ranking: Ranking,
	/// How repeated discoveries of a Node are handled (defaults to [`DuplicatePolicy::Keep`])
	pub duplicates: DuplicatePolicy,
	/// `None` (default): search until the Goal is found or the frontier is empty.
	///
	/// `Some(n)`: give up with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
	/// once `n` Nodes have been expanded without reaching the Goal.
	pub max_expansions: Option<usize>,
}

impl SearchConfig {
	/// the greedy best-first search, same as [`SearchConfig::default`]
	pub const GREEDY: SearchConfig = SearchConfig {
		ranking: Ranking::Greedy,
		duplicates: DuplicatePolicy::Keep,
		max_expansions: None,
	};
	/// an A* search that replaces worse frontier entries
	///
	/// Values:
	/// ```
	/// # use best_first_search::{DuplicatePolicy, Ranking, SearchConfig};
	/// assert_eq!(
	///     SearchConfig {
	///         ranking: Ranking::AStar,
	///         duplicates: DuplicatePolicy::Replace,
	///         max_expansions: None,
	///     },
	///     SearchConfig::A_STAR
	/// );
	/// ```
	pub const A_STAR: SearchConfig = SearchConfig {
		ranking: Ranking::AStar,
		duplicates: DuplicatePolicy::Replace,
		max_expansions: None,
	};

	/// Returns a copy of this config that gives up after `max_expansions` expanded Nodes
	pub fn with_max_expansions(self, max_expansions: usize) -> SearchConfig {
		SearchConfig {
			max_expansions: Some(max_expansions),
			..self
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::GREEDY
	}
}
