use thiserror::Error;

/// The ways a search can fail.
///
/// Not finding a Route is not an error: the search functions return `Ok(None)` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	/// A Node that had to be ranked has no entry in the heuristic table
	#[error("no heuristic estimate for node `{0}`")]
	MissingHeuristic(String),
	/// The search expanded [`max_expansions`](crate::SearchConfig::max_expansions) Nodes
	/// without reaching the Goal
	#[error("gave up after expanding {expanded} nodes")]
	ExpansionLimit {
		/// how many Nodes were expanded before giving up
		expanded: usize,
	},
	/// The accumulated or ranked Cost of reaching a Node does not fit into a [`Cost`](crate::Cost)
	#[error("cost of reaching node `{0}` overflows")]
	CostOverflow(String),
}

#[cfg(test)]
mod tests {
	use super::SearchError;

	#[test]
	fn display() {
		assert_eq!(
			SearchError::MissingHeuristic("K".to_owned()).to_string(),
			"no heuristic estimate for node `K`"
		);
		assert_eq!(
			SearchError::ExpansionLimit { expanded: 3 }.to_string(),
			"gave up after expanding 3 nodes"
		);
		assert_eq!(
			SearchError::CostOverflow("G".to_owned()).to_string(),
			"cost of reaching node `G` overflows"
		);
	}
}
