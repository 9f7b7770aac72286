use crate::Cost;

/// One Node on a [`Path`], together with the Cost of reaching it from the start
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
	/// the name of the Node
	pub node: String,
	/// the accumulated Cost from the start of the Path up to this Node
	pub cost: Cost,
}

impl Step {
	/// creates a new Step
	pub fn new(node: impl Into<String>, cost: Cost) -> Step {
		Step {
			node: node.into(),
			cost,
		}
	}
}

/// A Route found by a search.
///
/// Stores the sequence of visited Nodes from the start to the Goal, each with the accumulated
/// Cost of getting there. The first Step is always the start with a Cost of `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
	steps: Vec<Step>,
}

impl Path {
	/// creates a new Path from the given Steps
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use best_first_search::{Path, Step};
	/// let path = Path::new(vec![Step::new("S", 0), Step::new("A", 2)]);
	///
	/// assert_eq!(path.cost(), 2);
	/// assert_eq!(path.start(), Some("S"));
	/// assert_eq!(path.goal(), Some("A"));
	/// ```
	pub fn new(steps: Vec<Step>) -> Path {
		Path { steps }
	}

	/// the total Cost of the Path, which is the accumulated Cost of the last Step
	pub fn cost(&self) -> Cost {
		self.steps.last().map_or(0, |step| step.cost)
	}

	/// the number of Steps in the Path (including the start)
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// `true` if the Path has no Steps
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// the name of the first Node
	pub fn start(&self) -> Option<&str> {
		self.steps.first().map(|step| step.node.as_str())
	}

	/// the name of the last Node
	pub fn goal(&self) -> Option<&str> {
		self.steps.last().map(|step| step.node.as_str())
	}

	/// Returns an Iterator over the Steps of the Path
	pub fn iter(&self) -> std::slice::Iter<'_, Step> {
		self.steps.iter()
	}

	/// Returns an Iterator over the names of the Nodes on the Path
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use best_first_search::{Path, Step};
	/// let path = Path::new(vec![Step::new("S", 0), Step::new("A", 2), Step::new("B", 4)]);
	///
	/// assert_eq!(path.nodes().collect::<Vec<_>>(), vec!["S", "A", "B"]);
	/// ```
	pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.steps.iter().map(|step| step.node.as_str())
	}

	/// consumes the Path and returns its Steps
	pub fn into_steps(self) -> Vec<Step> {
		self.steps
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for Path {
	type Output = Step;
	fn index(&self, index: usize) -> &Step {
		&self.steps[index]
	}
}

impl Deref for Path {
	type Target = [Step];
	fn deref(&self) -> &[Step] {
		&self.steps
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Step;
	type IntoIter = std::slice::Iter<'a, Step>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

use std::fmt;

impl fmt::Display for Step {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}: {}", self.node, self.cost)
	}
}

impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost())?;
		if self.steps.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.steps[0].node)?;
			for step in self.steps.iter().skip(1) {
				write!(fmt, " -> {}", step.node)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{Path, Step};

	fn sample() -> Path {
		Path::new(vec![Step::new("S", 0), Step::new("A", 2), Step::new("B", 4)])
	}

	#[test]
	fn index() {
		let path = sample();

		assert_eq!(path[0], Step::new("S", 0));
		assert_eq!(path[2].node, "B");
		assert_eq!(path.len(), 3);
	}

	#[test]
	fn display() {
		assert_eq!(&format!("{}", sample()), "Path[Cost = 4]: S -> A -> B");
		assert_eq!(&format!("{}", sample()[1]), "A: 2");
	}

	#[test]
	fn display_empty() {
		let path = Path::new(vec![]);

		assert!(path.is_empty());
		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}
}
