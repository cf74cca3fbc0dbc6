use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TruismError};

/// A discrete frequency distribution over outcomes of type `T`.
///
/// Conceptually this is the set of weighted outgoing edges of a node in a
/// Markov chain, or the weighted set of sentence openers.
///
/// ## Responsibilities:
/// - Keep outcomes in the order they were first observed
/// - Draw an outcome with probability `weight / total`
///
/// ## Invariants
/// - Outcomes are unique
/// - Each weight is strictly positive (checked by `is_valid` on decode)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Distribution<T> {
	/// Outcomes with their observation count, in first-seen order.
	/// Example: [("cat", 3), ("dog", 1)]
	entries: Vec<(T, usize)>,
}

impl<T> Distribution<T> {
	/// Builds a distribution from explicit `(outcome, weight)` pairs.
	///
	/// Pairs are kept in the given order. The caller is responsible for
	/// uniqueness; use `Tally` when counting observations.
	pub fn from_weights<I: IntoIterator<Item = (T, usize)>>(weights: I) -> Self {
		Self { entries: weights.into_iter().collect() }
	}

	/// Number of distinct outcomes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of all weights.
	pub fn total(&self) -> usize {
		self.entries.iter().map(|(_, weight)| weight).sum()
	}

	/// Iterates `(outcome, weight)` in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
		self.entries.iter().map(|(outcome, weight)| (outcome, *weight))
	}

	/// Checks the decode-time invariants: at least one outcome, no zero weight.
	pub fn is_valid(&self) -> bool {
		!self.entries.is_empty() && self.entries.iter().all(|(_, weight)| *weight > 0)
	}

	/// Draws one outcome using weighted random sampling.
	///
	/// A uniform integer `r` in `0..total` is drawn, then the outcomes are
	/// scanned in first-seen order accumulating their weights. The first
	/// outcome whose cumulative weight exceeds `r` wins, so each outcome is
	/// selected with probability exactly `weight / total`.
	///
	/// This method performs an O(n) scan over the outcomes.
	///
	/// # Errors
	/// `EmptyDistribution` if there is nothing to draw from (no outcome, or
	/// every weight is zero).
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T> {
		let total = self.total();
		if total == 0 {
			return Err(TruismError::EmptyDistribution);
		}

		let r = rng.random_range(0..total);

		let mut cumulative = 0;
		for (outcome, weight) in &self.entries {
			cumulative += weight;
			if cumulative > r {
				return Ok(outcome);
			}
		}

		// cumulative reaches total > r on the last entry
		Err(TruismError::EmptyDistribution)
	}
}

impl<T: PartialEq> Distribution<T> {
	/// Weight of `outcome`, if it was observed.
	pub fn weight(&self, outcome: &T) -> Option<usize> {
		self.entries
			.iter()
			.find(|(candidate, _)| candidate == outcome)
			.map(|(_, weight)| *weight)
	}
}

/// Incremental counter producing a `Distribution`.
///
/// Keeps an index from outcome to position so each observation is O(1)
/// while the resulting distribution preserves first-seen order.
#[derive(Debug, Clone)]
pub(crate) struct Tally<T> {
	entries: Vec<(T, usize)>,
	index: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> Tally<T> {
	pub(crate) fn new() -> Self {
		Self { entries: Vec::new(), index: HashMap::new() }
	}

	/// Records one occurrence of `outcome`.
	pub(crate) fn record(&mut self, outcome: T) {
		match self.index.get(&outcome) {
			Some(&position) => self.entries[position].1 += 1,
			None => {
				self.index.insert(outcome.clone(), self.entries.len());
				self.entries.push((outcome, 1));
			}
		}
	}

	pub(crate) fn finish(self) -> Distribution<T> {
		Distribution { entries: self.entries }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn tally_keeps_first_seen_order() {
		let mut tally = Tally::new();
		for word in ["b", "a", "b", "c", "b"] {
			tally.record(word);
		}
		let dist = tally.finish();
		let order: Vec<(&str, usize)> = dist.iter().map(|(w, n)| (*w, n)).collect();
		assert_eq!(order, vec![("b", 3), ("a", 1), ("c", 1)]);
		assert_eq!(dist.total(), 5);
		assert_eq!(dist.weight(&"b"), Some(3));
		assert_eq!(dist.weight(&"z"), None);
	}

	#[test]
	fn empty_distribution_fails() {
		let dist: Distribution<&str> = Distribution::from_weights([]);
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(dist.sample(&mut rng), Err(TruismError::EmptyDistribution));
	}

	#[test]
	fn all_zero_weights_fail() {
		let dist = Distribution::from_weights([("a", 0), ("b", 0)]);
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(dist.sample(&mut rng), Err(TruismError::EmptyDistribution));
		assert!(!dist.is_valid());
	}

	#[test]
	fn single_outcome_always_wins() {
		let dist = Distribution::from_weights([("only", 4)]);
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..100 {
			assert_eq!(dist.sample(&mut rng), Ok(&"only"));
		}
	}

	#[test]
	fn zero_weight_outcome_is_never_drawn() {
		let dist = Distribution::from_weights([("never", 0), ("always", 2)]);
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..500 {
			assert_eq!(dist.sample(&mut rng), Ok(&"always"));
		}
	}

	#[test]
	fn frequencies_follow_weights() {
		let dist = Distribution::from_weights([("A", 1), ("B", 3)]);
		let mut rng = StdRng::seed_from_u64(42);
		let (mut a, mut b) = (0usize, 0usize);
		for _ in 0..20_000 {
			match *dist.sample(&mut rng).unwrap() {
				"A" => a += 1,
				_ => b += 1,
			}
		}
		let ratio = b as f64 / a as f64;
		assert!((2.6..3.4).contains(&ratio), "B/A ratio was {ratio}");
	}

	#[test]
	fn same_seed_same_draws() {
		let dist = Distribution::from_weights([("x", 2), ("y", 5), ("z", 1)]);
		let mut first = StdRng::seed_from_u64(99);
		let mut second = StdRng::seed_from_u64(99);
		for _ in 0..50 {
			assert_eq!(dist.sample(&mut first), dist.sample(&mut second));
		}
	}
}
