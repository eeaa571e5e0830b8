use crate::generator::error::RandomizerError;
use rand::Rng;
use std::collections::HashSet;

/// Inclusive index range `[min, max]` to sample from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRange {
	pub min: usize,
	pub max: usize,
}

impl IndexRange {
	/// Number of distinct values in the range, or `None` when the count
	/// does not fit in a `usize` (a range spanning the whole type).
	///
	/// Only meaningful when `min <= max`.
	fn span(&self) -> Option<usize> {
		(self.max - self.min).checked_add(1)
	}
}

/// Draws `amount` distinct indexes uniformly at random from `range`.
///
/// # Parameters
/// - `amount`: Number of distinct indexes to return. Must be at least 1.
/// - `range`: Inclusive bounds to draw from.
///
/// # Returns
/// A set of exactly `amount` distinct values, each within `[min, max]`.
/// No ordering guarantee; callers must impose their own if they need one.
///
/// # Errors
/// - `InvalidAmount` when `amount` is zero.
/// - `InvalidRange` when `min` exceeds `max`.
/// - `RangeExceeded` when `amount` exceeds the number of distinct values
///   in the range.
///
/// # Behavior
/// Rejection sampling: draw uniformly in `[min, max]`, retry on duplicates,
/// accumulate until `amount` distinct values are collected. Fine for small
/// samples out of large ranges (the intended use: a few words out of
/// thousands); the expected number of draws degrades as `amount` approaches
/// the full span.
pub fn sample_unique(amount: usize, range: IndexRange) -> Result<HashSet<usize>, RandomizerError> {
	if amount == 0 {
		return Err(RandomizerError::InvalidAmount { amount });
	}
	if range.min > range.max {
		return Err(RandomizerError::InvalidRange {
			min: range.min,
			max: range.max,
		});
	}
	// A span too large for usize holds more values than any amount.
	if let Some(available) = range.span() {
		if amount > available {
			return Err(RandomizerError::RangeExceeded {
				requested: amount,
				available,
			});
		}
	}

	let mut rng = rand::rng();
	let mut indexes = HashSet::with_capacity(amount);
	while indexes.len() < amount {
		indexes.insert(rng.random_range(range.min..=range.max));
	}

	Ok(indexes)
}
