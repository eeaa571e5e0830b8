use crate::generator::error::RandomizerError;
use crate::generator::sampler::{self, IndexRange};
use crate::io;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Built-in punctuation marks used when no custom set is supplied.
pub(crate) const DEFAULT_PUNCTSET: [&str; 10] =
	["!", "@", "#", "$", "%", "^", "&", "*", "(", ")"];

static DEFAULT_PUNCTSET_LOCK: OnceLock<Vec<String>> = OnceLock::new();

/// Returns the built-in punctuation set as owned strings.
///
/// Built lazily on first access and cached for the lifetime of the process.
pub(crate) fn default_punctset() -> &'static [String] {
	DEFAULT_PUNCTSET_LOCK
		.get_or_init(|| DEFAULT_PUNCTSET.iter().map(|p| (*p).to_owned()).collect())
}

/// A bounded, indexable source of candidate strings.
///
/// Either an in-memory list supplied by the caller or a line-oriented
/// backing file. A `Source` is built per call from the active configuration,
/// so one selection always observes one configuration snapshot.
pub(crate) enum Source<'a> {
	/// Caller-supplied list; lookups are slice reads.
	Memory(&'a [String]),
	/// Newline-delimited backing file; lookups stream the file, one pass
	/// per index, nothing cached across calls.
	File(PathBuf),
}

impl Source<'_> {
	/// Number of candidates in the source.
	///
	/// Blank lines in a backing file are not counted, matching the index
	/// space used by `get`.
	///
	/// # Errors
	/// `UnreadableWordset` when a backing file cannot be opened or read.
	pub(crate) fn count(&self) -> Result<usize, RandomizerError> {
		match self {
			Source::Memory(list) => Ok(list.len()),
			Source::File(path) => io::count_nonblank_lines(path).map_err(|source| {
				RandomizerError::UnreadableWordset {
					path: path.clone(),
					source,
				}
			}),
		}
	}

	/// Returns the candidate at `index`.
	///
	/// The caller guarantees `index < count()`.
	fn get(&self, index: usize) -> Result<String, RandomizerError> {
		match self {
			Source::Memory(list) => Ok(list[index].clone()),
			Source::File(path) => {
				let line = io::nonblank_line_at(path, index).map_err(|source| {
					RandomizerError::UnreadableWordset {
						path: path.clone(),
						source,
					}
				})?;
				// The file shrank between count and lookup.
				line.ok_or_else(|| RandomizerError::UnreadableWordset {
					path: path.clone(),
					source: std::io::Error::new(
						std::io::ErrorKind::UnexpectedEof,
						format!("wordset has fewer than {} entries", index + 1),
					),
				})
			}
		}
	}

	/// Picks `amount` distinct candidates uniformly at random.
	///
	/// # Errors
	/// - `InvalidAmount` when `amount` is zero.
	/// - `RangeExceeded` when `amount` exceeds the source size.
	/// - `UnreadableWordset` when a backing file cannot be read.
	pub(crate) fn pick(&self, amount: usize) -> Result<Vec<String>, RandomizerError> {
		if amount == 0 {
			return Err(RandomizerError::InvalidAmount { amount });
		}

		let count = self.count()?;
		if amount > count {
			return Err(RandomizerError::RangeExceeded {
				requested: amount,
				available: count,
			});
		}

		let indexes = sampler::sample_unique(amount, IndexRange { min: 0, max: count - 1 })?;

		let mut picked = Vec::with_capacity(amount);
		for index in indexes {
			picked.push(self.get(index)?);
		}
		Ok(picked)
	}
}
