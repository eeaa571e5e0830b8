use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error kinds raised by the generator.
///
/// Every failure is reported synchronously to the immediate caller; nothing
/// is retried internally and there is no partial success. `generate`
/// either returns a fully formed string or one of these.
#[derive(Debug, Error)]
pub enum RandomizerError {
	/// A requested amount (words, punctuation marks, sample size) was zero.
	#[error("requested amount must be at least 1, got {amount}")]
	InvalidAmount { amount: usize },

	/// A sampling range whose minimum exceeds its maximum.
	#[error("invalid index range: min {min} exceeds max {max}")]
	InvalidRange { min: usize, max: usize },

	/// More distinct indexes were requested than the range holds.
	#[error("requested {requested} distinct indexes but only {available} are available")]
	RangeExceeded { requested: usize, available: usize },

	/// The given language tag is not in the supported set.
	#[error("language '{tag}' is not (yet) supported")]
	UnsupportedLanguage { tag: String },

	/// The wordset backing file could not be opened or read.
	#[error("wordset file '{path}' is unreadable")]
	UnreadableWordset {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
