//! Top-level module for the random string generation system.
//!
//! This crate provides a wordset-backed passphrase generator, including:
//! - Unique random index sampling (`sampler`)
//! - Word and punctuation source resolution (`Source`)
//! - Supported language tags (`Language`)
//! - The error taxonomy (`RandomizerError`)
//! - A high-level generation interface (`Randomizer`)

/// High-level interface for generating memorable random strings.
///
/// Exposes language selection, custom word/punctuation sets, and string
/// generation with configurable word and punctuation counts.
pub mod randomizer;

/// Unique random index sampling over an inclusive bounded range.
///
/// Rejection sampling: correct for small sample sizes relative to the
/// range, degrades near exhaustion.
pub mod sampler;

/// Internal word and punctuation source resolution.
///
/// Wraps either an in-memory list or a line-oriented backing file behind
/// `count`/`get`/`pick`. This module is not exposed publicly.
mod source;

/// Statically declared set of supported language tags.
pub mod language;

/// Error kinds shared by the whole generator.
pub mod error;

pub use error::RandomizerError;
pub use language::Language;
pub use randomizer::Randomizer;
