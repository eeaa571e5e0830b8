//! Memorable random string generation library.
//!
//! This crate builds passphrase-style strings by sampling distinct words
//! from a language-specific wordset and appending punctuation marks:
//! - Unique random index sampling over a bounded range
//! - File-backed or caller-supplied word and punctuation sources
//! - A small, statically declared set of supported languages
//! - A high-level generation interface (`Randomizer`)
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core sampling and generation logic.
///
/// This module exposes the high-level randomizer interface while keeping
/// internal source representations private.
pub mod generator;

/// I/O utilities (line-oriented wordset file access).
///
/// Not exposed
pub(crate) mod io;
