use crate::generator::error::RandomizerError;
use crate::generator::language::Language;
use crate::generator::source::{self, Source};
use crate::io;
use std::path::PathBuf;

/// Directory holding the default wordset files shipped with the crate.
const WORDSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/wordsets");

/// High-level generator for memorable random strings.
///
/// # Responsibilities
/// - Hold the active configuration (language, custom word/punctuation sets,
///   wordset directory)
/// - Resolve the active sources and select distinct words and punctuation
///   marks through the sampler
/// - Assemble the final string (lower camel case words, punctuation appended)
///
/// # Notes
/// - Configuration is instance state, not process state: one `Randomizer`
///   per desired configuration. Generation takes `&self`, configuration
///   takes `&mut self`, so each call observes a single configuration
///   snapshot. Share an instance across threads behind a mutex if needed.
/// - Not a cryptographically secure generator.
#[derive(Debug)]
pub struct Randomizer {
	/// Selected language; `None` falls back to `Language::DEFAULT`.
	language: Option<Language>,

	/// Caller-supplied wordset overriding the language's backing file.
	wordset: Option<Vec<String>>,

	/// Caller-supplied punctuation set overriding the built-in one.
	punctset: Option<Vec<String>>,

	/// Directory the `<tag>_wordset` backing files are resolved against.
	wordset_dir: PathBuf,
}

impl Default for Randomizer {
	fn default() -> Self {
		Self {
			language: None,
			wordset: None,
			punctset: None,
			wordset_dir: PathBuf::from(WORDSET_DIR),
		}
	}
}

impl Randomizer {
	/// Word count used by convention when the caller has no preference.
	pub const DEFAULT_WORD_COUNT: usize = 3;

	/// Punctuation count used by convention when the caller has no preference.
	pub const DEFAULT_PUNCT_COUNT: usize = 3;

	/// Creates a randomizer with the default configuration: no language
	/// selected (falls back to `Language::DEFAULT`), no custom sets, and
	/// the crate's own wordset directory.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the active language from its short tag.
	///
	/// # Errors
	/// Returns `UnsupportedLanguage` for an unknown tag; the active
	/// language is left unchanged in that case.
	pub fn set_language(&mut self, tag: &str) -> Result<(), RandomizerError> {
		self.language = Some(Language::from_tag(tag)?);
		Ok(())
	}

	/// Returns the active language, or `Language::DEFAULT` if none was set.
	pub fn language(&self) -> Language {
		self.language.unwrap_or(Language::DEFAULT)
	}

	/// Returns the full set of supported languages.
	pub fn available_languages() -> &'static [Language] {
		Language::available()
	}

	/// Overrides the directory the default wordset files are resolved
	/// against.
	///
	/// Intended for embedders shipping their own wordset files; the layout
	/// inside the directory stays `<tag>_wordset`.
	pub fn set_wordset_dir<P: Into<PathBuf>>(&mut self, dir: P) {
		self.wordset_dir = dir.into();
	}

	/// Installs a caller-supplied wordset, overriding the language default
	/// until replaced or `reset`.
	pub fn set_custom_wordset(&mut self, wordset: Vec<String>) {
		self.wordset = Some(wordset);
	}

	/// Returns the custom wordset, or `None` when the language default is
	/// active.
	pub fn custom_wordset(&self) -> Option<&[String]> {
		self.wordset.as_deref()
	}

	/// Installs a caller-supplied punctuation set, overriding the built-in
	/// one until replaced or `reset`.
	pub fn set_custom_punctset(&mut self, punctset: Vec<String>) {
		self.punctset = Some(punctset);
	}

	/// Returns the custom punctuation set, or `None` when the built-in one
	/// is active.
	pub fn custom_punctset(&self) -> Option<&[String]> {
		self.punctset.as_deref()
	}

	/// Loads the active language's default wordset into memory.
	///
	/// Blank lines are skipped. Ignores any custom wordset.
	///
	/// # Errors
	/// `UnreadableWordset` when the backing file cannot be opened or read.
	pub fn default_wordset(&self) -> Result<Vec<String>, RandomizerError> {
		let path = self.wordset_path();
		io::read_nonblank_lines(&path)
			.map_err(|source| RandomizerError::UnreadableWordset { path, source })
	}

	/// Returns the built-in punctuation set.
	pub fn default_punctset() -> Vec<String> {
		source::default_punctset().to_vec()
	}

	/// Number of words in the active word source.
	///
	/// Custom wordset length if one is installed, otherwise the non-blank
	/// line count of the language's backing file.
	///
	/// # Errors
	/// `UnreadableWordset` when the backing file cannot be opened or read.
	pub fn count_words(&self) -> Result<usize, RandomizerError> {
		self.word_source().count()
	}

	/// Number of marks in the active punctuation source.
	pub fn count_punctuation(&self) -> usize {
		match &self.punctset {
			Some(list) => list.len(),
			None => source::default_punctset().len(),
		}
	}

	/// Selects `amount` distinct words at random from the active word
	/// source.
	///
	/// Custom wordsets are read in memory; the language default resolves
	/// each sampled index against the backing file, one pass per index,
	/// nothing cached across calls.
	///
	/// # Errors
	/// - `InvalidAmount` when `amount` is zero.
	/// - `RangeExceeded` when `amount` exceeds the wordset size.
	/// - `UnreadableWordset` when the backing file cannot be read.
	pub fn select_words(&self, amount: usize) -> Result<Vec<String>, RandomizerError> {
		self.word_source().pick(amount)
	}

	/// Selects `amount` distinct punctuation marks at random from the
	/// active punctuation source.
	///
	/// # Errors
	/// - `InvalidAmount` when `amount` is zero.
	/// - `RangeExceeded` when `amount` exceeds the punctuation set size.
	pub fn select_punctuation(&self, amount: usize) -> Result<Vec<String>, RandomizerError> {
		self.punct_source().pick(amount)
	}

	/// Generates a memorable random string.
	///
	/// # Parameters
	/// - `word_count`: Distinct words to include. Must be at least 1.
	/// - `punct_count`: Distinct punctuation marks to append. Must be at
	///   least 1.
	///
	/// # Returns
	/// The sampled words in lower camel case (non-word characters
	/// stripped) followed by the sampled punctuation marks, e.g.
	/// `generate(3, 2)` → `"abadiAbjadAbsurd!("`.
	///
	/// # Errors
	/// - `InvalidAmount` when either count is zero.
	/// - `RangeExceeded` when a count exceeds its source size.
	/// - `UnreadableWordset` when the wordset backing file cannot be read.
	///
	/// # Notes
	/// There is no partial success: either the full string is returned or
	/// the first error is.
	pub fn generate(&self, word_count: usize, punct_count: usize) -> Result<String, RandomizerError> {
		if word_count == 0 {
			return Err(RandomizerError::InvalidAmount { amount: word_count });
		}
		if punct_count == 0 {
			return Err(RandomizerError::InvalidAmount { amount: punct_count });
		}

		let words = self.select_words(word_count)?;
		let puncts = self.select_punctuation(punct_count)?;

		Ok(format_key(&words, &puncts))
	}

	/// Clears the whole configuration: language, custom sets, and wordset
	/// directory all return to their defaults.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Path of the active language's backing file.
	fn wordset_path(&self) -> PathBuf {
		self.wordset_dir.join(self.language().wordset_file_name())
	}

	fn word_source(&self) -> Source<'_> {
		match &self.wordset {
			Some(list) => Source::Memory(list),
			None => Source::File(self.wordset_path()),
		}
	}

	fn punct_source(&self) -> Source<'_> {
		match &self.punctset {
			Some(list) => Source::Memory(list),
			None => Source::Memory(source::default_punctset()),
		}
	}
}

/// Assembles the final string: words in lower camel case, punctuation
/// appended as-is. Non-word characters (anything other than alphanumerics
/// and underscores) are stripped from the words.
fn format_key(words: &[String], puncts: &[String]) -> String {
	let mut out = String::new();

	for word in words {
		let cleaned: String = word
			.chars()
			.filter(|c| c.is_alphanumeric() || *c == '_')
			.collect();
		let mut chars = cleaned.chars();
		let Some(first) = chars.next() else {
			continue;
		};
		if out.is_empty() {
			out.extend(first.to_lowercase());
		} else {
			out.extend(first.to_uppercase());
		}
		out.push_str(chars.as_str());
	}

	for punct in puncts {
		out.push_str(punct);
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn owned(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn formatting_is_lower_camel_case_with_punctuation_appended() {
		let words = owned(&["abal-abal", "oke", "juga"]);
		let puncts = owned(&["!", "("]);

		assert_eq!(format_key(&words, &puncts), "abalabalOkeJuga!(");
	}

	#[test]
	fn formatting_keeps_underscores_as_word_characters() {
		let words = owned(&["ab_cd", "o.k.e"]);
		let puncts = owned(&["!"]);

		assert_eq!(format_key(&words, &puncts), "ab_cdOke!");
	}

	#[test]
	fn formatting_skips_words_emptied_by_cleaning() {
		let words = owned(&["--", "oke"]);
		let puncts = owned(&["#"]);

		assert_eq!(format_key(&words, &puncts), "oke#");
	}

	#[test]
	fn zero_word_count_is_rejected() {
		let randomizer = Randomizer::new();
		match randomizer.generate(0, 3) {
			Err(RandomizerError::InvalidAmount { amount }) => assert_eq!(amount, 0),
			other => panic!("expected InvalidAmount, got {other:?}"),
		}
	}

	#[test]
	fn zero_punct_count_is_rejected_before_any_sampling() {
		let mut randomizer = Randomizer::new();
		// Counts are validated before sources are touched, so even an
		// unreadable wordset directory does not mask the amount error.
		randomizer.set_wordset_dir("/nonexistent");
		match randomizer.generate(3, 0) {
			Err(RandomizerError::InvalidAmount { amount }) => assert_eq!(amount, 0),
			other => panic!("expected InvalidAmount, got {other:?}"),
		}
	}

	#[test]
	fn generate_uses_the_custom_sets() {
		let mut randomizer = Randomizer::new();
		randomizer.set_custom_wordset(owned(&["saya", "oke", "juga"]));
		randomizer.set_custom_punctset(owned(&["!"]));

		let key = randomizer.generate(3, 1).unwrap();

		assert!(key.ends_with('!'));
		let words = &key[..key.len() - 1];
		for part in ["saya", "oke", "juga"] {
			let capitalized = {
				let mut c = part.chars();
				let first = c.next().unwrap().to_uppercase().to_string();
				format!("{first}{}", c.as_str())
			};
			assert!(
				words.contains(part) || words.contains(&capitalized),
				"'{part}' missing from '{words}'"
			);
		}
	}

	#[test]
	fn reset_restores_the_default_configuration() {
		let mut randomizer = Randomizer::new();
		randomizer.set_language("en").unwrap();
		randomizer.set_custom_wordset(owned(&["oke"]));
		randomizer.set_custom_punctset(owned(&["!"]));
		randomizer.set_wordset_dir("/elsewhere");

		randomizer.reset();

		assert_eq!(randomizer.language(), Language::DEFAULT);
		assert!(randomizer.custom_wordset().is_none());
		assert!(randomizer.custom_punctset().is_none());
		assert!(randomizer.count_words().is_ok());
	}
}
