use crate::generator::error::RandomizerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported wordset languages.
///
/// The set is declared statically; adding a language means adding a variant
/// here, its tag mapping below, and a backing file under
/// `resources/wordsets/`.
///
/// Serializes to and from the short tag (`"id"`, `"en"`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
	/// Indonesian
	#[serde(rename = "id")]
	Id,
	/// English
	#[serde(rename = "en")]
	En,
}

/// All supported languages, in declaration order.
const AVAILABLE: [Language; 2] = [Language::Id, Language::En];

impl Language {
	/// The language used when none has been selected.
	pub const DEFAULT: Language = Language::Id;

	/// Returns the short tag identifying this language (`"id"`, `"en"`).
	pub fn tag(&self) -> &'static str {
		match self {
			Language::Id => "id",
			Language::En => "en",
		}
	}

	/// Parses a short tag into a `Language`.
	///
	/// # Errors
	/// Returns `UnsupportedLanguage` when the tag is not in the supported set.
	pub fn from_tag(tag: &str) -> Result<Self, RandomizerError> {
		AVAILABLE
			.iter()
			.copied()
			.find(|language| language.tag() == tag)
			.ok_or_else(|| RandomizerError::UnsupportedLanguage { tag: tag.to_owned() })
	}

	/// Returns the full set of supported languages.
	pub fn available() -> &'static [Language] {
		&AVAILABLE
	}

	/// File name of this language's default wordset (`<tag>_wordset`).
	pub(crate) fn wordset_file_name(&self) -> String {
		format!("{}_wordset", self.tag())
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}
