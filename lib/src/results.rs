use thiserror::Error;

/// The grammar every feedback string must match, in regex notation.
pub const SPEC_GRAMMAR: &str = "([a-z][!?]? *){5}";

/// The feedback given for a single letter of a guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum LetterResult {
    /// The letter is in this location (`!`).
    Correct,
    /// The letter is in the word, but not in this location (`?`).
    PresentNotHere,
    /// No suffix. The letter is not in the word, unless the same letter is `Correct` elsewhere in
    /// the same guess.
    NotPresent,
}

/// Indicates that an error occurred while reading feedback or words.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The given feedback string does not match [`SPEC_GRAMMAR`].
    #[error("Spec '{spec}' must match {grammar}")]
    InvalidSpec { spec: String, grammar: &'static str },
    /// A token passed validation but could not be classified. This indicates a bug in the
    /// tokenizer.
    #[error("Spec '{spec}' was invalid, but passed validation")]
    Internal { spec: String },
    /// The word list could not be read.
    #[error("could not read words: {0}")]
    Io(#[from] std::io::Error),
}

impl WordleError {
    pub(crate) fn invalid_spec(spec: &str) -> WordleError {
        WordleError::InvalidSpec {
            spec: spec.to_string(),
            grammar: SPEC_GRAMMAR,
        }
    }
}
