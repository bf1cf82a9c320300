use crate::results::*;
use log::debug;
use log::trace;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The number of letters in every feedback string and every candidate word.
pub const WORD_LENGTH: usize = 5;

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// Defines the letter restrictions given by the feedback for a single guess.
///
/// A spec is written as five tokens, one per letter of the guess. Each token is a lowercase letter
/// followed by:
///
///  * `!` if the letter is in the right location,
///  * `?` if the letter is in the word, but not in this location,
///  * nothing if the letter is not in the word.
///
/// Tokens may be followed by any number of spaces, e.g. `"we!ar?y"` or `"w e! a r? y"`.
///
/// If a letter without a suffix also appears with a `!` elsewhere in the same spec, it is treated
/// as present-but-not-here instead of not present, since Wordle marks each copy of a repeated
/// letter separately.
///
/// ```
/// use rs_wordle_filter::Spec;
///
/// let spec: Spec = "we!ar?y".parse()?;
///
/// assert!(spec.matches("rebus"));
/// assert!(!spec.matches("tears"));
/// # Ok::<(), rs_wordle_filter::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Spec {
    spec_str: String,
    /// Letters that must occur in specific locations in the word.
    locations: BTreeSet<LocatedLetter>,
    /// Letters that must be present, but must be somewhere else in the word.
    non_locations: BTreeSet<LocatedLetter>,
    /// Letters that must not be in the word.
    non_characters: BTreeSet<char>,
}

impl Spec {
    /// Parses the given feedback string.
    ///
    /// Returns [`WordleError::InvalidSpec`] if the string does not match [`SPEC_GRAMMAR`].
    pub fn parse(spec_str: &str) -> Result<Spec, WordleError> {
        let tokens = tokenize(spec_str).ok_or_else(|| WordleError::invalid_spec(spec_str))?;

        let mut locations = BTreeSet::new();
        let mut non_locations = BTreeSet::new();
        let mut unresolved = Vec::with_capacity(WORD_LENGTH);
        for (index, token) in tokens.iter().enumerate() {
            // `tokenize` only yields a letter with an optional `!` or `?`, so this cannot fail.
            let (letter, result) = classify(token).ok_or_else(|| WordleError::Internal {
                spec: spec_str.to_string(),
            })?;
            let located_letter = LocatedLetter::new(letter, index as u8);
            match result {
                LetterResult::Correct => {
                    locations.insert(located_letter);
                }
                LetterResult::PresentNotHere => {
                    non_locations.insert(located_letter);
                }
                LetterResult::NotPresent => unresolved.push(located_letter),
            }
        }

        let located_letters: HashSet<char> = locations.iter().map(|ll| ll.letter).collect();
        let mut non_characters = BTreeSet::new();
        for located_letter in unresolved {
            if located_letters.contains(&located_letter.letter) {
                non_locations.insert(located_letter);
            } else {
                non_characters.insert(located_letter.letter);
            }
        }

        debug!("Spec for '{}':", spec_str);
        debug!("\tLocations: {:?}", locations);
        debug!("\tNon-locations: {:?}", non_locations);
        debug!("\tNon-characters: {:?}", non_characters);

        Ok(Spec {
            spec_str: spec_str.to_string(),
            locations,
            non_locations,
            non_characters,
        })
    }

    /// The feedback string this spec was parsed from.
    pub fn as_str(&self) -> &str {
        &self.spec_str
    }

    /// Letters that must be at exactly these locations.
    pub fn locations(&self) -> &BTreeSet<LocatedLetter> {
        &self.locations
    }

    /// Letters that must be in the word, but not at these locations.
    pub fn non_locations(&self) -> &BTreeSet<LocatedLetter> {
        &self.non_locations
    }

    /// Letters that must not be in the word at all.
    pub fn non_characters(&self) -> &BTreeSet<char> {
        &self.non_characters
    }

    /// Returns `true` iff the given word satisfies this spec.
    ///
    /// The word is expected to be lowercase and [`WORD_LENGTH`] letters long. See
    /// [`SpecSet::matches`](crate::SpecSet::matches) for a version that checks this.
    pub fn matches(&self, word: &str) -> bool {
        trace!("Testing word '{}' against spec '{}'", word, self.spec_str);

        for ll in &self.locations {
            let found = word.chars().nth(ll.location as usize);
            if found != Some(ll.letter) {
                trace!(
                    "DQ: word[{}] was {:?}, but spec wants {}",
                    ll.location,
                    found,
                    ll.letter
                );
                return false;
            }
        }

        for ll in &self.non_locations {
            if word.chars().nth(ll.location as usize) == Some(ll.letter) {
                trace!(
                    "DQ: word[{}] was {}, but spec knows that location mismatches",
                    ll.location,
                    ll.letter
                );
                return false;
            }
            if !word.contains(ll.letter) {
                trace!("DQ: {} not found in word, but spec has it", ll.letter);
                return false;
            }
        }

        for letter in &self.non_characters {
            if word.contains(*letter) {
                trace!("DQ: {} known not to be in target", letter);
                return false;
            }
        }

        trace!("Word '{}' matches spec '{}'", word, self.spec_str);
        true
    }
}

impl FromStr for Spec {
    type Err = WordleError;

    fn from_str(spec_str: &str) -> Result<Spec, WordleError> {
        Spec::parse(spec_str)
    }
}

impl TryFrom<String> for Spec {
    type Error = WordleError;

    fn try_from(spec_str: String) -> Result<Spec, WordleError> {
        Spec::parse(&spec_str)
    }
}

impl From<Spec> for String {
    fn from(spec: Spec) -> String {
        spec.spec_str
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec_str)
    }
}

/// Splits a feedback string into its five tokens, keeping any trailing spaces on each token.
///
/// Returns `None` unless the whole string is exactly five tokens.
fn tokenize(spec_str: &str) -> Option<Vec<&str>> {
    let bytes = spec_str.as_bytes();
    let mut tokens = Vec::with_capacity(WORD_LENGTH);
    let mut index = 0;
    while tokens.len() < WORD_LENGTH {
        let start = index;
        if !bytes.get(index)?.is_ascii_lowercase() {
            return None;
        }
        index += 1;
        if matches!(bytes.get(index), Some(b'!' | b'?')) {
            index += 1;
        }
        while bytes.get(index) == Some(&b' ') {
            index += 1;
        }
        // Only ASCII has been consumed, so `index` is always on a char boundary.
        tokens.push(&spec_str[start..index]);
    }
    if index == bytes.len() {
        Some(tokens)
    } else {
        None
    }
}

fn classify(token: &str) -> Option<(char, LetterResult)> {
    let mut chars = token.trim_matches(' ').chars();
    let letter = chars.next()?;
    let result = match (chars.next(), chars.next()) {
        (None, _) => LetterResult::NotPresent,
        (Some('!'), None) => LetterResult::Correct,
        (Some('?'), None) => LetterResult::PresentNotHere,
        _ => return None,
    };
    Some((letter, result))
}
