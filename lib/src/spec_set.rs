use crate::results::*;
use crate::spec::*;
use log::debug;
use log::trace;
use std::slice;

/// All of the specs from the guesses made so far. A word must satisfy every one of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct SpecSet {
    specs: Vec<Spec>,
}

impl SpecSet {
    /// Parses one spec per feedback string, in order.
    ///
    /// Fails with the error for the first invalid string, if any.
    ///
    /// ```
    /// use rs_wordle_filter::SpecSet;
    ///
    /// let specs = SpecSet::from_specs(["we!ar?y", "te!nor?"])?;
    ///
    /// assert!(specs.matches("rebus"));
    /// assert!(!specs.matches("tenor"));
    /// # Ok::<(), rs_wordle_filter::WordleError>(())
    /// ```
    pub fn from_specs<I, S>(spec_strs: I) -> Result<SpecSet, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specs = spec_strs
            .into_iter()
            .map(|spec_str| Spec::parse(spec_str.as_ref()))
            .collect::<Result<Vec<Spec>, WordleError>>()?;
        debug!("Built {} specs", specs.len());
        Ok(SpecSet { specs })
    }

    /// Returns `true` iff the given word is [`WORD_LENGTH`] letters long and satisfies every spec.
    ///
    /// The word is lower-cased before it is tested.
    pub fn matches(&self, word: &str) -> bool {
        let word = word.to_lowercase();

        if word.chars().count() != WORD_LENGTH {
            trace!("DQ: length of '{}' not {}", word, WORD_LENGTH);
            return false;
        }

        if !word.chars().all(is_letter) {
            trace!("DQ: '{}' is not alphabetic", word);
            return false;
        }

        self.specs.iter().all(|spec| spec.matches(&word))
    }

    /// The number of specs in this set.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterates over the specs in the order they were given.
    pub fn iter(&self) -> slice::Iter<'_, Spec> {
        self.specs.iter()
    }
}

/// Letters, but not letter-like numerals such as `ⅳ`.
fn is_letter(letter: char) -> bool {
    letter.is_alphabetic() && !letter.is_numeric()
}

impl<'a> IntoIterator for &'a SpecSet {
    type Item = &'a Spec;
    type IntoIter = slice::Iter<'a, Spec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

impl TryFrom<Vec<String>> for SpecSet {
    type Error = WordleError;

    fn try_from(spec_strs: Vec<String>) -> Result<SpecSet, WordleError> {
        SpecSet::from_specs(spec_strs)
    }
}

impl From<SpecSet> for Vec<String> {
    fn from(specs: SpecSet) -> Vec<String> {
        specs.specs.into_iter().map(String::from).collect()
    }
}
