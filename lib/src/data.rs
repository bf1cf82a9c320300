use crate::results::*;
use crate::spec_set::SpecSet;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::io::BufRead;
use std::ops::Deref;

/// Contains all the words that may be filtered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<String>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Surrounding whitespace is removed and empty
    /// lines are skipped. Words are otherwise kept as written.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let all_words = word_reader
            .lines()
            .filter_map(|maybe_line| match maybe_line {
                Ok(line) => clean_word(&line).map(|word| Ok(word.to_string())),
                Err(error) => Some(Err(WordleError::from(error))),
            })
            .collect::<Result<Vec<String>, WordleError>>()?;
        debug!("Read {} words", all_words.len());
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// Words are cleaned in the same way as in [`WordBank::from_reader`].
    pub fn from_iterator<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .filter_map(|word| clean_word(word.as_ref()).map(str::to_string))
                .collect(),
        }
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

fn clean_word(word: &str) -> Option<&str> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    Some(word)
}

/// Gets the list of words in the word bank that match every spec, in word bank order.
///
/// Words are tested in parallel.
pub fn get_possible_words<'a>(specs: &SpecSet, bank: &'a WordBank) -> Vec<&'a str> {
    let possible_words: Vec<&str> = bank
        .all_words
        .par_iter()
        .map(String::as_str)
        .filter(|word| specs.matches(word))
        .collect();
    debug!(
        "{} of {} words match {} specs",
        possible_words.len(),
        bank.len(),
        specs.len()
    );
    possible_words
}

/// Shuffles the given words and keeps at most `limit` of them.
pub fn choose_display_sample<T, R: Rng + ?Sized>(
    mut words: Vec<T>,
    limit: usize,
    rng: &mut R,
) -> Vec<T> {
    words.shuffle(rng);
    words.truncate(limit);
    words
}
