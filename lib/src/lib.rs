#![cfg_attr(feature = "unstable", feature(test))]

//! Filters a word list using the Wordle feedback from the guesses made so far.
//!
//! Feedback for each guess is written as a [`Spec`], such as `"we!ar?y"`, and all the specs are
//! combined into a [`SpecSet`]:
//!
//! ```
//! use rs_wordle_filter::*;
//!
//! let specs = SpecSet::from_specs(["we!ar?y", "te!nor?"])?;
//! let bank = WordBank::from_iterator(["tears", "wears", "tenor", "total", "rebus"]);
//!
//! assert_eq!(get_possible_words(&specs, &bank), vec!["rebus"]);
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod results;
mod spec;
mod spec_set;

pub use data::*;
pub use results::*;
pub use spec::*;
pub use spec_set::*;
