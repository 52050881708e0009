//! Slotmatch scores how well a tokenized string matches a structured query. The query (a
//! [`Pattern`]) is a sequence of slots, each offering alternative choices: single words or
//! composite phrases that must appear as contiguous words. Word similarity is supplied by the
//! caller, so the same scoring works with exact matching, edit distance, embeddings and so on.
//!
//! Scoring a string against a pattern:
//! - Expand every slot holding phrases into composite-free patterns ([`expand`])
//! - For each one, build the word [`SimilarityMatrix`] and align slots to words by iterative
//!   mutual best match ([`alignment`])
//! - Weight the average similarity of the aligned words by how well they keep the pattern's
//!   order ([`order`])
//! - Keep the best score across expansions
//!
//! Scores can be negative and only make sense relative to each other, as a sort key for strings
//! scored against the same pattern.
//!
//! # Example: using `score`
//!
//! ```rust
//! use slotmatch::{score, Pattern};
//!
//! let exact = |a: &str, b: &str| if a == b { 1.0 } else { 0.0 };
//! let pattern = Pattern::from_words(["cat", "sat"]);
//!
//! assert_eq!(score(&pattern, &["cat", "sat"], exact), 1.0);
//! assert!(score(&pattern, &["sat", "cat"], exact) < 1.0);
//! ```
//!
//! # Example: composite choices
//!
//! ```rust
//! use slotmatch::{score, Choice, Pattern, Slot};
//!
//! let exact = |a: &str, b: &str| if a == b { 1.0 } else { 0.0 };
//! let pattern = Pattern::new([
//!     Slot::new([Choice::composite(["new", "york"]), Choice::word("nyc")]),
//!     Slot::words(["pizza"]),
//! ]);
//!
//! let phrase = score(&pattern, &["new", "york", "pizza"], exact);
//! let abbreviation = score(&pattern, &["nyc", "pizza"], exact);
//! assert_eq!(phrase, 1.0);
//! assert_eq!(abbreviation, 1.0);
//! ```
//!
//! # Example: using `Scorer`
//!
//! Useful when scoring one pattern against many strings, since the pattern is only expanded once.
//!
//! ```rust
//! use slotmatch::{Config, Pattern, Scorer};
//!
//! let exact = |a: &str, b: &str| if a == b { 1.0 } else { 0.0 };
//! let haystacks = [vec!["the", "cat", "sat"], vec!["a", "dog"], vec!["cat", "sat"]];
//!
//! let scorer = Scorer::new(&Pattern::from_words(["cat", "sat"]), &Config::default()).unwrap();
//! let matches = scorer
//!     .try_rank_list(&haystacks, |a: &str, b: &str| Ok::<_, std::convert::Infallible>(exact(a, b)))
//!     .unwrap();
//! assert_eq!(matches[0].index, 2);
//! ```

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod alignment;
mod error;
pub mod expand;
pub mod matrix;
mod one_shot;
pub mod order;
mod pattern;

pub use error::Error;
pub use matrix::SimilarityMatrix;
pub use one_shot::{Scorer, rank_list, score, score_concrete, try_score};
pub use pattern::{Choice, Pattern, Slot};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    pub score: f64,
    /// Index of the match in the original list of haystacks
    pub index: u32,
}

impl PartialOrd for Match {
    fn partial_cmp(&self, other: &Match) -> Option<Ordering> {
        Some(std::cmp::Ord::cmp(self, other))
    }
}
impl Ord for Match {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .reverse()
            .then_with(|| self.index.cmp(&other.index))
    }
}
impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Match {}

/// What to do with similarities outside `[0, 1]` returned by the word comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutOfRange {
    /// Use the value as returned
    #[default]
    Trust,
    /// Clamp into `[0, 1]`, NaN becomes 0
    Clamp,
    /// Fail the scoring call with [`Error::SimilarityOutOfRange`]
    Reject,
}

impl OutOfRange {
    pub fn apply(self, similarity: f64, choice: &str, candidate: &str) -> Result<f64, Error> {
        if (0.0..=1.0).contains(&similarity) {
            return Ok(similarity);
        }

        match self {
            OutOfRange::Trust => Ok(similarity),
            OutOfRange::Clamp => {
                tracing::trace!(similarity, choice, candidate, "clamping similarity");
                Ok(if similarity.is_nan() {
                    0.0
                } else {
                    similarity.clamp(0.0, 1.0)
                })
            }
            OutOfRange::Reject => Err(Error::SimilarityOutOfRange {
                value: similarity,
                choice: choice.to_string(),
                candidate: candidate.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The maximum number of composite-free patterns a pattern may expand to. The count grows
    /// multiplicatively with the number of slots holding phrases.
    pub max_expansions: Option<usize>,
    /// Handling of comparator results outside `[0, 1]`
    pub out_of_range: OutOfRange,
    /// Haystacks scoring below this are dropped from ranked results
    pub min_score: Option<f64>,
    /// Sort ranked results by score (descending)
    pub sort: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_expansions: None,
            out_of_range: OutOfRange::Trust,
            min_score: None,
            sort: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_order() {
        let mut matches = vec![
            Match { score: 0.2, index: 0 },
            Match { score: -0.5, index: 1 },
            Match { score: 0.9, index: 2 },
            Match { score: 0.2, index: 3 },
        ];
        matches.sort_unstable();
        assert_eq!(
            matches.iter().map(|m| m.index).collect::<Vec<_>>(),
            vec![2, 0, 3, 1]
        );
    }

    #[test]
    fn test_in_range_untouched() {
        for policy in [OutOfRange::Trust, OutOfRange::Clamp, OutOfRange::Reject] {
            assert_eq!(policy.apply(0.25, "a", "b"), Ok(0.25));
        }
    }
}
