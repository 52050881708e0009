use std::convert::Infallible;

use crate::error::Error;
use crate::expand::expand;
use crate::pattern::Pattern;
use crate::{Config, Match};

mod scorer;
pub use scorer::{Scorer, score_concrete};

/// Scores `words` against `pattern`, trusting `compare` to return similarities in `[0, 1]`.
///
/// The result is only meaningful as a sort key among strings scored against the same pattern.
/// Empty strings and empty patterns score 0.
pub fn score<W: AsRef<str>>(
    pattern: &Pattern,
    words: &[W],
    compare: impl Fn(&str, &str) -> f64,
) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    expand(pattern)
        .iter()
        .map(|slots| {
            let Ok(score) = score_concrete(slots, words, |choice: &str, candidate: &str| {
                Ok::<_, Infallible>(compare(choice, candidate))
            });
            score
        })
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Like [`score`], with a comparator that may fail. The first failure is returned as
/// [`Error::Compare`] and no score is produced.
pub fn try_score<W, E, F>(pattern: &Pattern, words: &[W], compare: F) -> Result<f64, Error<E>>
where
    W: AsRef<str>,
    F: FnMut(&str, &str) -> Result<f64, E>,
{
    Scorer::new(pattern, &Config::default())
        .map_err(|err: Error| err.widen())?
        .try_score(words, compare)
}

/// Scores each haystack (a tokenized string) against the pattern and returns the matches,
/// sorted by descending score when `config.sort` is set.
pub fn rank_list<H, W>(
    pattern: &Pattern,
    haystacks: &[H],
    compare: impl Fn(&str, &str) -> f64,
    config: &Config,
) -> Result<Vec<Match>, Error>
where
    H: AsRef<[W]>,
    W: AsRef<str>,
{
    Scorer::new(pattern, config)?.try_rank_list(haystacks, |choice: &str, candidate: &str| {
        Ok::<_, Infallible>(compare(choice, candidate))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Choice, Slot};

    fn exact(a: &str, b: &str) -> f64 {
        if a == b { 1.0 } else { 0.0 }
    }

    #[test]
    fn test_perfect_alignment() {
        let pattern = Pattern::from_words(["cat", "sat"]);
        assert_eq!(score(&pattern, &["cat", "sat"], exact), 1.0);
    }

    #[test]
    fn test_order_sensitivity() {
        let pattern = Pattern::from_words(["cat", "sat"]);
        let swapped = score(&pattern, &["sat", "cat"], exact);
        assert!(swapped < score(&pattern, &["cat", "sat"], exact));
    }

    #[test]
    fn test_coverage() {
        // Unmatched string words dilute the score
        let pattern = Pattern::from_words(["cat", "sat"]);
        let score = score(&pattern, &["the", "cat", "sat", "down"], exact);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_empty_inputs() {
        let pattern = Pattern::from_words(["cat"]);
        assert_eq!(score::<&str>(&pattern, &[], exact), 0.0);
        assert_eq!(score(&Pattern::default(), &["cat"], exact), 0.0);
    }

    #[test]
    fn test_composite_benefit() {
        let with_composite = Pattern::new([Slot::new([
            Choice::composite(["new", "york"]),
            Choice::word("boston"),
        ])]);
        let without_composite = Pattern::new([Slot::words(["boston"])]);
        let words = ["i", "love", "new", "york"];

        let with_score = score(&with_composite, &words, exact);
        assert_eq!(with_score, 0.5);
        assert!(with_score >= score(&without_composite, &words, exact));
    }

    #[test]
    fn test_best_expansion_wins() {
        let pattern = Pattern::new([
            Slot::words(["flight"]),
            Slot::new([Choice::composite(["los", "angeles"]), Choice::word("la")]),
        ]);
        assert_eq!(score(&pattern, &["flight", "la"], exact), 1.0);
        assert_eq!(score(&pattern, &["flight", "los", "angeles"], exact), 1.0);
    }

    #[test]
    fn test_try_score() {
        let pattern = Pattern::from_words(["cat", "sat"]);
        let ok = try_score(&pattern, &["cat", "sat"], |a: &str, b: &str| {
            Ok::<_, String>(exact(a, b))
        });
        assert_eq!(ok, Ok(1.0));

        let err = try_score(&pattern, &["cat", "sat"], |_: &str, _: &str| {
            Err::<f64, _>("timeout".to_string())
        });
        assert_eq!(err, Err(Error::Compare("timeout".to_string())));
    }

    #[test]
    fn test_rank_list() {
        let pattern = Pattern::from_words(["cat", "sat"]);
        let haystacks = [vec!["the", "cat", "sat"], vec!["cat", "sat"]];
        let matches = rank_list(&pattern, &haystacks, exact, &Config::default()).unwrap();
        assert_eq!(matches[0].index, 1);
        assert_eq!(matches[1].index, 0);

        let unsorted = Config {
            sort: false,
            ..Config::default()
        };
        let matches = rank_list(&pattern, &haystacks, exact, &unsorted).unwrap();
        assert_eq!(matches[0].index, 0);
    }
}
