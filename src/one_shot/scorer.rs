use std::convert::Infallible;

use tracing::{debug, trace};

use crate::alignment::match_words;
use crate::error::Error;
use crate::expand::{ConcretePattern, ConcreteSlot, expand, expansion_count};
use crate::matrix::SimilarityMatrix;
use crate::order::order_score;
use crate::pattern::Pattern;
use crate::{Config, Match};

/// A pattern expanded once, ready to score any number of strings.
///
/// Holds no state between calls, so a shared `&Scorer` may be used from several threads as long
/// as the comparator allows it.
#[derive(Debug, Clone)]
pub struct Scorer {
    patterns: Vec<ConcretePattern>,
    config: Config,
}

impl Scorer {
    pub fn new(pattern: &Pattern, config: &Config) -> Result<Self, Error> {
        let count = expansion_count(pattern);
        if let Some(limit) = config.max_expansions {
            if count > limit {
                return Err(Error::TooManyExpansions { count, limit });
            }
        }

        let patterns = expand(pattern);
        debug!(slots = pattern.len(), expansions = patterns.len(), "expanded pattern");

        Ok(Self {
            patterns,
            config: config.clone(),
        })
    }

    /// The composite-free patterns tried for every string
    pub fn patterns(&self) -> &[ConcretePattern] {
        &self.patterns
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score<W: AsRef<str>>(
        &self,
        words: &[W],
        compare: impl Fn(&str, &str) -> f64,
    ) -> Result<f64, Error> {
        self.try_score(words, |choice: &str, candidate: &str| {
            Ok::<_, Infallible>(compare(choice, candidate))
        })
    }

    /// Best score over all expansions of the pattern. The first comparator error (or rejected
    /// similarity) aborts the call.
    pub fn try_score<W, E, F>(&self, words: &[W], mut compare: F) -> Result<f64, Error<E>>
    where
        W: AsRef<str>,
        F: FnMut(&str, &str) -> Result<f64, E>,
    {
        if words.is_empty() {
            return Ok(0.0);
        }

        let policy = self.config.out_of_range;
        let mut compare = |choice: &str, candidate: &str| -> Result<f64, Error<E>> {
            let similarity = compare(choice, candidate).map_err(Error::Compare)?;
            policy
                .apply(similarity, choice, candidate)
                .map_err(|err: Error| err.widen())
        };

        let mut best: Option<f64> = None;
        for pattern in &self.patterns {
            let score = score_concrete(pattern, words, &mut compare)?;
            best = Some(best.map_or(score, |best| best.max(score)));
        }

        let score = best.unwrap_or(0.0);
        trace!(words = words.len(), score, "scored string");
        Ok(score)
    }

    /// Scores every haystack, dropping those under `min_score` and sorting when configured.
    /// [`Match::index`] refers to the position in `haystacks`.
    pub fn try_rank_list<H, W, E, F>(
        &self,
        haystacks: &[H],
        mut compare: F,
    ) -> Result<Vec<Match>, Error<E>>
    where
        H: AsRef<[W]>,
        W: AsRef<str>,
        F: FnMut(&str, &str) -> Result<f64, E>,
    {
        assert!(
            haystacks.len() < (u32::MAX as usize),
            "haystack index overflow"
        );

        let mut matches = Vec::with_capacity(haystacks.len());
        for (index, words) in haystacks.iter().enumerate() {
            let score = self.try_score(words.as_ref(), &mut compare)?;
            if self.config.min_score.is_some_and(|min| score < min) {
                continue;
            }
            matches.push(Match {
                score,
                index: index as u32,
            });
        }

        if self.config.sort {
            #[cfg(feature = "parallel_sort")]
            {
                use rayon::prelude::*;
                matches.par_sort_unstable();
            }
            #[cfg(not(feature = "parallel_sort"))]
            matches.sort_unstable();
        }

        debug!(
            haystacks = haystacks.len(),
            kept = matches.len(),
            "ranked haystacks"
        );
        Ok(matches)
    }
}

/// Scores one composite-free pattern: the summed similarity of the aligned words, averaged over
/// the string length and weighted by the order score. Empty strings score 0.
pub fn score_concrete<W, E, F>(slots: &[ConcreteSlot], words: &[W], compare: F) -> Result<f64, E>
where
    W: AsRef<str>,
    F: FnMut(&str, &str) -> Result<f64, E>,
{
    if words.is_empty() {
        return Ok(0.0);
    }

    let matrix = SimilarityMatrix::build(slots, words, compare)?;
    let matches = match_words(&matrix);
    let similarity = matches.iter().map(|m| m.score).sum::<f64>();

    Ok(similarity / words.len() as f64 * order_score(&matches, words.len()))
}
