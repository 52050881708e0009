//! Word alignment between pattern slots and string positions.
//!
//! The aligner links a slot and a word only when each is the other's best remaining option
//! (iterative mutual best match). This is a relaxed stable assignment in O(rounds * n^2), not
//! a globally optimal one: a Hungarian style solver would find higher totals in some cases,
//! but would also change the scores existing callers rank by.
//!
//! ```text
//! string: ["the", "cat", "sat"]    pattern: [["cat"], ["sat"]]
//!
//!          cat  sat
//! the     [0    0  ]
//! cat     [1    0  ]     slot 0 -> best row 1, row 1 -> best slot 0, commit (0, 1)
//! sat     [0    1  ]     slot 1 -> best row 2, row 2 -> best slot 1, commit (1, 2)
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::matrix::SimilarityMatrix;

/// Alignment of one pattern slot to (at most) one string position
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotMatch {
    /// Index of the slot in the pattern
    pub slot: usize,
    /// Index of the matched word in the string, `None` when unmatched
    pub word: Option<usize>,
    /// Similarity of the matched pair, 0 when unmatched
    pub score: f64,
}

impl SlotMatch {
    pub fn unmatched(slot: usize) -> Self {
        Self {
            slot,
            word: None,
            score: 0.0,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.word.is_some()
    }
}

/// Returns one [`SlotMatch`] per column of the matrix, in slot order. Matched words are
/// pairwise distinct. Among equal maxima the lowest index always wins.
pub fn match_words(matrix: &SimilarityMatrix) -> Vec<SlotMatch> {
    let mut matches = (0..matrix.columns())
        .map(SlotMatch::unmatched)
        .collect::<Vec<_>>();

    // Kept in ascending order so that ties resolve to the lowest index
    let mut free_slots = (0..matrix.columns()).collect::<Vec<usize>>();
    let mut free_rows = (0..matrix.rows()).collect::<Vec<usize>>();

    let mut progress = true;
    while progress && !free_slots.is_empty() && !free_rows.is_empty() {
        progress = false;

        for slot in free_slots.clone() {
            let Some(row) = best_row(matrix, &free_rows, slot) else {
                continue;
            };
            if best_slot(matrix, &free_slots, row) != Some(slot) {
                continue;
            }

            matches[slot] = SlotMatch {
                slot,
                word: Some(row),
                score: matrix.get(row, slot),
            };
            free_slots.retain(|&s| s != slot);
            free_rows.retain(|&r| r != row);
            progress = true;

            if free_rows.is_empty() {
                break;
            }
        }
    }

    matches
}

/// Free row with the strictly greatest positive score in the slot's column
fn best_row(matrix: &SimilarityMatrix, free_rows: &[usize], slot: usize) -> Option<usize> {
    let mut best = None;
    let mut best_score = 0.0;
    for &row in free_rows {
        let score = matrix.get(row, slot);
        if score > best_score {
            best = Some(row);
            best_score = score;
        }
    }
    best
}

/// Free slot with the strictly greatest positive score in the row
fn best_slot(matrix: &SimilarityMatrix, free_slots: &[usize], row: usize) -> Option<usize> {
    let scores = matrix.row(row);
    let mut best = None;
    let mut best_score = 0.0;
    for &slot in free_slots {
        if scores[slot] > best_score {
            best = Some(slot);
            best_score = scores[slot];
        }
    }
    best
}
