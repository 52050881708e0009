//! Rewrites patterns containing composite choices into composite-free patterns.
//!
//! A phrase can't be matched as a single slot, since its words must land on contiguous string
//! positions. Instead, each complex slot is replaced by one of its alternatives and every
//! combination is scored on its own, keeping the best.
//!
//! ```text
//! pattern:  [["i"], {["new", "york"], ["big", "apple"], "nyc", "ny"}, ["trip"]]
//!
//! alternatives for slot 1:
//!   ["new"], ["york"]
//!   ["big"], ["apple"]
//!   ["nyc", "ny"]
//!
//! concrete patterns:
//!   [["i"], ["new"], ["york"], ["trip"]]
//!   [["i"], ["big"], ["apple"], ["trip"]]
//!   [["i"], ["nyc", "ny"], ["trip"]]
//! ```

use itertools::Itertools;

use crate::pattern::{Choice, Pattern, Slot};

/// Slot of single-word alternatives
pub type ConcreteSlot = Vec<String>;
/// Pattern free of composite choices
pub type ConcretePattern = Vec<ConcreteSlot>;

/// Every composite-free pattern to try for `pattern`. Complex slots are replaced in place by one
/// of their alternatives; the first complex slot varies slowest. Without complex slots the only
/// candidate is the pattern itself.
pub fn expand(pattern: &Pattern) -> Vec<ConcretePattern> {
    let complex = pattern
        .slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_complex())
        .map(|(index, slot)| (index, alternatives(slot)))
        .collect::<Vec<_>>();

    if complex.is_empty() {
        return vec![pattern.slots.iter().map(concrete_slot).collect()];
    }

    // Composite-free slots are shared by every combination
    let base = pattern
        .slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| !slot.is_complex())
        .map(|(index, slot)| (index, concrete_slot(slot)))
        .collect::<Vec<_>>();

    complex
        .iter()
        .map(|(_, alternatives)| alternatives.iter())
        .multi_cartesian_product()
        .map(|chosen| {
            let mut concrete = Vec::with_capacity(pattern.len());
            let mut base = base.iter().peekable();
            for ((index, _), alternative) in complex.iter().zip(chosen) {
                while let Some((_, slot)) = base.next_if(|(i, _)| i < index) {
                    concrete.push(slot.clone());
                }
                concrete.extend(alternative.iter().cloned());
            }
            concrete.extend(base.map(|(_, slot)| slot.clone()));
            concrete
        })
        .collect()
}

/// Number of patterns [`expand`] produces, without building them. Saturates at `usize::MAX`.
pub fn expansion_count(pattern: &Pattern) -> usize {
    pattern
        .slots
        .iter()
        .filter(|slot| slot.is_complex())
        .map(|slot| alternatives(slot).len())
        .fold(1usize, usize::saturating_mul)
}

/// Each phrase as a run of one-word slots, followed by the single-word choices gathered into
/// one slot. Empty alternatives are dropped; if nothing is left the slot simply vanishes.
fn alternatives(slot: &Slot) -> Vec<ConcretePattern> {
    let mut alternatives = slot
        .choices
        .iter()
        .filter_map(|choice| match choice {
            Choice::Composite(words) if !words.is_empty() => {
                Some(words.iter().map(|word| vec![word.clone()]).collect())
            }
            _ => None,
        })
        .collect::<Vec<ConcretePattern>>();

    let singles = slot.single_words().map(str::to_string).collect::<Vec<_>>();
    if !singles.is_empty() {
        alternatives.push(vec![singles]);
    }

    if alternatives.is_empty() {
        alternatives.push(vec![]);
    }
    alternatives
}

fn concrete_slot(slot: &Slot) -> ConcreteSlot {
    slot.single_words().map(str::to_string).collect()
}
