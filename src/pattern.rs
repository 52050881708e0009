#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One way of satisfying a [`Slot`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Choice {
    /// A single word
    Word(String),
    /// An ordered phrase that must be matched as contiguous words (e.g. "new york")
    Composite(Vec<String>),
}

impl Choice {
    pub fn word(word: impl Into<String>) -> Self {
        Choice::Word(word.into())
    }

    /// Builds a phrase choice. A phrase of a single word is just a word.
    pub fn composite<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut words = words.into_iter().map(Into::into).collect::<Vec<String>>();
        if words.len() == 1 {
            return Choice::Word(words.remove(0));
        }
        Choice::Composite(words)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Choice::Composite(_))
    }
}

impl From<&str> for Choice {
    fn from(word: &str) -> Self {
        Choice::Word(word.to_string())
    }
}

impl From<String> for Choice {
    fn from(word: String) -> Self {
        Choice::Word(word)
    }
}

/// A position in a [`Pattern`], satisfied by any one of its choices (synonyms, alternatives)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    pub choices: Vec<Choice>,
}

impl Slot {
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// Slot whose choices are all single words
    pub fn words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::new(words.into_iter().map(|w| Choice::Word(w.into())))
    }

    /// A slot holding at least one composite choice must be expanded before matching
    pub fn is_complex(&self) -> bool {
        self.choices.iter().any(Choice::is_composite)
    }

    /// The single-word choices, in order
    pub fn single_words(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().filter_map(|choice| match choice {
            Choice::Word(word) => Some(word.as_str()),
            Choice::Composite(_) => None,
        })
    }
}

impl<C: Into<Choice>> FromIterator<C> for Slot {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into))
    }
}

/// Ordered sequence of slots making up a query. Order drives the order score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    pub slots: Vec<Slot>,
}

impl Pattern {
    pub fn new(slots: impl IntoIterator<Item = Slot>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// One single-word slot per word (e.g. `["cat", "sat"]` becomes `[["cat"], ["sat"]]`)
    pub fn from_words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::new(words.into_iter().map(|w| Slot::words([w])))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromIterator<Slot> for Pattern {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        Self::new(iter)
    }
}
