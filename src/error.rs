use std::convert::Infallible;

/// Failures of a scoring call. `E` is the error type of the word comparator, which is
/// [`Infallible`] when the comparator can't fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error<E = Infallible> {
    #[error("word comparison failed: {0}")]
    Compare(E),

    #[error("pattern expands to {count} concrete patterns, limit is {limit}")]
    TooManyExpansions { count: usize, limit: usize },

    #[error("similarity {value} between {choice:?} and {candidate:?} is outside [0, 1]")]
    SimilarityOutOfRange {
        value: f64,
        choice: String,
        candidate: String,
    },
}

impl Error {
    /// Errors raised without calling the comparator fit any comparator error type
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Error::Compare(never) => match never {},
            Error::TooManyExpansions { count, limit } => Error::TooManyExpansions { count, limit },
            Error::SimilarityOutOfRange {
                value,
                choice,
                candidate,
            } => Error::SimilarityOutOfRange {
                value,
                choice,
                candidate,
            },
        }
    }
}
