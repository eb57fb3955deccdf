use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Return series has {dates} period dates but {returns} return values")]
    MisalignedIndex { dates: usize, returns: usize },

    #[error("Return series dates must be strictly chronological: {prev} is not before {next}")]
    UnorderedDates {
        prev: chrono::NaiveDate,
        next: chrono::NaiveDate,
    },

    #[error("Return series contains a non-finite value at position {0}")]
    NonFiniteReturn(usize),

    #[error("Ratio '{metric}' is undefined (zero denominator)")]
    UndefinedRatio { metric: String },
}
