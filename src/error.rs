use num_bigint::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReconstructError>;

/// Everything that can abort a reconstruction. None of these are retried:
/// a single bad share fails the whole computation.
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("digit value {digit} out of range for base {base}")]
    DigitOutOfRange { digit: u32, base: u32 },

    #[error("base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),

    #[error("duplicate x-coordinate {0}")]
    DuplicateXValue(BigInt),

    /// The exact rational P(x) is not an integer, so the points do not lie on
    /// a single integer polynomial.
    #[error("interpolated value {numerator}/{denominator} is not an integer")]
    NonIntegralTerm {
        numerator: BigInt,
        denominator: BigInt,
    },

    #[error("cannot interpolate an empty point set")]
    EmptyPointSet,

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("not enough points: need {needed}, got {available}")]
    InsufficientPoints { needed: usize, available: usize },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
