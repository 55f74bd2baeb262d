/// Error type shared by the core math, parsers and sketches
use thiserror::Error;

/// Everything that can go wrong in the core is a caller defect or bad input text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsoError {
    /// Left operand columns differ from right operand rows.
    #[error("cannot multiply a {}x{} matrix by a {}x{} matrix", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        /// (rows, columns) of the left operand
        left: (usize, usize),
        /// (rows, columns) of the right operand
        right: (usize, usize),
    },

    #[error("cannot remap over an empty interval starting and ending at {lo}")]
    DegenerateInterval { lo: f64 },

    #[error("animation period must be positive and finite, got {0}")]
    InvalidPeriod(f64),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid sketch config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, IsoError>;
