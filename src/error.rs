use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Error taxonomy shared by both utilities
// ---------------------------------------------------------------------------

/// Every failure the numeric core can report.
///
/// Errors surface to the caller unchanged; nothing in the library retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token that is not a valid floating-point literal.
    #[error("line {line}: '{token}' is not a number")]
    Parse { token: String, line: usize },

    /// Weights were supplied but do not line up with the numbers.
    #[error("weights and numbers must have same length ({numbers} numbers, {weights} weights)")]
    LengthMismatch { numbers: usize, weights: usize },

    /// Division by zero, e.g. the mean of nothing or pi from zero points.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Unreadable or missing input, or an unwritable result destination.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A structured input (CSV / JSON) that could not be decoded.
    #[error("{}: {message}", path.display())]
    Format { path: PathBuf, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }
}
