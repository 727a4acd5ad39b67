use std::fmt;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NnError>;

/// Errors produced by the network when its inputs or files are invalid.
#[derive(Debug)]
pub enum NnError {
    /// A vector or file did not have the length the configuration implies.
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "input", "model file").
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// A dataset that must hold at least one example was empty.
    EmptyDataset { what: &'static str },

    /// The network or training configuration is unusable.
    InvalidConfig(String),

    /// A token in a model file could not be read as a number.
    Parse { position: usize, token: String },

    Io(std::io::Error),

    Json(serde_json::Error),
}

impl fmt::Display for NnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NnError::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            NnError::EmptyDataset { what } => write!(f, "{what} dataset is empty"),
            NnError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            NnError::Parse { position, token } => {
                write!(f, "value #{position} ({token:?}) is not a decimal number")
            }
            NnError::Io(e) => write!(f, "i/o error: {e}"),
            NnError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for NnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NnError::Io(e) => Some(e),
            NnError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NnError {
    fn from(e: std::io::Error) -> Self {
        NnError::Io(e)
    }
}

impl From<serde_json::Error> for NnError {
    fn from(e: serde_json::Error) -> Self {
        NnError::Json(e)
    }
}

/// Fails with `ShapeMismatch` unless `got == expected`.
pub(crate) fn check_len(what: &'static str, got: usize, expected: usize) -> Result<()> {
    if got == expected {
        Ok(())
    } else {
        Err(NnError::ShapeMismatch { what, got, expected })
    }
}
