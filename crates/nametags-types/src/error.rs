use std::fmt;

/// Result type for nametags-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Name does not match any formatting code
    UnknownCode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCode(name) => write!(f, "Unknown formatting code: {}", name),
        }
    }
}

impl std::error::Error for Error {}
