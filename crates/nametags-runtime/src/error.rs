use nametags_types::PlayerId;
use std::fmt;

/// Result type for nametags-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// A companion plugin this system cannot run without is absent
    MissingDependency(String),

    /// The player disconnected while being processed
    PlayerOffline(PlayerId),

    /// No connected player has this name
    UnknownPlayer(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::MissingDependency(name) => write!(f, "Required plugin not enabled: {}", name),
            Error::PlayerOffline(id) => write!(f, "Player {} is not online", id),
            Error::UnknownPlayer(name) => write!(f, "Unknown player: {}", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::MissingDependency(_)
            | Error::PlayerOffline(_)
            | Error::UnknownPlayer(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
