use std::fmt;

/// Why a file could not be turned into a set of tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The file could not be probed or parsed as a known audio container.
    Unsupported(String),
    /// The container parsed, but carries no tag block at all.
    NoTags,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::Unsupported(reason) => {
                write!(f, "Unsupported or corrupted file: {}", reason)
            }
            ReadError::NoTags => write!(f, "No tags found"),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<lofty::error::LoftyError> for ReadError {
    fn from(error: lofty::error::LoftyError) -> Self {
        ReadError::Unsupported(error.to_string())
    }
}

impl From<std::io::Error> for ReadError {
    fn from(error: std::io::Error) -> Self {
        ReadError::Unsupported(error.to_string())
    }
}
