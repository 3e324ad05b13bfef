use std::fmt;

/// A tagged file that is missing something the catalog cannot do without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    MissingArtist,
    MissingTrackArtist,
    MissingAlbum,
    MissingTitle,
    MissingTrackNumber,
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IngestError::MissingArtist => write!(f, "Missing album artist and artist tags"),
            IngestError::MissingTrackArtist => write!(f, "Missing artist tag"),
            IngestError::MissingAlbum => write!(f, "Missing album tag"),
            IngestError::MissingTitle => write!(f, "Missing title tag"),
            IngestError::MissingTrackNumber => write!(f, "Missing track number tag"),
        }
    }
}

impl std::error::Error for IngestError {}
