use std::fmt;
use std::path::PathBuf;

/// Error returned when a font asset cannot be loaded.
#[derive(Debug)]
pub enum FontLoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The bytes are not a usable TrueType/OpenType font.
    Parse { path: PathBuf, reason: String },
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Io { path, source } => {
                write!(f, "font load error: cannot read {}: {source}", path.display())
            }
            FontLoadError::Parse { path, reason } => {
                write!(f, "font load error: {} is not a valid font: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::Io { source, .. } => Some(source),
            FontLoadError::Parse { .. } => None,
        }
    }
}
