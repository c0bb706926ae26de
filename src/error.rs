use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum HarnessError {
    Io(io::Error),
    Image {
        path: PathBuf,
        source: png::EncodingError,
    },
    Script(String),
    ScriptParse(serde_json::Error),
    BufferSize {
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Io(err) => write!(f, "I/O error: {}", err),
            HarnessError::Image { path, source } => {
                write!(f, "Failed to write image {:?}: {}", path, source)
            }
            HarnessError::Script(msg) => write!(f, "Invalid script: {}", msg),
            HarnessError::ScriptParse(err) => write!(f, "Script parse error: {}", err),
            HarnessError::BufferSize { expected, found } => write!(
                f,
                "Pixel buffer size mismatch: expected {} pixels, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io(err) => Some(err),
            HarnessError::Image { source, .. } => Some(source),
            HarnessError::ScriptParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        HarnessError::Io(err)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::ScriptParse(err)
    }
}
