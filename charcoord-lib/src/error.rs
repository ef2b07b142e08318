use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Everything that can stop an export run
#[derive(Debug)]
pub enum ExportError {
    /// The input file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The input was not valid JSON
    Json(serde_json::Error),
    /// The JSON root was something other than an object
    NotAnObject,
    /// The root object has no `characters` key
    MissingCharacters,
    /// `characters` was present but was not an object
    CharactersNotAnObject,
    /// A character record was malformed or lacked a required field
    InvalidCharacter {
        id: String,
        source: serde_json::Error,
    },
    /// Writing an output line failed
    Write(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportError::Io { path, .. } => write!(f, "couldn't read {}", path.display()),
            ExportError::Json(_) => write!(f, "couldn't parse JSON"),
            ExportError::NotAnObject => write!(f, "top level of the document is not an object"),
            ExportError::MissingCharacters => write!(f, "document has no \"characters\" key"),
            ExportError::CharactersNotAnObject => write!(f, "\"characters\" is not an object"),
            ExportError::InvalidCharacter { id, .. } => {
                write!(f, "bad metrics for character {:?}", id)
            }
            ExportError::Write(_) => write!(f, "couldn't write output"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
            ExportError::Json(e) => Some(e),
            ExportError::InvalidCharacter { source, .. } => Some(source),
            ExportError::Write(e) => Some(e),
            _ => None,
        }
    }
}
