/// Error types for presentation extraction.
use thiserror::Error;

/// Result type for presentation extraction.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for presentation extraction.
///
/// Faults local to a single shape or a slide's notes never surface here;
/// the loader absorbs those into typed absence. These variants cover the
/// fatal cases: the container cannot be opened, a required part is missing
/// or malformed, or the output cannot be serialized.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable OPC/ZIP container
    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    /// A required package part or relationship is missing
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// XML parsing error in a required part
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
