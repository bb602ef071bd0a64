use thiserror::Error;

/// Failures that abort a whole parse.
/// Section-level misses never surface here; they become `SectionResult` values.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Resume file not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document container: {0}")]
    Archive(String),

    #[error("Malformed document XML: {0}")]
    Xml(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

impl From<zip::result::ZipError> for ParseError {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(io) => ParseError::Io(io),
            other => ParseError::Archive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for ParseError {
    fn from(e: quick_xml::Error) -> Self {
        ParseError::Xml(e.to_string())
    }
}
