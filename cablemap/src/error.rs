use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("row {row}, column {column}: cell is not numeric")]
    Format { row: usize, column: usize },
    #[error("required role '{role}' is not bound to any column")]
    Configuration { role: &'static str },
    #[error("{what} exceeds ingestion cap of {cap}")]
    CapsExceeded { what: &'static str, cap: usize },
    #[error("row {row}, column {column}: coordinate out of bounds")]
    OutOfBounds { row: usize, column: usize },
    #[error("malformed table document: {0}")]
    Document(String),
}

impl ParseError {
    /// Stable code for the host-facing error objects.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Format { .. } => "format",
            ParseError::Configuration { .. } => "configuration",
            ParseError::CapsExceeded { .. } => "caps_exceeded",
            ParseError::OutOfBounds { .. } => "out_of_bounds",
            ParseError::Document(_) => "json_parse",
        }
    }
}
