use thiserror::Error;

/// Result type for radstruct operations
pub type Result<T> = std::result::Result<T, RadstructError>;

/// Error types for radstruct operations
#[derive(Error, Debug)]
pub enum RadstructError {
    /// The linguistic analyzer could not process the document
    #[error("Analyzer failure: {0}")]
    AnalyzerFailure(String),

    /// Unknown finding category name
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Malformed synonym catalog
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RadstructError {
    /// Returns whether this error came from the linguistic analyzer
    pub fn is_analyzer_failure(&self) -> bool {
        matches!(self, RadstructError::AnalyzerFailure(_))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for RadstructError {
    fn from(e: serde_json::Error) -> Self {
        RadstructError::Catalog(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_missing() -> Result<String> {
        Ok(std::fs::read_to_string("/nonexistent/radstruct/caption.txt")?)
    }

    #[test]
    fn test_io_error_is_not_analyzer_failure() {
        let err = read_missing().unwrap_err();
        assert!(matches!(err, RadstructError::IoError(_)));
        assert!(!err.is_analyzer_failure());
    }

    #[test]
    fn test_only_analyzer_variant_is_analyzer_failure() {
        assert!(RadstructError::AnalyzerFailure("parse".to_string()).is_analyzer_failure());
        assert!(!RadstructError::Catalog("bad".to_string()).is_analyzer_failure());
        assert!(!RadstructError::InvalidCategory("Hernia".to_string()).is_analyzer_failure());
    }
}
