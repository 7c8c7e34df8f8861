/// Lingvec error types
#[derive(Debug, thiserror::Error)]
pub enum LingvecError {
    /// No text supplied, or text is blank after trimming
    #[error("No text provided")]
    EmptyInput,

    /// Language tag outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Underlying model invocation failed
    #[error("Encoding failure: {0}")]
    EncodingFailure(String),

    /// Similarity inputs of unequal length
    #[error("Embedding dimensions do not match: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LingvecError {
    /// Create unsupported language error
    pub fn unsupported_language<S: Into<String>>(tag: S) -> Self {
        Self::UnsupportedLanguage(tag.into())
    }

    /// Create encoding failure
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Self::EncodingFailure(msg.into())
    }

    /// Create dimension mismatch error
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }
}

// HTTP response conversion
impl LingvecError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyInput => 400,
            Self::UnsupportedLanguage(_) => 400,
            Self::DimensionMismatch { .. } => 400,
            Self::InvalidInput(_) => 400,
            Self::Json(_) => 400,
            Self::EncodingFailure(_) => 500,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
            Self::Network(_) => 503,
        }
    }

    /// Short machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UnsupportedLanguage(_) => "unsupported_language",
            Self::EncodingFailure(_) => "encoding_failure",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::Config(_) => "config",
            Self::InvalidInput(_) | Self::Json(_) => "invalid_input",
            Self::Network(_) => "network",
            Self::Io(_) | Self::Other(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_reports_both_lengths() {
        let err = LingvecError::dimension_mismatch(384, 768);
        assert_eq!(err.to_string(), "Embedding dimensions do not match: 384 vs 768");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.kind(), "dimension_mismatch");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(LingvecError::EmptyInput.status_code(), 400);
        assert_eq!(LingvecError::unsupported_language("fr").status_code(), 400);
        assert_eq!(LingvecError::encoding("oom").status_code(), 500);
        assert_eq!(LingvecError::network("refused").status_code(), 503);
    }
}
