use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindexError {
    #[error("Query must not be empty")]
    InvalidQuery,

    #[error("Unknown retrieval model: {0} (expected BM, EBM or VM)")]
    InvalidModel(String),

    #[error("Could not determine the language of the text")]
    LanguageUndetermined,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("No normalization pipeline for language: {0}")]
    NormalizationFailed(String),

    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FindexError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidQuery | Self::InvalidModel(_) => 2,
            Self::LanguageUndetermined | Self::UnsupportedLanguage(_) => 3,
            Self::NormalizationFailed(_) => 4,
            Self::StoreUnavailable(_) => 5,
            Self::DocumentNotFound(_) => 6,
            Self::Config(_) => 7,
            Self::Io(_) | Self::Serialization(_) => 10,
        }
    }

    /// Message suitable for end users. Never includes store or IO diagnostics.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidQuery => "Please enter a search query.".to_string(),
            Self::InvalidModel(_) => "Invalid search algorithm selected.".to_string(),
            Self::LanguageUndetermined => {
                "The language of this document could not be detected.".to_string()
            }
            Self::UnsupportedLanguage(code) => {
                format!("Documents in language '{code}' are not supported (use en or ar).")
            }
            Self::NormalizationFailed(_) => {
                "The search could not process the document text.".to_string()
            }
            Self::StoreUnavailable(_) => {
                "The document index is unavailable, try again later.".to_string()
            }
            Self::DocumentNotFound(name) => format!("No document named '{name}'."),
            Self::Config(_) => "The configuration file could not be read.".to_string(),
            Self::Io(_) | Self::Serialization(_) => "An internal error occurred.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FindexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_input_errors() {
        assert_eq!(FindexError::InvalidQuery.exit_code(), 2);
        assert_eq!(FindexError::InvalidModel("XX".into()).exit_code(), 2);
        assert_ne!(
            FindexError::StoreUnavailable("locked".into()).exit_code(),
            FindexError::InvalidQuery.exit_code()
        );
    }

    #[test]
    fn test_user_message_hides_diagnostics() {
        let err = FindexError::StoreUnavailable("redb: file locked at /tmp/x".into());
        let message = err.user_message();
        assert!(!message.contains("/tmp/x"));
        assert!(!message.contains("redb"));
    }

    #[test]
    fn test_each_kind_has_distinct_message() {
        let messages = [
            FindexError::InvalidQuery.user_message(),
            FindexError::InvalidModel("XX".into()).user_message(),
            FindexError::LanguageUndetermined.user_message(),
            FindexError::UnsupportedLanguage("fr".into()).user_message(),
            FindexError::NormalizationFailed("ar".into()).user_message(),
            FindexError::StoreUnavailable(String::new()).user_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
