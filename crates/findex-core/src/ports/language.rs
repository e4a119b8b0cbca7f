use crate::error::Result;

pub trait LanguageDetector: Send + Sync {
    /// Returns an ISO 639-1 code where one exists, ISO 639-3 otherwise.
    fn detect(&self, text: &str) -> Result<String>;
}
