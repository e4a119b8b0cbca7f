use rust_stemmers::{Algorithm, Stemmer as SnowballAlgorithm};
use std::fmt;

use crate::domain::Language;
use crate::ports::Stemmer;

/// Snowball stemmer for a supported language. Input is lowercased first.
pub struct SnowballStemmer {
    language: Language,
    inner: SnowballAlgorithm,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        let algorithm = match language {
            Language::English => Algorithm::English,
            Language::Arabic => Algorithm::Arabic,
        };

        Self {
            language,
            inner: SnowballAlgorithm::create(algorithm),
        }
    }

    pub const fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(&token.to_lowercase()).into_owned()
    }
}
