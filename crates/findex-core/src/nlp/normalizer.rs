use std::collections::HashMap;

use super::{SnowballStemmer, StopWordList, UnicodeWordTokenizer};
use crate::domain::Language;
use crate::error::{FindexError, Result};
use crate::ports::{StopWords, Stemmer, Tokenizer};

/// Tokenize, stem, then drop stems found in the stop-word set.
pub struct Pipeline {
    tokenizer: Box<dyn Tokenizer>,
    stemmer: Box<dyn Stemmer>,
    stop_words: Box<dyn StopWords>,
}

impl Pipeline {
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        stemmer: Box<dyn Stemmer>,
        stop_words: Box<dyn StopWords>,
    ) -> Self {
        Self {
            tokenizer,
            stemmer,
            stop_words,
        }
    }

    pub fn for_language(language: Language) -> Self {
        Self::new(
            Box::new(UnicodeWordTokenizer),
            Box::new(SnowballStemmer::new(language)),
            Box::new(StopWordList::for_language(language)),
        )
    }

    pub fn run(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(|token| self.stemmer.stem(token))
            .filter(|stem| !stem.is_empty() && !self.stop_words.is_stop_word(stem))
            .collect()
    }
}

pub struct TextNormalizer {
    pipelines: HashMap<Language, Pipeline>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Language::ALL
            .into_iter()
            .fold(Self::empty(), |n, lang| n.with_pipeline(lang, Pipeline::for_language(lang)))
    }
}

impl TextNormalizer {
    pub fn empty() -> Self {
        Self {
            pipelines: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_pipeline(mut self, language: Language, pipeline: Pipeline) -> Self {
        self.pipelines.insert(language, pipeline);
        self
    }

    pub fn supports(&self, language: Language) -> bool {
        self.pipelines.contains_key(&language)
    }

    /// Normalized stems in text order. Empty when no pipeline is registered
    /// for `language`, which is indistinguishable from text with no terms;
    /// use [`Self::try_normalize`] where that difference matters.
    pub fn normalize(&self, text: &str, language: Language) -> Vec<String> {
        self.try_normalize(text, language).unwrap_or_else(|_| {
            tracing::warn!(%language, "No normalization pipeline, returning no terms");
            Vec::new()
        })
    }

    pub fn try_normalize(&self, text: &str, language: Language) -> Result<Vec<String>> {
        self.pipelines
            .get(&language)
            .map(|pipeline| pipeline.run(text))
            .ok_or_else(|| FindexError::NormalizationFailed(language.to_string()))
    }

    pub fn normalize_to_string(&self, text: &str, language: Language) -> String {
        self.normalize(text, language).join(" ")
    }
}
