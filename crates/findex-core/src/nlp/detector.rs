use whatlang::Lang;

use crate::error::{FindexError, Result};
use crate::ports::LanguageDetector;

/// Trigram-based detection via `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector {
    reliable_only: bool,
}

impl WhatlangDetector {
    pub const fn new() -> Self {
        Self {
            reliable_only: false,
        }
    }

    /// Treat low-confidence guesses as undetermined.
    #[must_use]
    pub const fn reliable_only(mut self, reliable_only: bool) -> Self {
        self.reliable_only = reliable_only;
        self
    }

    fn iso_code(lang: Lang) -> String {
        let code = match lang {
            Lang::Eng => "en",
            Lang::Ara => "ar",
            Lang::Fra => "fr",
            Lang::Deu => "de",
            Lang::Spa => "es",
            Lang::Ita => "it",
            Lang::Por => "pt",
            Lang::Rus => "ru",
            Lang::Nld => "nl",
            Lang::Tur => "tr",
            Lang::Pes => "fa",
            Lang::Urd => "ur",
            Lang::Heb => "he",
            Lang::Hin => "hi",
            Lang::Cmn => "zh",
            Lang::Jpn => "ja",
            Lang::Kor => "ko",
            other => other.code(),
        };
        code.to_string()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(FindexError::LanguageUndetermined);
        }

        let info = whatlang::detect(text).ok_or(FindexError::LanguageUndetermined)?;
        if self.reliable_only && !info.is_reliable() {
            tracing::debug!(
                lang = info.lang().code(),
                confidence = info.confidence(),
                "Rejecting unreliable language guess"
            );
            return Err(FindexError::LanguageUndetermined);
        }

        Ok(Self::iso_code(info.lang()))
    }
}
