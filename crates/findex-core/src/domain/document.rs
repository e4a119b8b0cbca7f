use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FindexError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub text: String,
    pub language: Language,
}

impl Document {
    pub fn new(filename: impl Into<String>, text: impl Into<String>, language: Language) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            language,
        }
    }

    pub fn content_hash(&self) -> String {
        blake3::hash(self.text.as_bytes()).to_hex().to_string()
    }
}

/// Languages with a normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::English, Self::Arabic];

    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, FindexError> {
        code.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = FindexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Self::English),
            "ar" | "ara" | "arabic" => Ok(Self::Arabic),
            other => Err(FindexError::UnsupportedLanguage(other.to_string())),
        }
    }
}
