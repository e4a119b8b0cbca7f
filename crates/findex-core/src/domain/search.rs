use serde::{Deserialize, Serialize};
use std::fmt;

use super::Document;
use crate::error::FindexError;

/// Retrieval model selected at query time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetrievalModel {
    /// Every query term must occur in the document text.
    #[serde(rename = "BM")]
    ExactBoolean,
    /// At least one query term must occur in the document text.
    #[serde(rename = "EBM")]
    ExtendedBoolean,
    /// Cosine similarity between term vectors, ranked.
    #[default]
    #[serde(rename = "VM")]
    VectorSpace,
}

impl RetrievalModel {
    pub const ALL: [Self; 3] = [Self::ExactBoolean, Self::ExtendedBoolean, Self::VectorSpace];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::ExactBoolean => "BM",
            Self::ExtendedBoolean => "EBM",
            Self::VectorSpace => "VM",
        }
    }

    pub const fn is_ranked(self) -> bool {
        matches!(self, Self::VectorSpace)
    }
}

impl fmt::Display for RetrievalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for RetrievalModel {
    type Err = FindexError;

    /// Tags are exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BM" => Ok(Self::ExactBoolean),
            "EBM" => Ok(Self::ExtendedBoolean),
            "VM" => Ok(Self::VectorSpace),
            _ => Err(FindexError::InvalidModel(s.to_string())),
        }
    }
}

/// Weights used for vector-space term vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermWeighting {
    #[default]
    #[serde(alias = "raw-frequency")]
    Raw,
    TfIdf,
}

impl std::str::FromStr for TermWeighting {
    type Err = FindexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "raw-frequency" | "tf" => Ok(Self::Raw),
            "tf-idf" | "tfidf" => Ok(Self::TfIdf),
            other => Err(FindexError::Config(format!("unknown term weighting: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: Document,
    /// Cosine similarity for the vector model, `None` for Boolean matches.
    pub score: Option<f64>,
}

impl ScoredDocument {
    pub const fn matched(document: Document) -> Self {
        Self {
            document,
            score: None,
        }
    }

    pub const fn scored(document: Document, score: f64) -> Self {
        Self {
            document,
            score: Some(score),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub model: RetrievalModel,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<ScoredDocument>,
}

impl SearchResponse {
    pub fn new(
        query: impl Into<String>,
        model: RetrievalModel,
        results: Vec<ScoredDocument>,
        limit: Option<usize>,
    ) -> Self {
        let total_count = results.len();
        let results: Vec<ScoredDocument> = match limit {
            Some(limit) => results.into_iter().take(limit).collect(),
            None => results,
        };

        Self {
            query: query.into(),
            model,
            total_count,
            count: results.len(),
            results,
        }
    }
}
