use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::domain::{
    Document, Language, RetrievalModel, ScoreMap, ScoredDocument, TermVector, TermWeighting,
};
use crate::error::{FindexError, Result};
use crate::nlp::TextNormalizer;
use crate::scoring::{
    cosine_similarities, exact_matches, extended_matches, rank_documents, tf_idf_vector,
    vectorize,
};

/// Queries are always normalized with the English pipeline, whatever the
/// language of the corpus.
pub const QUERY_LANGUAGE: Language = Language::English;

/// Dispatches a query to one of the retrieval models over a corpus snapshot.
pub struct RetrievalEngine {
    normalizer: TextNormalizer,
    weighting: TermWeighting,
    parallel: bool,
}

impl Default for RetrievalEngine {
    fn default() -> Self {
        Self::new(TextNormalizer::default())
    }
}

impl RetrievalEngine {
    pub const fn new(normalizer: TextNormalizer) -> Self {
        Self {
            normalizer,
            weighting: TermWeighting::Raw,
            parallel: false,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::default()
            .with_weighting(config.weighting)
            .with_parallel(config.parallel)
    }

    #[must_use]
    pub const fn with_weighting(mut self, weighting: TermWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Normalize documents on the rayon pool. Ranking is unaffected.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub const fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn search(
        &self,
        query: &str,
        model: RetrievalModel,
        documents: &[Document],
    ) -> Result<Vec<Document>> {
        Ok(self
            .search_scored(query, model, documents)?
            .into_iter()
            .map(|r| r.document)
            .collect())
    }

    /// Like [`Self::search`] with the model given as a tag (`BM`, `EBM`, `VM`).
    /// The query is validated before the tag.
    pub fn search_tagged(
        &self,
        query: &str,
        model: &str,
        documents: &[Document],
    ) -> Result<Vec<Document>> {
        validate_query(query)?;
        self.search(query, model.parse()?, documents)
    }

    pub fn search_scored(
        &self,
        query: &str,
        model: RetrievalModel,
        documents: &[Document],
    ) -> Result<Vec<ScoredDocument>> {
        validate_query(query)?;
        tracing::debug!(%model, documents = documents.len(), "Dispatching search");

        let results: Vec<ScoredDocument> = match model {
            RetrievalModel::ExactBoolean => exact_matches(query, documents)
                .into_iter()
                .map(ScoredDocument::matched)
                .collect(),
            RetrievalModel::ExtendedBoolean => extended_matches(query, documents)
                .into_iter()
                .map(ScoredDocument::matched)
                .collect(),
            RetrievalModel::VectorSpace => {
                let scores = self.score(query, documents)?;
                rank_documents(documents.to_vec(), &scores)
            }
        };

        tracing::debug!(%model, results = results.len(), "Search finished");
        Ok(results)
    }

    /// Cosine similarity of the query against every document.
    pub fn score(&self, query: &str, documents: &[Document]) -> Result<ScoreMap> {
        let query_tokens = self.normalizer.try_normalize(query, QUERY_LANGUAGE)?;
        let document_tokens = self.normalize_corpus(documents)?;

        let (query_vector, document_vectors): (TermVector, Vec<TermVector>) = match self.weighting
        {
            TermWeighting::Raw => (
                vectorize(&query_tokens),
                document_tokens.iter().map(|tokens| vectorize(tokens)).collect(),
            ),
            TermWeighting::TfIdf => {
                let corpus: Vec<String> = document_tokens.iter().map(|t| t.join(" ")).collect();
                (
                    tf_idf_vector(&query_tokens, &corpus),
                    document_tokens
                        .iter()
                        .map(|tokens| tf_idf_vector(tokens, &corpus))
                        .collect(),
                )
            }
        };

        if query_vector.is_empty() {
            tracing::debug!("Query has no terms after normalization, all scores are 0");
        }

        Ok(cosine_similarities(
            &query_vector,
            documents
                .iter()
                .map(|doc| doc.filename.as_str())
                .zip(document_vectors.iter()),
        ))
    }

    /// Normalized tokens per document, in corpus order.
    fn normalize_corpus(&self, documents: &[Document]) -> Result<Vec<Vec<String>>> {
        let normalize = |doc: &Document| self.normalizer.try_normalize(&doc.text, doc.language);
        if self.parallel {
            documents.par_iter().map(normalize).collect()
        } else {
            documents.iter().map(normalize).collect()
        }
    }
}

pub fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(FindexError::InvalidQuery);
    }
    Ok(())
}
