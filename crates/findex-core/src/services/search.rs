use std::sync::Arc;

use super::RetrievalEngine;
use crate::domain::{Document, RetrievalModel, ScoredDocument, SearchResponse};
use crate::error::Result;
use crate::ports::DocumentSource;

pub struct SearchService<S>
where
    S: DocumentSource,
{
    source: Arc<S>,
    engine: RetrievalEngine,
}

impl<S> SearchService<S>
where
    S: DocumentSource,
{
    pub const fn new(source: Arc<S>, engine: RetrievalEngine) -> Self {
        Self { source, engine }
    }

    pub const fn engine(&self) -> &RetrievalEngine {
        &self.engine
    }

    /// Pulls the corpus once, then searches that snapshot.
    pub fn search(&self, query: &str, model: RetrievalModel) -> Result<Vec<ScoredDocument>> {
        super::retrieval::validate_query(query)?;
        let documents = self.source.fetch_all()?;
        self.engine.search_scored(query, model, &documents)
    }

    pub fn search_response(
        &self,
        query: &str,
        model: RetrievalModel,
        limit: Option<usize>,
    ) -> Result<SearchResponse> {
        let results = self.search(query, model)?;
        Ok(SearchResponse::new(query, model, results, limit))
    }

    pub fn list_documents(&self) -> Result<Vec<Document>> {
        self.source.fetch_all()
    }
}
