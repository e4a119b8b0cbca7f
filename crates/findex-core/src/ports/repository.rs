use crate::domain::Document;
use crate::error::Result;

/// Read access to the corpus. One call is one snapshot.
pub trait DocumentSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Document>>;
}

pub trait DocumentRepository: DocumentSource {
    fn upsert(&self, doc: &Document) -> Result<UpsertOutcome>;
    fn get(&self, filename: &str) -> Result<Option<Document>>;
    fn remove(&self, filename: &str) -> Result<bool>;
    fn content_hash(&self, filename: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
}
