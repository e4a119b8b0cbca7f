use parking_lot::RwLock;

use crate::domain::Document;
use crate::error::Result;
use crate::ports::{DocumentRepository, DocumentSource, UpsertOutcome};

/// Insertion-ordered store held in memory. Updates keep a document's position.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filenames are unique keys: a later duplicate replaces the earlier
    /// document in its original position.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let mut unique = Vec::with_capacity(documents.len());
        for doc in documents {
            put(&mut unique, doc);
        }
        Self {
            documents: RwLock::new(unique),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentSource for InMemoryDocumentStore {
    fn fetch_all(&self) -> Result<Vec<Document>> {
        Ok(self.documents.read().clone())
    }
}

impl DocumentRepository for InMemoryDocumentStore {
    fn upsert(&self, doc: &Document) -> Result<UpsertOutcome> {
        Ok(put(&mut self.documents.write(), doc.clone()))
    }

    fn get(&self, filename: &str) -> Result<Option<Document>> {
        Ok(self
            .documents
            .read()
            .iter()
            .find(|d| d.filename == filename)
            .cloned())
    }

    fn remove(&self, filename: &str) -> Result<bool> {
        let mut documents = self.documents.write();
        let before = documents.len();
        documents.retain(|d| d.filename != filename);
        Ok(documents.len() != before)
    }

    fn content_hash(&self, filename: &str) -> Result<Option<String>> {
        Ok(self.get(filename)?.map(|d| d.content_hash()))
    }
}

fn put(documents: &mut Vec<Document>, doc: Document) -> UpsertOutcome {
    match documents.iter_mut().find(|d| d.filename == doc.filename) {
        Some(existing) if *existing == doc => UpsertOutcome::Unchanged,
        Some(existing) => {
            *existing = doc;
            UpsertOutcome::Updated
        }
        None => {
            documents.push(doc);
            UpsertOutcome::Inserted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    #[test]
    fn test_upsert_outcomes_and_order() {
        let store = InMemoryDocumentStore::new();
        let b = Document::new("b.txt", "dog bird", Language::English);
        let a = Document::new("a.txt", "cat dog", Language::English);

        assert_eq!(store.upsert(&b).unwrap(), UpsertOutcome::Inserted);
        assert_eq!(store.upsert(&a).unwrap(), UpsertOutcome::Inserted);
        assert_eq!(store.upsert(&b).unwrap(), UpsertOutcome::Unchanged);

        let changed = Document::new("b.txt", "dog fish", Language::English);
        assert_eq!(store.upsert(&changed).unwrap(), UpsertOutcome::Updated);

        let docs = store.fetch_all().unwrap();
        assert_eq!(docs[0], changed);
        assert_eq!(docs[1], a);
    }

    #[test]
    fn test_language_change_is_an_update() {
        let store = InMemoryDocumentStore::new();
        store
            .upsert(&Document::new("a.txt", "text", Language::English))
            .unwrap();
        let outcome = store
            .upsert(&Document::new("a.txt", "text", Language::Arabic))
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);
    }

    #[test]
    fn test_remove_and_hash() {
        let doc = Document::new("a.txt", "cat", Language::English);
        let store = InMemoryDocumentStore::from_documents(vec![doc.clone()]);

        assert_eq!(store.content_hash("a.txt").unwrap(), Some(doc.content_hash()));
        assert!(store.remove("a.txt").unwrap());
        assert!(!store.remove("a.txt").unwrap());
        assert!(store.is_empty());
        assert_eq!(store.content_hash("a.txt").unwrap(), None);
    }

    #[test]
    fn test_from_documents_keeps_filenames_unique() {
        let store = InMemoryDocumentStore::from_documents(vec![
            Document::new("a.txt", "cat", Language::English),
            Document::new("b.txt", "dog", Language::English),
            Document::new("a.txt", "bird", Language::English),
        ]);

        let docs = store.fetch_all().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].filename, "a.txt");
        assert_eq!(docs[0].text, "bird");
        assert_eq!(docs[1].filename, "b.txt");
    }

    #[test]
    fn test_fetch_all_is_a_snapshot() {
        let store = InMemoryDocumentStore::from_documents(vec![Document::new(
            "a.txt",
            "cat",
            Language::English,
        )]);
        let snapshot = store.fetch_all().unwrap();
        store.remove("a.txt").unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 0);
    }
}
