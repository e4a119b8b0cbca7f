//! Redb-backed corpus store.
//!
//! # Tables
//!
//! - `documents`: filename -> `DocumentRecord` (JSON)
//! - `metadata`: key -> u64 counters (`next_sequence`)
//!
//! Records carry a monotonically increasing sequence so `fetch_all` returns
//! documents in first-insertion order rather than key order.

use std::path::Path;

use chrono::{DateTime, Utc};
use redb::{Database, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::domain::Document;
use crate::error::{FindexError, Result};
use crate::ports::{DocumentRepository, DocumentSource, UpsertOutcome};

const DOCUMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");
const METADATA_TABLE: TableDefinition<&str, u64> = TableDefinition::new("metadata");

const NEXT_SEQUENCE_KEY: &str = "next_sequence";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub document: Document,
    pub content_hash: String,
    pub indexed_at: DateTime<Utc>,
    pub sequence: u64,
}

fn store_error(context: &str, e: impl std::fmt::Display) -> FindexError {
    FindexError::StoreUnavailable(format!("{context}: {e}"))
}

pub struct RedbDocumentStore {
    db: Database,
}

impl RedbDocumentStore {
    /// Opens or creates the database, creating parent directories and tables.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)
            .map_err(|e| store_error("Failed to open database", e))?;

        {
            let write_txn = db
                .begin_write()
                .map_err(|e| store_error("Failed to begin write transaction", e))?;
            write_txn
                .open_table(DOCUMENTS_TABLE)
                .map_err(|e| store_error("Failed to create documents table", e))?;
            write_txn
                .open_table(METADATA_TABLE)
                .map_err(|e| store_error("Failed to create metadata table", e))?;
            write_txn
                .commit()
                .map_err(|e| store_error("Failed to commit table creation", e))?;
        }

        tracing::debug!(path = %path.display(), "Opened document store");
        Ok(Self { db })
    }

    /// All records in insertion order.
    pub fn records(&self) -> Result<Vec<DocumentRecord>> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| store_error("Failed to begin read transaction", e))?;
        let table = read_txn
            .open_table(DOCUMENTS_TABLE)
            .map_err(|e| store_error("Failed to open documents table", e))?;

        let mut records = Vec::new();
        for entry in table
            .iter()
            .map_err(|e| store_error("Failed to scan documents", e))?
        {
            let (_key, value) =
                entry.map_err(|e| store_error("Failed to read document", e))?;
            records.push(serde_json::from_slice::<DocumentRecord>(value.value())?);
        }

        records.sort_by_key(|r| r.sequence);
        Ok(records)
    }

    fn record(&self, filename: &str) -> Result<Option<DocumentRecord>> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| store_error("Failed to begin read transaction", e))?;
        let table = read_txn
            .open_table(DOCUMENTS_TABLE)
            .map_err(|e| store_error("Failed to open documents table", e))?;

        let record = match table
            .get(filename)
            .map_err(|e| store_error("Failed to get document", e))?
        {
            Some(guard) => Some(serde_json::from_slice(guard.value())?),
            None => None,
        };
        Ok(record)
    }
}

impl DocumentSource for RedbDocumentStore {
    fn fetch_all(&self) -> Result<Vec<Document>> {
        let documents: Vec<Document> = self.records()?.into_iter().map(|r| r.document).collect();
        tracing::debug!(count = documents.len(), "Fetched corpus");
        Ok(documents)
    }
}

impl DocumentRepository for RedbDocumentStore {
    fn upsert(&self, doc: &Document) -> Result<UpsertOutcome> {
        let content_hash = doc.content_hash();
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| store_error("Failed to begin write transaction", e))?;

        let outcome = {
            let mut documents = write_txn
                .open_table(DOCUMENTS_TABLE)
                .map_err(|e| store_error("Failed to open documents table", e))?;

            let existing: Option<DocumentRecord> = match documents
                .get(doc.filename.as_str())
                .map_err(|e| store_error("Failed to get document", e))?
            {
                Some(guard) => Some(serde_json::from_slice(guard.value())?),
                None => None,
            };

            let (sequence, outcome) = match existing {
                Some(record)
                    if record.content_hash == content_hash
                        && record.document.language == doc.language =>
                {
                    return Ok(UpsertOutcome::Unchanged);
                }
                Some(record) => (record.sequence, UpsertOutcome::Updated),
                None => {
                    let mut metadata = write_txn
                        .open_table(METADATA_TABLE)
                        .map_err(|e| store_error("Failed to open metadata table", e))?;
                    let next = metadata
                        .get(NEXT_SEQUENCE_KEY)
                        .map_err(|e| store_error("Failed to read sequence", e))?
                        .map_or(0, |guard| guard.value());
                    metadata
                        .insert(NEXT_SEQUENCE_KEY, next + 1)
                        .map_err(|e| store_error("Failed to advance sequence", e))?;
                    (next, UpsertOutcome::Inserted)
                }
            };

            let record = DocumentRecord {
                document: doc.clone(),
                content_hash,
                indexed_at: Utc::now(),
                sequence,
            };
            let bytes = serde_json::to_vec(&record)?;
            documents
                .insert(doc.filename.as_str(), bytes.as_slice())
                .map_err(|e| store_error("Failed to write document", e))?;
            outcome
        };

        write_txn
            .commit()
            .map_err(|e| store_error("Failed to commit document", e))?;
        Ok(outcome)
    }

    fn get(&self, filename: &str) -> Result<Option<Document>> {
        Ok(self.record(filename)?.map(|r| r.document))
    }

    fn remove(&self, filename: &str) -> Result<bool> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| store_error("Failed to begin write transaction", e))?;

        let removed = {
            let mut documents = write_txn
                .open_table(DOCUMENTS_TABLE)
                .map_err(|e| store_error("Failed to open documents table", e))?;
            documents
                .remove(filename)
                .map_err(|e| store_error("Failed to remove document", e))?
                .is_some()
        };

        write_txn
            .commit()
            .map_err(|e| store_error("Failed to commit removal", e))?;
        Ok(removed)
    }

    fn content_hash(&self, filename: &str) -> Result<Option<String>> {
        Ok(self.record(filename)?.map(|r| r.content_hash))
    }
}
