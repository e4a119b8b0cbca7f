use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::config::IngestConfig;
use crate::domain::{Document, Language};
use crate::error::{FindexError, Result};
use crate::ports::{DocumentRepository, LanguageDetector, UpsertOutcome};

pub struct IngestionService<R, D>
where
    R: DocumentRepository,
    D: LanguageDetector,
{
    repo: Arc<R>,
    detector: Arc<D>,
    extensions: Vec<String>,
}

impl<R, D> IngestionService<R, D>
where
    R: DocumentRepository,
    D: LanguageDetector,
{
    pub fn new(repo: Arc<R>, detector: Arc<D>) -> Self {
        Self {
            repo,
            detector,
            extensions: IngestConfig::default().extensions,
        }
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Stores a document, detecting its language when `language` is `None`.
    pub fn index_document(
        &self,
        filename: &str,
        text: &str,
        language: Option<Language>,
    ) -> Result<UpsertOutcome> {
        let language = match language {
            Some(language) => language,
            None => Language::from_code(&self.detector.detect(text)?)?,
        };

        let doc = Document::new(filename, text, language);
        let outcome = self.repo.upsert(&doc)?;
        tracing::info!(filename, %language, ?outcome, "Indexed document");
        Ok(outcome)
    }

    /// Indexes one file, or every matching file directly inside a directory.
    /// Per-file failures are collected instead of aborting the batch.
    pub fn index_path(&self, path: &Path, language: Option<Language>) -> Result<IngestionResult> {
        let files = if path.is_dir() {
            self.list_files(path)?
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            return Err(FindexError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )));
        };

        let mut result = IngestionResult::default();
        for file in files {
            let filename = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            let outcome = std::fs::read_to_string(&file)
                .map_err(FindexError::from)
                .and_then(|text| self.index_document(&filename, &text, language));

            match outcome {
                Ok(UpsertOutcome::Inserted) => result.documents_indexed += 1,
                Ok(UpsertOutcome::Updated) => result.documents_updated += 1,
                Ok(UpsertOutcome::Unchanged) => result.documents_skipped += 1,
                Err(e @ FindexError::StoreUnavailable(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!(file = %file.display(), error = %e, "Skipping file");
                    result.errors.push(format!("{filename}: {}", e.user_message()));
                }
            }
        }

        Ok(result)
    }

    pub fn remove(&self, filename: &str) -> Result<()> {
        remove_document(self.repo.as_ref(), filename)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
            if path.is_file() && matches {
                files.push(path);
            }
        }
        // Directory order is platform-dependent; index in name order.
        files.sort();
        Ok(files)
    }
}

/// Deletes `filename` from the repository, failing with `DocumentNotFound`
/// when nothing was stored under that name. Needs no language detector.
pub fn remove_document<R: DocumentRepository + ?Sized>(repo: &R, filename: &str) -> Result<()> {
    if repo.remove(filename)? {
        tracing::info!(filename, "Removed document");
        Ok(())
    } else {
        Err(FindexError::DocumentNotFound(filename.to_string()))
    }
}

#[derive(Debug, Default, Serialize)]
pub struct IngestionResult {
    pub documents_indexed: usize,
    pub documents_updated: usize,
    pub documents_skipped: usize,
    pub errors: Vec<String>,
}
