pub mod language;
pub mod nlp;
pub mod repository;

pub use language::LanguageDetector;
pub use nlp::{StopWords, Stemmer, Tokenizer};
pub use repository::{DocumentRepository, DocumentSource, UpsertOutcome};
