pub mod ingestion;
pub mod retrieval;
pub mod search;

pub use ingestion::{IngestionResult, IngestionService, remove_document};
pub use retrieval::{QUERY_LANGUAGE, RetrievalEngine, validate_query};
pub use search::SearchService;
