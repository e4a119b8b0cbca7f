pub mod document;
pub mod search;
pub mod vector;

pub use document::{Document, Language};
pub use search::{RetrievalModel, ScoredDocument, SearchResponse, TermWeighting};
pub use vector::{ScoreMap, TermVector};
