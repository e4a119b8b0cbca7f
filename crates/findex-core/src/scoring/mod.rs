//! Scoring primitives: term vectors, Boolean predicates, cosine similarity,
//! and stable ranking.

pub mod boolean;
pub mod cosine;
pub mod ranker;
pub mod vectorizer;

pub use boolean::{exact_matches, extended_matches, is_relevant_exact, is_relevant_extended};
pub use cosine::{cosine_similarities, cosine_similarity};
pub use ranker::rank_documents;
pub use vectorizer::{
    document_frequency, document_length, inverse_document_frequency, term_frequency, tf_idf,
    tf_idf_vector, vectorize,
};
