//! findex-core - local document retrieval with exact Boolean, extended
//! Boolean and vector space models.
//!
//! Documents are pulled from a [`ports::DocumentSource`] and searched with a
//! [`services::RetrievalEngine`]. Vector space queries are normalized
//! (tokenize, stem, drop stop words) and ranked by cosine similarity.

pub mod config;
pub mod domain;
pub mod error;
pub mod nlp;
pub mod ports;
pub mod scoring;
pub mod services;
pub mod storage;

pub use error::{FindexError, Result};
