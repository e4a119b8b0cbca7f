pub mod memory;
pub mod redb_store;

pub use memory::InMemoryDocumentStore;
pub use redb_store::{DocumentRecord, RedbDocumentStore};
