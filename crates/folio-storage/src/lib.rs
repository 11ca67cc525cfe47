//! folio-storage
//!
//! Local key-value slots and the append-only document collection kept in
//! one of them.

pub mod documents;
pub mod error;
pub mod file;
pub mod kv;
pub mod memory;
pub mod state;

pub use crate::documents::DocumentStore;
pub use crate::error::{HydrationError, StorageError};
pub use crate::file::FileStore;
pub use crate::kv::KeyValueStore;
pub use crate::memory::MemoryStore;
