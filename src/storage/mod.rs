//! Storage layer for memos.
//!
//! The whole collection lives under a single storage key as a JSON array:
//!
//! ```json
//! [
//!   {
//!     "id": "lq2x9c-k3j8d0ab",
//!     "title": "Groceries",
//!     "content": "milk, eggs",
//!     "category": "personal",
//!     "tags": ["home"],
//!     "createdAt": "2024-01-15T10:30:00Z",
//!     "updatedAt": "2024-01-15T14:20:00Z"
//!   }
//! ]
//! ```
//!
//! ## Components
//!
//! - [`StorageBackend`]: raw get/set of a blob by key
//! - [`JsonFileBackend`]: one `<key>.json` file per key, written atomically
//! - [`MemoryBackend`]: in-process map, used by tests and embedders
//! - [`Persistence`]: load/save of the memo collection with failures swallowed

mod backend;
mod persistence;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use persistence::Persistence;
