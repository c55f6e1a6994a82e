//! Assetdock storage library
//!
//! Storage abstraction for uploaded asset bytes: the `AssetStore` trait plus
//! local-filesystem and in-memory backends.
//!
//! # Filenames
//!
//! Backends never store a file under the client-supplied name. Every `store`
//! call writes under a freshly generated name (`{uuid}.{ext}`, see the `keys`
//! module), which makes names storage-unique per request with no cross-request
//! coordination and keeps path-traversal input inert. Names must not contain
//! `..` or path separators.

pub mod factory;
pub(crate) mod keys;
pub mod local;
pub mod memory;
pub mod traits;

pub use factory::create_store;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use traits::{AssetStore, StorageError, StorageResult, StoredFile};
