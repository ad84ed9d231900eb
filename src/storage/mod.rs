pub mod file_store;
pub mod memory_store;
pub mod storage_constants;
pub mod storage_errors;
pub mod storage_traits;

pub use file_store::FileKvStore;
pub use memory_store::MemoryKvStore;
pub use storage_errors::StorageError;
pub use storage_traits::{ensure_schema, get_json, set_json, KvStore};
