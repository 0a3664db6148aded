pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Durable key-value storage for small serialized snapshots.
/// Implementations: `SqliteStorage` (the site database) and `MemoryStorage` (tests).
pub trait Storage: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`; `Err` when the backend
    /// could not be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
}
