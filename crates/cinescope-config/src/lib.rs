pub mod config;
pub mod paths;
pub mod storage;

pub use config::{CacheConfig, Config, HomeConfig, LoggingConfig, OmdbConfig, API_KEY_PLACEHOLDER, DEFAULT_BASE_URL};
pub use paths::{base_path_override, PathManager};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
