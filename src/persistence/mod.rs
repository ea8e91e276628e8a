//! Persistence: custom content and preferences in a key-value store, and
//! binary game snapshots.

pub mod storage;
pub mod content;
pub mod snapshot;

use thiserror::Error;

pub use storage::{MemoryStorage, Storage};
pub use content::{
    load_custom_content, load_volume, save_custom_content, save_volume, AUDIO_VOLUME_KEY,
    CUSTOM_FUSIONS_KEY, CUSTOM_UNITS_KEY, DEFAULT_VOLUME,
};
pub use snapshot::{decode_snapshot, encode_snapshot, SNAPSHOT_MAGIC};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot data: {0}")]
    Binary(#[from] bincode::Error),

    #[error("snapshot is too short")]
    Truncated,

    #[error("unknown snapshot version {found:#018x}")]
    BadMagic { found: u64 },
}
