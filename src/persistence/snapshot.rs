//! Binary game snapshots.
//!
//! Layout: an 8-byte little-endian version magic followed by the bincode
//! encoding of a [`GameSnapshot`].

use crate::economy::GameSnapshot;

use super::PersistenceError;

/// Bumped whenever the snapshot layout changes.
pub const SNAPSHOT_MAGIC: u64 = 0x4542_4753_4E41_5001;

pub fn encode_snapshot(snapshot: &GameSnapshot) -> Result<Vec<u8>, PersistenceError> {
    let mut bytes = SNAPSHOT_MAGIC.to_le_bytes().to_vec();
    bytes.extend(bincode::serialize(snapshot)?);
    Ok(bytes)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<GameSnapshot, PersistenceError> {
    if bytes.len() < 8 {
        return Err(PersistenceError::Truncated);
    }
    let (magic, payload) = bytes.split_at(8);
    let mut raw = [0u8; 8];
    raw.copy_from_slice(magic);
    let found = u64::from_le_bytes(raw);
    if found != SNAPSHOT_MAGIC {
        return Err(PersistenceError::BadMagic { found });
    }
    Ok(bincode::deserialize(payload)?)
}
