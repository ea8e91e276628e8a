//! Custom content and preferences as JSON blobs.
//!
//! Loading is forgiving: a blob that is not valid JSON is treated as empty,
//! and an entry that does not have the right shape is dropped on its own
//! while the rest of the blob is kept. Both cases log a warning.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::units::{CustomContent, CustomUnit};

use super::storage::Storage;
use super::PersistenceError;

pub const CUSTOM_UNITS_KEY: &str = "customUnits";
pub const CUSTOM_FUSIONS_KEY: &str = "customFusions";
pub const AUDIO_VOLUME_KEY: &str = "audioVolume";

/// Volume used when nothing valid is stored.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Read custom units and fusions.
pub fn load_custom_content(storage: &dyn Storage) -> CustomContent {
    CustomContent {
        units: load_map::<CustomUnit>(storage, CUSTOM_UNITS_KEY),
        fusions: load_map::<String>(storage, CUSTOM_FUSIONS_KEY),
    }
}

/// Write custom units and fusions, replacing what was stored.
pub fn save_custom_content(storage: &mut dyn Storage, content: &CustomContent) -> Result<(), PersistenceError> {
    storage.set(CUSTOM_UNITS_KEY, serde_json::to_string(&content.units)?);
    storage.set(CUSTOM_FUSIONS_KEY, serde_json::to_string(&content.fusions)?);
    Ok(())
}

/// Stored volume, clamped to `0.0..=1.0`.
pub fn load_volume(storage: &dyn Storage) -> f32 {
    let Some(raw) = storage.get(AUDIO_VOLUME_KEY) else {
        return DEFAULT_VOLUME;
    };
    match raw.trim().parse::<f32>() {
        Ok(volume) if volume.is_finite() => volume.clamp(0.0, 1.0),
        _ => {
            tracing::warn!(value = %raw, "ignoring stored volume");
            DEFAULT_VOLUME
        }
    }
}

pub fn save_volume(storage: &mut dyn Storage, volume: f32) {
    let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { DEFAULT_VOLUME };
    storage.set(AUDIO_VOLUME_KEY, volume.to_string());
}

fn load_map<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> BTreeMap<String, T> {
    let Some(raw) = storage.get(key) else {
        return BTreeMap::new();
    };
    let entries = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(entries)) => entries,
        Ok(_) => {
            tracing::warn!(key, "stored value is not a JSON object");
            return BTreeMap::new();
        }
        Err(err) => {
            tracing::warn!(key, %err, "stored value is not valid JSON");
            return BTreeMap::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(name, value)| match serde_json::from_value::<T>(value) {
            Ok(entry) => Some((name, entry)),
            Err(err) => {
                tracing::warn!(key, entry = %name, %err, "dropping malformed entry");
                None
            }
        })
        .collect()
}
