//! Persisted note sequence on top of the `notes` slot.
//!
//! # Responsibility
//! - Decode the stored JSON array of strings into `Note` values.
//! - Encode and write the full sequence back, overwriting the slot.
//!
//! # Invariants
//! - A missing slot loads as an empty sequence.
//! - A slot that is not a JSON array of strings loads as an empty sequence and
//!   is reported through `LoadStatus::RecoveredFromCorruptData`.
//! - Blank strings inside a well-formed array are dropped one by one; the
//!   remaining notes still load.
//! - Loading never writes the slot.

use crate::model::note::Note;
use crate::repo::kv_store::{KeyValueStore, StoreError, StoreResult};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name holding the serialized note sequence.
pub const NOTES_SLOT: &str = "notes";

/// How the persisted sequence was obtained at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Slot decoded successfully.
    Loaded,
    /// Slot decoded, but `skipped` blank strings were left out.
    LoadedSkippingBlank { skipped: usize },
    /// Slot was never written.
    Missing,
    /// Slot held data that is not a JSON array of strings.
    RecoveredFromCorruptData { reason: String },
}

/// Result of reading the note slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedNotes {
    pub notes: Vec<Note>,
    pub status: LoadStatus,
}

/// Failure writing the note slot.
#[derive(Debug)]
pub enum SaveNotesError {
    Encode(serde_json::Error),
    Store(StoreError),
}

impl Display for SaveNotesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SaveNotesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SaveNotesError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Reads and decodes the note slot.
///
/// Only storage transport failures are returned as errors.
pub fn load_notes(store: &impl KeyValueStore) -> StoreResult<LoadedNotes> {
    let Some(raw) = store.get(NOTES_SLOT)? else {
        return Ok(LoadedNotes {
            notes: Vec::new(),
            status: LoadStatus::Missing,
        });
    };

    let texts = match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(texts) => texts,
        Err(err) => {
            warn!(
                "event=notes_load module=notes status=error error_code=corrupt_slot slot={NOTES_SLOT} bytes={} error={}",
                raw.len(),
                err
            );
            return Ok(LoadedNotes {
                notes: Vec::new(),
                status: LoadStatus::RecoveredFromCorruptData {
                    reason: err.to_string(),
                },
            });
        }
    };

    let total = texts.len();
    let notes = texts
        .iter()
        .filter_map(|text| Note::parse(text).ok())
        .collect::<Vec<_>>();
    let skipped = total - notes.len();
    let status = if skipped == 0 {
        LoadStatus::Loaded
    } else {
        warn!(
            "event=notes_load module=notes status=partial error_code=blank_entry slot={NOTES_SLOT} skipped={skipped} kept={}",
            notes.len()
        );
        LoadStatus::LoadedSkippingBlank { skipped }
    };
    Ok(LoadedNotes { notes, status })
}

/// Encodes the full sequence and overwrites the note slot.
pub fn save_notes(store: &mut impl KeyValueStore, notes: &[Note]) -> Result<(), SaveNotesError> {
    let encoded = serde_json::to_string(notes).map_err(SaveNotesError::Encode)?;
    store.set(NOTES_SLOT, &encoded)?;
    Ok(())
}
