//! Note list controller.
//!
//! # Responsibility
//! - Own the note sequence, its rendered entries and the persisted mirror.
//! - Handle the add/remove events raised by a UI shell.
//!
//! # Invariants
//! - After every successful mutation the persisted slot equals the in-memory
//!   sequence; a failed write rolls the in-memory change back.
//! - Removal matches by value and drops only the first equal note.
//! - The visual entry is removed even when no equal note exists.

use crate::model::note::Note;
use crate::repo::kv_store::{KeyValueStore, StoreError};
use crate::repo::note_list_repo::{load_notes, save_notes, LoadStatus, SaveNotesError};
use crate::ui::{EntryId, ListEntry, NoteListSurface};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Notice shown when a blank note is submitted.
pub const EMPTY_NOTE_ALERT: &str = "The note cannot be empty";

/// Error for note list events.
#[derive(Debug)]
pub enum NoteListError {
    /// Submitted text is empty after trimming.
    EmptyInput,
    /// No rendered entry carries this id.
    EntryNotFound(EntryId),
    /// Storage read/write failure.
    Storage(StoreError),
    /// Note sequence could not be encoded.
    Encode(serde_json::Error),
}

impl Display for NoteListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "{EMPTY_NOTE_ALERT}"),
            Self::EntryNotFound(entry_id) => write!(f, "list entry not found: {entry_id}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
        }
    }
}

impl Error for NoteListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::EmptyInput | Self::EntryNotFound(_) => None,
        }
    }
}

impl From<StoreError> for NoteListError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

impl From<SaveNotesError> for NoteListError {
    fn from(value: SaveNotesError) -> Self {
        match value {
            SaveNotesError::Encode(err) => Self::Encode(err),
            SaveNotesError::Store(err) => Self::Storage(err),
        }
    }
}

/// What a remove event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// An equal note was found and removed from the sequence.
    pub note_removed: bool,
    /// The controller knew the entry id and dropped it.
    pub entry_removed: bool,
}

/// Explicit state object for the note list.
pub struct NoteListController<S: KeyValueStore, U: NoteListSurface> {
    store: S,
    surface: U,
    notes: Vec<Note>,
    entries: Vec<ListEntry>,
    next_entry_id: u64,
    load_status: LoadStatus,
}

impl<S: KeyValueStore, U: NoteListSurface> NoteListController<S, U> {
    /// Loads the persisted sequence and renders one entry per note.
    ///
    /// Corrupt persisted data starts an empty list (see [`Self::load_status`]);
    /// only storage transport failures are returned.
    pub fn initialize(store: S, surface: U) -> Result<Self, NoteListError> {
        let started_at = Instant::now();
        let loaded = load_notes(&store)?;

        let mut controller = Self {
            store,
            surface,
            notes: Vec::with_capacity(loaded.notes.len()),
            entries: Vec::with_capacity(loaded.notes.len()),
            next_entry_id: 1,
            load_status: loaded.status,
        };
        for note in loaded.notes {
            controller.render(&note);
            controller.notes.push(note);
        }

        info!(
            "event=notes_load module=notes status=ok count={} source={} duration_ms={}",
            controller.notes.len(),
            load_status_label(&controller.load_status),
            started_at.elapsed().as_millis()
        );
        Ok(controller)
    }

    /// Appends a trimmed note, persists the sequence and renders its entry.
    ///
    /// Blank input raises the empty-note alert and changes nothing.
    pub fn add(&mut self, input: &str) -> Result<ListEntry, NoteListError> {
        let Ok(note) = Note::parse(input) else {
            self.surface.alert(EMPTY_NOTE_ALERT);
            warn!("event=note_add_rejected module=notes status=error error_code=empty_input");
            return Err(NoteListError::EmptyInput);
        };

        self.notes.push(note.clone());
        if let Err(err) = save_notes(&mut self.store, &self.notes) {
            self.notes.pop();
            error!("event=note_add module=notes status=error error_code=persist_failed error={err}");
            return Err(err.into());
        }

        let entry = self.render(&note);
        self.surface.reset_input();
        info!(
            "event=note_add module=notes status=ok entry_id={} count={}",
            entry.id,
            self.notes.len()
        );
        Ok(entry)
    }

    /// Removes the first note equal to `text`, persists, and drops the entry.
    ///
    /// The entry is removed from the surface even when no note matched.
    pub fn remove(
        &mut self,
        text: &str,
        entry_id: EntryId,
    ) -> Result<RemoveOutcome, NoteListError> {
        let position = self.notes.iter().position(|note| note.as_str() == text);
        let removed = position.map(|index| (index, self.notes.remove(index)));

        if let Err(err) = save_notes(&mut self.store, &self.notes) {
            if let Some((index, note)) = removed {
                self.notes.insert(index, note);
            }
            error!(
                "event=note_remove module=notes status=error entry_id={entry_id} error_code=persist_failed error={err}"
            );
            return Err(err.into());
        }

        let entries_before = self.entries.len();
        self.entries.retain(|entry| entry.id != entry_id);
        self.surface.remove_entry(entry_id);

        let outcome = RemoveOutcome {
            note_removed: removed.is_some(),
            entry_removed: self.entries.len() != entries_before,
        };
        if outcome.note_removed {
            info!(
                "event=note_remove module=notes status=ok entry_id={entry_id} count={}",
                self.notes.len()
            );
        } else {
            warn!(
                "event=note_remove module=notes status=ok entry_id={entry_id} note_removed=false"
            );
        }
        Ok(outcome)
    }

    /// Runs the delete action bound to one rendered entry.
    pub fn remove_entry(&mut self, entry_id: EntryId) -> Result<RemoveOutcome, NoteListError> {
        let text = self
            .entry(entry_id)
            .map(|entry| entry.text.clone())
            .ok_or(NoteListError::EntryNotFound(entry_id))?;
        self.remove(&text, entry_id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Rendered entries in display order.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn entry(&self, entry_id: EntryId) -> Option<&ListEntry> {
        self.entries.iter().find(|entry| entry.id == entry_id)
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    fn render(&mut self, note: &Note) -> ListEntry {
        let entry = ListEntry {
            id: EntryId(self.next_entry_id),
            text: note.as_str().to_string(),
        };
        self.next_entry_id += 1;
        self.entries.push(entry.clone());
        self.surface.append_entry(&entry);
        entry
    }
}

fn load_status_label(status: &LoadStatus) -> &'static str {
    match status {
        LoadStatus::Loaded => "slot",
        LoadStatus::LoadedSkippingBlank { .. } => "slot_partial",
        LoadStatus::Missing => "empty",
        LoadStatus::RecoveredFromCorruptData { .. } => "recovered",
    }
}
