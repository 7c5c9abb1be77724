use super::{EntryId, ListEntry};

/// Hooks a UI shell implements to mirror the note list.
pub trait NoteListSurface {
    /// Appends one entry at the end of the visual list.
    fn append_entry(&mut self, entry: &ListEntry);
    /// Removes one entry; unknown ids are ignored.
    fn remove_entry(&mut self, entry_id: EntryId);
    /// Shows a blocking user-visible notice.
    fn alert(&mut self, message: &str);
    /// Clears the input field and returns focus to it.
    fn reset_input(&mut self);
}

/// In-memory surface that records every interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    entries: Vec<ListEntry>,
    alerts: Vec<String>,
    input_resets: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drains recorded alerts, oldest first.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn input_resets(&self) -> usize {
        self.input_resets
    }
}

impl NoteListSurface for RecordingSurface {
    fn append_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }

    fn remove_entry(&mut self, entry_id: EntryId) {
        self.entries.retain(|entry| entry.id != entry_id);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reset_input(&mut self) {
        self.input_resets += 1;
    }
}
