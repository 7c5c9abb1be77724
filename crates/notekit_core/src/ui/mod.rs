//! Visual surface contracts for the note list.
//!
//! # Responsibility
//! - Describe the rendered list entries owned by the note controller.
//! - Define the hooks a UI shell implements to mirror entry creation/removal.
//!
//! # Invariants
//! - Each entry carries the note text it was rendered for; removal reads that
//!   stored value instead of capturing it in a callback.

mod surface;

pub use surface::{NoteListSurface, RecordingSurface};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Process-local identifier of one rendered entry. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the visual list: the note text plus its delete action binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: EntryId,
    pub text: String,
}
