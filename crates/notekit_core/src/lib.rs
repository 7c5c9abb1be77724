//! Core domain logic for notekit.
//! This crate is the single source of truth for the product catalog checks
//! and the persisted note list.

pub mod catalog;
pub mod collections;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;

pub use catalog::{
    seed_catalog, seed_categories, seed_numbers, Catalog, CatalogError, CatalogStats,
    InvalidEntry,
};
pub use collections::{CategoryMap, NumberSet};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteValidationError};
pub use model::product::{check_record, validate, Product, ProductId, ProductValidationError};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use repo::note_list_repo::{load_notes, save_notes, LoadStatus, LoadedNotes, NOTES_SLOT};
pub use service::catalog_service::{build_catalog_report, run_number_set_demo, CatalogReport};
pub use service::note_list_service::{
    NoteListController, NoteListError, RemoveOutcome, EMPTY_NOTE_ALERT,
};
pub use ui::{EntryId, ListEntry, NoteListSurface, RecordingSurface};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
