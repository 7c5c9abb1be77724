//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalog and note list use-cases to Dart via FRB.
//! - Own the single process-wide note list controller.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Note list calls are serialized through one mutex and run to completion.

use log::warn;
use notekit_core::db::{open_db, resolve_db_path};
use notekit_core::{
    build_catalog_report, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, seed_catalog, EntryId, ListEntry, LoadStatus, NoteListController,
    NoteListError, RecordingSurface, SqliteKeyValueStore,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

type FfiController = NoteListController<SqliteKeyValueStore, RecordingSurface>;

static NOTES_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static NOTES_CONTROLLER: OnceLock<Mutex<Option<FfiController>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One category row of the catalog report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub category: String,
    pub product: String,
}

/// Catalog walkthrough envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReportResponse {
    /// One `invalid product with id …` line per failing entry.
    pub diagnostics: Vec<String>,
    /// Unique numbers after the add/delete steps.
    pub numbers: Vec<i64>,
    /// Whether `3` was a member after the add step.
    pub has_three: bool,
    /// Category rows in insertion order.
    pub categories: Vec<CategoryItem>,
    pub product_count: u32,
    pub total_price: f64,
    /// Name of the most expensive valid product, if any.
    pub most_expensive: Option<String>,
}

/// One rendered note entry with its delete binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntryItem {
    /// Pass back to `notes_remove` to delete this entry.
    pub entry_id: u64,
    pub text: String,
}

/// Full note list snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesStateResponse {
    pub ok: bool,
    /// Entries in display order.
    pub entries: Vec<NoteEntryItem>,
    /// True when persisted data was unreadable and the list restarted empty.
    pub recovered_from_corrupt_data: bool,
    pub message: String,
}

/// Result of one add/remove event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesActionResponse {
    pub ok: bool,
    /// Created entry id for add; removed entry id for remove.
    pub entry_id: Option<u64>,
    /// Blocking notice to show the user, when the core raised one.
    pub alert: Option<String>,
    pub message: String,
}

impl NotesActionResponse {
    fn success(message: impl Into<String>, entry_id: EntryId) -> Self {
        Self {
            ok: true,
            entry_id: Some(entry_id.0),
            alert: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>, alert: Option<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            alert,
            message: message.into(),
        }
    }
}

/// Runs the catalog walkthrough over the seed catalog.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_report() -> CatalogReportResponse {
    let report = build_catalog_report(&seed_catalog());
    CatalogReportResponse {
        diagnostics: report.diagnostics(),
        numbers: report.numbers.clone(),
        has_three: report.has_three,
        categories: report
            .categories
            .iter()
            .map(|(category, product)| CategoryItem {
                category: category.clone(),
                product: product.clone(),
            })
            .collect(),
        product_count: u32::try_from(report.stats.product_count).unwrap_or(u32::MAX),
        total_price: report.stats.total_price,
        most_expensive: report.stats.most_expensive.map(|product| product.name),
    }
}

/// (Re)loads the note list from storage and returns the rendered entries.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Replaces any previously loaded controller; entry ids restart at 1.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_load() -> NotesStateResponse {
    let mut guard = lock_controller();
    *guard = None;
    match ensure_controller(&mut guard) {
        Ok(controller) => to_state_response(controller),
        Err(err) => state_failure(format!("notes_load failed: {err}")),
    }
}

/// Returns the current rendered entries, loading storage on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesStateResponse {
    let mut guard = lock_controller();
    match ensure_controller(&mut guard) {
        Ok(controller) => to_state_response(controller),
        Err(err) => state_failure(format!("notes_list failed: {err}")),
    }
}

/// Submits note input.
///
/// # FFI contract
/// - Blank input returns `ok=false` with `alert` set; nothing is persisted.
/// - On success the UI clears and refocuses its input field.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_add(text: String) -> NotesActionResponse {
    let mut guard = lock_controller();
    let controller = match ensure_controller(&mut guard) {
        Ok(controller) => controller,
        Err(err) => return NotesActionResponse::failure(format!("notes_add failed: {err}"), None),
    };

    let result = controller.add(&text);
    let alert = controller.surface_mut().take_alerts().pop();
    match result {
        Ok(entry) => NotesActionResponse::success("Note added.", entry.id),
        Err(NoteListError::EmptyInput) => {
            NotesActionResponse::failure("notes_add rejected empty input", alert)
        }
        Err(err) => NotesActionResponse::failure(format!("notes_add failed: {err}"), alert),
    }
}

/// Runs the delete action of one rendered entry.
///
/// # FFI contract
/// - Unknown entry ids return `ok=false` and change nothing.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_remove(entry_id: u64) -> NotesActionResponse {
    let mut guard = lock_controller();
    let controller = match ensure_controller(&mut guard) {
        Ok(controller) => controller,
        Err(err) => {
            return NotesActionResponse::failure(format!("notes_remove failed: {err}"), None)
        }
    };

    match controller.remove_entry(EntryId(entry_id)) {
        Ok(outcome) if outcome.note_removed => {
            NotesActionResponse::success("Note removed.", EntryId(entry_id))
        }
        Ok(_) => NotesActionResponse::success(
            "Entry removed; no matching note was stored.",
            EntryId(entry_id),
        ),
        Err(err) => NotesActionResponse::failure(format!("notes_remove failed: {err}"), None),
    }
}

fn lock_controller() -> MutexGuard<'static, Option<FfiController>> {
    let cell = NOTES_CONTROLLER.get_or_init(|| Mutex::new(None));
    cell.lock().unwrap_or_else(|poisoned| {
        warn!("event=notes_lock module=ffi status=error error_code=poisoned");
        poisoned.into_inner()
    })
}

fn ensure_controller<'a>(
    slot: &'a mut Option<FfiController>,
) -> Result<&'a mut FfiController, String> {
    if slot.is_none() {
        let db_path = resolve_notes_db_path();
        let conn = open_db(&db_path).map_err(|err| format!("notes DB open failed: {err}"))?;
        let store = SqliteKeyValueStore::try_new(conn)
            .map_err(|err| format!("notes store init failed: {err}"))?;
        let controller = NoteListController::initialize(store, RecordingSurface::new())
            .map_err(|err| err.to_string())?;
        *slot = Some(controller);
    }
    slot.as_mut()
        .ok_or_else(|| "notes controller unavailable".to_string())
}

fn resolve_notes_db_path() -> PathBuf {
    NOTES_DB_PATH.get_or_init(|| resolve_db_path(None)).clone()
}

fn to_state_response(controller: &FfiController) -> NotesStateResponse {
    let status = controller.load_status();
    let recovered = matches!(status, LoadStatus::RecoveredFromCorruptData { .. });
    let entries = controller
        .entries()
        .iter()
        .map(to_entry_item)
        .collect::<Vec<_>>();
    let message = if recovered {
        "Stored notes were unreadable; started with an empty list.".to_string()
    } else if let LoadStatus::LoadedSkippingBlank { skipped } = status {
        format!(
            "{} note(s); skipped {skipped} blank stored note(s).",
            entries.len()
        )
    } else if entries.is_empty() {
        "No notes.".to_string()
    } else {
        format!("{} note(s).", entries.len())
    };
    NotesStateResponse {
        ok: true,
        entries,
        recovered_from_corrupt_data: recovered,
        message,
    }
}

fn state_failure(message: String) -> NotesStateResponse {
    NotesStateResponse {
        ok: false,
        entries: Vec::new(),
        recovered_from_corrupt_data: false,
        message,
    }
}

fn to_entry_item(entry: &ListEntry) -> NoteEntryItem {
    NoteEntryItem {
        entry_id: entry.id.0,
        text: entry.text.clone(),
    }
}
