//! Command-line entry point for notekit.
//!
//! # Responsibility
//! - Print the catalog walkthrough report.
//! - Drive the persisted note list (list/add/remove) from a terminal.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use notekit_core::db::{open_db, resolve_db_path};
use notekit_core::{
    build_catalog_report, default_log_level, init_logging, seed_catalog, Catalog, CatalogReport,
    EntryId, LoadStatus, NoteListController, NoteListError, RecordingSurface, SqliteKeyValueStore,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "notekit", version)]
#[command(about = "Product catalog checks and a persisted note list")]
struct Cli {
    /// SQLite file holding the notes slot [env: NOTEKIT_DB_PATH]
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the product catalog and print the walkthrough report
    Catalog {
        /// JSON catalog keyed by product id; defaults to the built-in seed
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Manage the persisted note list
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },
}

#[derive(Subcommand)]
enum NotesAction {
    /// Print every note with its entry id
    List,
    /// Append a note (surrounding whitespace is trimmed)
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete the note bound to an entry id printed by `notes list`
    Remove { entry_id: u64 },
    /// Delete the first note equal to TEXT
    RemoveText {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    match cli.command {
        Commands::Catalog { file } => {
            let catalog = match file {
                Some(path) => {
                    let source = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    Catalog::from_json_str(&source)
                        .with_context(|| format!("failed to load catalog {}", path.display()))?
                }
                None => seed_catalog(),
            };
            print_catalog_report(&build_catalog_report(&catalog));
        }
        Commands::Notes { action } => {
            let db_path = resolve_db_path(cli.db);
            run_notes(&db_path, action)?;
        }
    }

    Ok(())
}

fn run_notes(db_path: &Path, action: NotesAction) -> anyhow::Result<()> {
    let conn = open_db(db_path)
        .with_context(|| format!("failed to open notes database {}", db_path.display()))?;
    let store = SqliteKeyValueStore::try_new(conn)?;
    let mut controller = NoteListController::initialize(store, RecordingSurface::new())?;

    match controller.load_status() {
        LoadStatus::RecoveredFromCorruptData { reason } => {
            eprintln!("warning: stored notes were unreadable ({reason}); starting empty");
        }
        LoadStatus::LoadedSkippingBlank { skipped } => {
            eprintln!("warning: skipped {skipped} blank stored note(s)");
        }
        LoadStatus::Loaded | LoadStatus::Missing => {}
    }

    match action {
        NotesAction::List => {
            if controller.entries().is_empty() {
                println!("No notes.");
            }
            for entry in controller.entries() {
                println!("[{}] {}", entry.id, entry.text);
            }
        }
        NotesAction::Add { text } => match controller.add(&text.join(" ")) {
            Ok(entry) => println!("Added [{}] {}", entry.id, entry.text),
            Err(NoteListError::EmptyInput) => {
                let alerts = controller.surface_mut().take_alerts();
                bail!("{}", alerts.join("; "));
            }
            Err(err) => return Err(err.into()),
        },
        NotesAction::Remove { entry_id } => {
            let outcome = controller.remove_entry(EntryId(entry_id))?;
            if outcome.note_removed {
                println!("Removed [{entry_id}]");
            }
        }
        NotesAction::RemoveText { text } => {
            let text = text.join(" ");
            let entry_id = controller
                .entries()
                .iter()
                .find(|entry| entry.text == text)
                .map(|entry| entry.id);
            match entry_id {
                Some(entry_id) => {
                    controller.remove(&text, entry_id)?;
                    println!("Removed [{entry_id}] {text}");
                }
                None => println!("No note equal to `{text}`."),
            }
        }
    }

    Ok(())
}

fn print_catalog_report(report: &CatalogReport) {
    for diagnostic in report.diagnostics() {
        eprintln!("{diagnostic}");
    }

    println!("Products:");
    for (key, record) in &report.products {
        println!("  ID: {key} {record}");
    }

    println!("Unique numbers (initial): {:?}", report.initial_numbers);
    println!("Contains 3? {}", report.has_three);
    println!("Unique numbers: {:?}", report.numbers);

    println!("Categories:");
    for (category, product) in &report.categories {
        println!("  {category} -> {product}");
    }

    let stats = &report.stats;
    println!(
        "Valid products: {} (total price {:.2})",
        stats.product_count, stats.total_price
    );
    if let Some(product) = &stats.most_expensive {
        println!("Most expensive: {} ({:.2})", product.name, product.price);
    }
}
