//! Location of the notes database file.

use std::path::PathBuf;

/// Environment variable overriding the notes database location.
pub const DB_PATH_ENV: &str = "NOTEKIT_DB_PATH";
/// File name used under the temp dir when nothing else is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "notekit_notes.sqlite3";

/// Resolves the notes database path.
///
/// Order: `explicit`, then a non-blank `NOTEKIT_DB_PATH`, then
/// `<temp>/notekit_notes.sqlite3`.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_db_path_from(explicit, std::env::var(DB_PATH_ENV).ok())
}

fn resolve_db_path_from(explicit: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(raw) = env_value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{resolve_db_path_from, DEFAULT_DB_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn explicit_path_wins_over_env() {
        let path = resolve_db_path_from(
            Some(PathBuf::from("/data/cli.sqlite3")),
            Some("/data/env.sqlite3".to_string()),
        );
        assert_eq!(path, PathBuf::from("/data/cli.sqlite3"));
    }

    #[test]
    fn env_value_is_trimmed() {
        let path = resolve_db_path_from(None, Some("  /data/env.sqlite3 \n".to_string()));
        assert_eq!(path, PathBuf::from("/data/env.sqlite3"));
    }

    #[test]
    fn blank_or_missing_env_falls_back_to_temp_dir() {
        let expected = std::env::temp_dir().join(DEFAULT_DB_FILE_NAME);
        assert_eq!(resolve_db_path_from(None, Some("   ".to_string())), expected);
        assert_eq!(resolve_db_path_from(None, None), expected);
    }
}
