//! Data directory resolution.
//!
//! All state (database, config.toml) lives under a single data directory:
//! `TASKDECK_DATA_DIR` when set, else `~/.taskdeck`.

use std::path::PathBuf;

/// Resolve the Taskdeck data directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TASKDECK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskdeck")
}

/// Database URL for the SQLite file under the given data directory.
pub fn database_url(data_dir: &std::path::Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join("taskdeck.db").display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_from_env() {
        // Serialize env access within this test only.
        unsafe { std::env::set_var("TASKDECK_DATA_DIR", "/tmp/taskdeck-test") };
        let dir = resolve_data_dir();
        unsafe { std::env::remove_var("TASKDECK_DATA_DIR") };
        assert_eq!(dir, PathBuf::from("/tmp/taskdeck-test"));
    }

    #[test]
    fn test_database_url_points_into_data_dir() {
        let url = database_url(std::path::Path::new("/data"));
        assert_eq!(url, "sqlite:///data/taskdeck.db?mode=rwc");
    }
}
