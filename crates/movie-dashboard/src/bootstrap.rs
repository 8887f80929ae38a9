use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.movie-dashboard/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.movie-dashboard/`
/// - `~/.movie-dashboard/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let dashboard_dir = home.join(".movie-dashboard");
    std::fs::create_dir_all(&dashboard_dir)?;
    std::fs::create_dir_all(dashboard_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Attempt to locate the movies dataset relative to the working directory.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./imdb50.csv`
/// 2. `./data/imdb50.csv`
///
/// Returns `None` when neither path exists.
pub fn discover_data_path() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    discover_data_path_in(&cwd)
}

/// Same probe rooted at an explicit base directory (used for testing).
pub fn discover_data_path_in(base_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        base_dir.join("imdb50.csv"),
        base_dir.join("data").join("imdb50.csv"),
    ];
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── test_ensure_directories ───────────────────────────────────────────────

    #[test]
    fn test_ensure_directories() {
        let tmp = TempDir::new().expect("tempdir");

        // Override HOME so that dirs::home_dir() resolves to our temp dir.
        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let result = ensure_directories();

        // Restore HOME.
        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        result.expect("ensure_directories should succeed");

        let dashboard_dir = tmp.path().join(".movie-dashboard");
        assert!(dashboard_dir.is_dir(), ".movie-dashboard dir must exist");
        assert!(
            dashboard_dir.join("logs").is_dir(),
            "logs subdir must exist"
        );
    }

    // ── test_discover_data_path ───────────────────────────────────────────────

    #[test]
    fn test_discover_data_path_returns_none_when_absent() {
        let tmp = TempDir::new().expect("tempdir");
        assert!(
            discover_data_path_in(tmp.path()).is_none(),
            "should return None when neither candidate exists"
        );
    }

    #[test]
    fn test_discover_data_path_finds_root_csv() {
        let tmp = TempDir::new().expect("tempdir");
        let csv = tmp.path().join("imdb50.csv");
        std::fs::write(&csv, "Title\n").expect("write csv");

        assert_eq!(discover_data_path_in(tmp.path()), Some(csv));
    }

    #[test]
    fn test_discover_data_path_finds_data_subdir() {
        let tmp = TempDir::new().expect("tempdir");
        // Create only the data/ candidate (not the root one).
        let data_dir = tmp.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("create data dir");
        let csv = data_dir.join("imdb50.csv");
        std::fs::write(&csv, "Title\n").expect("write csv");

        assert_eq!(discover_data_path_in(tmp.path()), Some(csv));
    }

    #[test]
    fn test_discover_data_path_prefers_root_csv() {
        let tmp = TempDir::new().expect("tempdir");
        let root_csv = tmp.path().join("imdb50.csv");
        std::fs::write(&root_csv, "Title\n").expect("write csv");
        let data_dir = tmp.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("create data dir");
        std::fs::write(data_dir.join("imdb50.csv"), "Title\n").expect("write csv");

        assert_eq!(discover_data_path_in(tmp.path()), Some(root_csv));
    }
}
