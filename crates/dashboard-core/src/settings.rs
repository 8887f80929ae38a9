use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summary dashboard for a movie metadata dataset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "movie-dashboard",
    about = "Summary dashboard for a movie metadata dataset",
    version
)]
pub struct Settings {
    /// Path to the movies CSV file, or a directory containing one
    #[arg(long)]
    pub data_path: Option<PathBuf>,

    /// How rows with an unresolvable color format are treated
    #[arg(long, default_value = "keep", value_parser = ["keep", "drop"])]
    pub unknown_color: String,

    /// Number of rows in the top-ranked views
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=50))]
    pub top_n: u32,

    /// Report output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub output: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.movie-dashboard/last_used.json`.
///
/// `data_path` is intentionally not persisted: the dataset location is either
/// given explicitly or found by the discovery probe on every run.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    /// Uses `~/.movie-dashboard/last_used.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".movie-dashboard").join("last_used.json")
    }

    /// Load persisted params from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load persisted params from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to the default path, creating parent
    /// directories if needed.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::config_path())
    }

    /// Atomically write params to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the default config file if it exists.
    pub fn clear() -> Result<(), std::io::Error> {
        Self::clear_at(&Self::config_path())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation – accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Self {
        // Build raw ArgMatches so we can query ValueSource.
        let matches = Settings::command().get_matches_from(args.clone());

        // Parse into the typed struct using the same args.
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            return Self::apply_debug(settings);
        }

        let last = LastUsedParams::load_from(config_path);

        // Merge last-used values for fields that were NOT explicitly set on
        // the command line (CLI always wins).  'data_path' is never loaded
        // from last-used.
        if !is_arg_explicitly_set(&matches, "unknown_color") {
            if let Some(v) = last.unknown_color {
                settings.unknown_color = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "top_n") {
            if let Some(v) = last.top_n {
                settings.top_n = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "output") {
            if let Some(v) = last.output {
                settings.output = v;
            }
        }

        settings = Self::apply_debug(settings);

        // Persist current settings for next run.
        let params = LastUsedParams::from(&settings);
        let _ = params.save_to(config_path);

        settings
    }

    /// `--debug` overrides the configured log level.
    fn apply_debug(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            unknown_color: Some(s.unknown_color.clone()),
            top_n: Some(s.top_n),
            output: Some(s.output.clone()),
        }
    }
}

// ── Helper: check if an arg was explicitly set on the command line ─────────────

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build the config path inside `tmp`.
    fn tmp_config_path(tmp: &TempDir) -> PathBuf {
        LastUsedParams::config_path_in(tmp.path())
    }

    /// Save `params` to `tmp`, then load them back.
    fn round_trip(tmp: &TempDir, params: &LastUsedParams) -> LastUsedParams {
        let path = tmp_config_path(tmp);
        params.save_to(&path).expect("save");
        LastUsedParams::load_from(&path)
    }

    // ── test_last_used_params_save_load ───────────────────────────────────────

    #[test]
    fn test_last_used_params_save_load() {
        let tmp = TempDir::new().expect("tempdir");
        let params = LastUsedParams {
            unknown_color: Some("drop".to_string()),
            top_n: Some(5),
            output: Some("json".to_string()),
        };

        let loaded = round_trip(&tmp, &params);

        assert_eq!(loaded.unknown_color, Some("drop".to_string()));
        assert_eq!(loaded.top_n, Some(5));
        assert_eq!(loaded.output, Some("json".to_string()));
    }

    // ── test_last_used_params_clear ───────────────────────────────────────────

    #[test]
    fn test_last_used_params_clear() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            output: Some("json".to_string()),
            ..Default::default()
        };
        params.save_to(&path).expect("save");
        assert!(path.exists(), "file must exist after save");

        LastUsedParams::clear_at(&path).expect("clear");
        assert!(!path.exists(), "file must be gone after clear");
    }

    // ── test_last_used_params_default_when_missing ────────────────────────────

    #[test]
    fn test_last_used_params_default_when_missing() {
        let tmp = TempDir::new().expect("tempdir");
        let loaded = LastUsedParams::load_from(&tmp_config_path(&tmp));
        assert!(loaded.unknown_color.is_none());
        assert!(loaded.top_n.is_none());
        assert!(loaded.output.is_none());
    }

    // ── test_settings_default_values ─────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        // Parse with only the binary name (no flags) to get all defaults.
        let settings = Settings::parse_from(["movie-dashboard"]);

        assert!(settings.data_path.is_none());
        assert_eq!(settings.unknown_color, "keep");
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.output, "text");
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(!settings.clear);
    }

    // ── test_settings_cli_parsing ─────────────────────────────────────────────

    #[test]
    fn test_settings_cli_data_path() {
        let settings = Settings::parse_from(["movie-dashboard", "--data-path", "/tmp/movies.csv"]);
        assert_eq!(settings.data_path, Some(PathBuf::from("/tmp/movies.csv")));
    }

    #[test]
    fn test_settings_cli_unknown_color_drop() {
        let settings = Settings::parse_from(["movie-dashboard", "--unknown-color", "drop"]);
        assert_eq!(settings.unknown_color, "drop");
    }

    #[test]
    fn test_settings_cli_top_n() {
        let settings = Settings::parse_from(["movie-dashboard", "--top-n", "25"]);
        assert_eq!(settings.top_n, 25);
    }

    #[test]
    fn test_settings_cli_debug_flag() {
        let settings = Settings::parse_from(["movie-dashboard", "--debug"]);
        assert!(settings.debug);
    }

    // ── test_load_with_last_used (uses config path injection) ─────────────────

    #[test]
    fn test_load_with_last_used_merges_persisted_output() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            output: Some("json".to_string()),
            ..Default::default()
        };
        params.save_to(&config_path).expect("save");

        // Parse without --output flag → should use persisted value.
        let settings =
            Settings::load_with_last_used_impl(vec!["movie-dashboard".into()], &config_path);
        assert_eq!(settings.output, "json");
    }

    #[test]
    fn test_load_with_last_used_cli_overrides_persisted() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            unknown_color: Some("drop".to_string()),
            ..Default::default()
        };
        params.save_to(&config_path).expect("save");

        // Explicit --unknown-color keep on the CLI must win.
        let settings = Settings::load_with_last_used_impl(
            vec![
                "movie-dashboard".into(),
                "--unknown-color".into(),
                "keep".into(),
            ],
            &config_path,
        );
        assert_eq!(settings.unknown_color, "keep");
    }

    #[test]
    fn test_load_with_last_used_clear_removes_file() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            top_n: Some(5),
            ..Default::default()
        };
        params.save_to(&config_path).expect("save");
        assert!(config_path.exists(), "file must exist before clear");

        Settings::load_with_last_used_impl(
            vec!["movie-dashboard".into(), "--clear".into()],
            &config_path,
        );

        assert!(!config_path.exists(), "file must be gone after --clear");
    }

    #[test]
    fn test_load_with_last_used_debug_overrides_log_level() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let settings = Settings::load_with_last_used_impl(
            vec!["movie-dashboard".into(), "--debug".into()],
            &config_path,
        );
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_load_with_last_used_persists_after_run() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        Settings::load_with_last_used_impl(
            vec!["movie-dashboard".into(), "--top-n".into(), "7".into()],
            &config_path,
        );

        assert!(
            config_path.exists(),
            "config file must be persisted after run"
        );
        let loaded = LastUsedParams::load_from(&config_path);
        assert_eq!(loaded.top_n, Some(7));
    }

    #[test]
    fn test_load_with_last_used_data_path_not_persisted() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        Settings::load_with_last_used_impl(
            vec![
                "movie-dashboard".into(),
                "--data-path".into(),
                "/tmp/movies.csv".into(),
            ],
            &config_path,
        );

        let content = std::fs::read_to_string(&config_path).expect("config file");
        assert!(
            !content.contains("movies.csv"),
            "data_path must not be persisted"
        );
    }
}
