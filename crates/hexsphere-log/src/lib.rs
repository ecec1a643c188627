//! Structured logging for the hexsphere tools.
//!
//! Installs a `tracing` subscriber with console output and, in debug builds,
//! a JSON log file for inspecting grouping runs after the fact. The level
//! comes from the config's `debug.log_level` unless `RUST_LOG` is set.

use hexsphere_config::Config;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor the config sets one.
const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "hexsphere.log";

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Optional directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration to use for log level override
///
/// # Examples
///
/// ```no_run
/// use hexsphere_config::Config;
/// use hexsphere_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_string(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    // Console goes to stderr so exported tiles on stdout stay clean.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(log_file) = open_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Where the JSON log lands inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Create `log_dir` if needed and truncate the log file in it.
///
/// Returns `None` if either step fails; logging then stays console-only.
fn open_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_file_path(log_dir)).ok()
}

/// Resolve the filter directive from the config, falling back to the default.
fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_string_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,hexsphere_tiling=trace".to_string();
        assert_eq!(filter_string(Some(&config)), "debug,hexsphere_tiling=trace");
    }

    #[test]
    fn test_empty_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level.clear();
        assert_eq!(filter_string(Some(&config)), DEFAULT_FILTER);
        assert_eq!(filter_string(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_default_config_level_is_info() {
        assert_eq!(filter_string(Some(&Config::default())), "info");
    }

    #[test]
    fn test_config_level_is_a_valid_directive() {
        let mut config = Config::default();
        config.debug.log_level = "warn,hexsphere_tiling=debug".to_string();
        assert!(EnvFilter::try_new(filter_string(Some(&config))).is_ok());
    }

    #[test]
    fn test_log_file_lives_in_log_dir() {
        let dir = Path::new("/var/log/hexsphere");
        assert_eq!(log_file_path(dir), dir.join("hexsphere.log"));
    }

    #[test]
    fn test_open_log_file_creates_missing_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs").join("run");

        let file = open_log_file(&log_dir);
        assert!(file.is_some());
        assert!(log_file_path(&log_dir).is_file());
    }

    #[test]
    fn test_open_log_file_blocked_dir_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(open_log_file(&blocker.join("logs")).is_none());
    }
}
