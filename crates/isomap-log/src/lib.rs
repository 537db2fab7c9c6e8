//! Structured logging for isomap.
//!
//! Installs a `tracing` subscriber with console output and, in debug builds,
//! a JSON log file. The filter comes from `RUST_LOG` when set, otherwise from
//! `debug.log_level` of the render configuration. A bare level there applies
//! to the isomap crates only; dependencies stay at `warn`.

use std::fs::File;
use std::path::{Path, PathBuf};

use isomap_config::RenderConfig;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level of the isomap crates when the config sets none.
pub const DEFAULT_LEVEL: &str = "info";

/// Level of every target outside [`CRATE_TARGETS`].
pub const DEPENDENCY_LEVEL: &str = "warn";

/// Targets a bare configured level applies to.
pub const CRATE_TARGETS: [&str; 5] = [
    "isomap_world",
    "isomap_biome",
    "isomap_overlay",
    "isomap_config",
    "isomap_log",
];

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "isomap.log";

#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file, created if missing
/// * `debug_build` - whether to write the JSON log file at all
/// * `config` - render configuration supplying `debug.log_level`
///
/// Fails if the log file cannot be created or a subscriber is already set.
///
/// ```no_run
/// isomap_log::init_logging(None, false, None).expect("logging initialized twice");
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&RenderConfig>,
) -> Result<(), LogInitError> {
    let file_layer = match log_dir {
        Some(dir) if debug_build => {
            let path = dir.join(LOG_FILE_NAME);
            let file = std::fs::create_dir_all(dir)
                .and_then(|()| File::create(&path))
                .map_err(|source| LogInitError::LogFile { path, source })?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(fmt::time::uptime())
                    .json(),
            )
        }
        _ => None,
    };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    tracing::debug!(file_log = debug_build && log_dir.is_some(), "logging initialized");
    Ok(())
}

/// The filter `init_logging` installs: `RUST_LOG` if it parses, otherwise
/// [`filter_string`].
pub fn build_filter(config: Option<&RenderConfig>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_string(config)))
}

/// Returns the filter directives for the given config.
///
/// A bare level such as `debug` becomes per-crate directives for
/// [`CRATE_TARGETS`] on top of [`DEPENDENCY_LEVEL`]. Anything containing a
/// target (`=`) or several directives (`,`) is used as written.
pub fn filter_string(config: Option<&RenderConfig>) -> String {
    let level = config
        .map(|config| config.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL);
    if level.contains(['=', ',']) {
        return level.to_string();
    }

    let mut directives = DEPENDENCY_LEVEL.to_string();
    for target in CRATE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn with_level(level: &str) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.debug.log_level = level.to_string();
        config
    }

    #[test]
    fn test_default_filter_scopes_level_to_isomap_crates() {
        let filter = filter_string(None);
        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("isomap_overlay=info"));
        assert!(filter.contains("isomap_world=info"));
        assert_eq!(filter, filter_string(Some(&with_level(""))));
        assert_eq!(filter, filter_string(Some(&with_level("  "))));
    }

    #[test]
    fn test_bare_level_from_config() {
        let filter = filter_string(Some(&with_level("trace")));
        assert_eq!(filter.matches("=trace").count(), CRATE_TARGETS.len());

        let parsed = EnvFilter::try_new(&filter).unwrap();
        assert_eq!(parsed.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_explicit_directives_are_kept() {
        let config = with_level("debug,isomap_overlay=trace");
        assert_eq!(filter_string(Some(&config)), "debug,isomap_overlay=trace");
        assert_eq!(
            filter_string(Some(&with_level("isomap_biome=debug"))),
            "isomap_biome=debug"
        );
    }

    #[test]
    fn test_unwritable_log_dir_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = init_logging(Some(&blocker.join("logs")), true, None).unwrap_err();
        match err {
            LogInitError::LogFile { path, .. } => assert!(path.ends_with(LOG_FILE_NAME)),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_init_creates_log_file_once() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs");

        init_logging(Some(&log_dir), true, Some(&with_level("debug"))).unwrap();
        tracing::info!("first message");
        assert!(log_dir.join(LOG_FILE_NAME).is_file());

        let again = init_logging(None, false, None);
        assert!(matches!(again, Err(LogInitError::AlreadyInitialized(_))));
    }
}
