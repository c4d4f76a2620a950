//! Logging bootstrap for the dashboard core.
//!
//! # Responsibility
//! - Start file-based rolling logs once per process.
//! - Give simulated side effects (escalation mail, report generation) a
//!   structured `event=...` line instead of ad-hoc prints.
//!
//! # Invariants
//! - Repeated init with the same directory is a no-op.
//! - Re-initialization pointing somewhere else is rejected, never applied.

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "partgate";
const ROTATE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts rolling file logs under `log_dir` at the given level.
///
/// Warnings and errors are duplicated to stderr so CLI users see them
/// without tailing the log file.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` cannot be created or differs from an earlier init.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = parse_level(level)?;

    if let Some(state) = ACTIVE.get() {
        if state.log_dir == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already writes to `{}`; refusing `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    let state = ACTIVE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(log_dir)
            .map_err(|err| format!("cannot create log directory `{}`: {err}", log_dir.display()))?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(FileSpec::default().directory(log_dir).basename(LOG_BASENAME))
            .rotate(
                Criterion::Size(ROTATE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEPT_LOG_FILES),
            )
            .duplicate_to_stderr(Duplicate::Warn)
            .append()
            .start()
            .map_err(|err| format!("cannot start logger: {err}"))?;

        log::info!(
            "event=session_start module=core status=ok version={} level={}",
            env!("CARGO_PKG_VERSION"),
            level
        );

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _handle: handle,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(format!(
            "logging already writes to `{}`; refusing `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    Ok(())
}

/// Directory currently receiving logs, if logging started.
pub fn active_log_dir() -> Option<PathBuf> {
    ACTIVE.get().map(|state| state.log_dir.clone())
}

fn parse_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`, expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{active_log_dir, init_logging, parse_level};

    #[test]
    fn level_parsing_normalizes_case_and_whitespace() {
        assert_eq!(parse_level(" INFO ").unwrap(), "info");
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn second_init_is_idempotent_and_conflicts_are_rejected() {
        // One process-global logger; this test owns the whole lifecycle.
        let first = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();

        init_logging("info", first.path()).unwrap();
        init_logging("info", first.path()).unwrap();

        let err = init_logging("info", other.path()).unwrap_err();
        assert!(err.contains("refusing"));
        assert_eq!(active_log_dir().as_deref(), Some(first.path()));
    }
}
