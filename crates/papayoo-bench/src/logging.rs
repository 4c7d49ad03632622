use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LoggingConfig, ResolvedOutputs};

/// Keeps the non-blocking writer flushing until dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub telemetry_path: PathBuf,
}

/// Installs a JSON subscriber writing `telemetry.jsonl` next to the summary.
pub fn init_logging(
    logging: &LoggingConfig,
    outputs: &ResolvedOutputs,
    run_id: &str,
) -> Result<Option<LoggingGuard>> {
    if !logging.enable_structured {
        return Ok(None);
    }

    let telemetry_dir = outputs
        .summary_md
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&telemetry_dir).with_context(|| {
        format!(
            "creating telemetry directory at {}",
            telemetry_dir.display()
        )
    })?;

    let telemetry_path = telemetry_dir.join("telemetry.jsonl");
    let file = File::create(&telemetry_path)
        .with_context(|| format!("creating telemetry file at {}", telemetry_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("structured logging not installed for run {run_id}: {err}");
    }
    tracing::info!(run_id, "structured logging enabled");

    Ok(Some(LoggingGuard {
        _guard: guard,
        telemetry_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn outputs_in(dir: &Path) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: dir.join("rounds.jsonl"),
            summary_md: dir.join("summary.md"),
        }
    }

    #[test]
    fn disabled_logging_installs_nothing() {
        let dir = tempdir().unwrap();
        let guard = init_logging(&LoggingConfig::default(), &outputs_in(dir.path()), "off").unwrap();
        assert!(guard.is_none());
        assert!(!dir.path().join("telemetry.jsonl").exists());
    }

    #[test]
    fn repeated_init_still_returns_a_guard() {
        let logging = LoggingConfig {
            enable_structured: true,
            ..LoggingConfig::default()
        };
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();

        let guard = init_logging(&logging, &outputs_in(first.path()), "first").unwrap();
        assert!(guard.is_some_and(|g| g.telemetry_path.exists()));

        // The global subscriber is already taken; setup reports it and carries on.
        let guard = init_logging(&logging, &outputs_in(second.path()), "second").unwrap();
        assert!(guard.is_some_and(|g| g.telemetry_path == second.path().join("telemetry.jsonl")));
    }
}
