//! File logging for the interactive session.
//!
//! The terminal belongs to the chart, so every event goes to
//! `{log_dir}/birthday.log`. The file is trimmed to its most recent entries
//! when it grows too large, and the trim is reported once logging is up.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "birthday.log";

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Size policy for the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRotation {
    /// Size past which the log is trimmed
    pub max_bytes: u64,
    /// Tail kept after trimming
    pub keep_bytes: u64,
}

impl Default for LogRotation {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            keep_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOutcome {
    Untouched,
    Trimmed { dropped_bytes: u64 },
}

impl LogRotation {
    /// Trim `log_path` to whole lines from its last `keep_bytes` once it
    /// exceeds `max_bytes`.
    pub fn apply(&self, log_path: &Path) -> io::Result<RotationOutcome> {
        let size = match fs::metadata(log_path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(RotationOutcome::Untouched),
            Err(e) => return Err(e),
        };
        if size <= self.max_bytes {
            return Ok(RotationOutcome::Untouched);
        }

        let mut tail = Vec::new();
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(size.saturating_sub(self.keep_bytes)))?;
        file.read_to_end(&mut tail)?;
        drop(file);

        // Drop the partial first line
        let start = tail
            .iter()
            .position(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let kept = &tail[start..];

        let mut file = File::create(log_path)?;
        file.write_all(ROTATION_MARKER)?;
        file.write_all(kept)?;

        Ok(RotationOutcome::Trimmed {
            dropped_bytes: size - kept.len() as u64,
        })
    }
}

/// Where and how verbosely the session logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub log_dir: PathBuf,
    pub level: LevelFilter,
    pub rotation: LogRotation,
}

impl LogSettings {
    pub fn new(log_dir: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self {
            log_dir: log_dir.into(),
            level,
            rotation: LogRotation::default(),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Filter used when `RUST_LOG` is unset.
    ///
    /// The core only logs sweep internals at debug, so it stays at warn
    /// unless the session itself asks for debug or trace.
    pub fn default_directives(&self) -> String {
        let core = if self.level >= LevelFilter::DEBUG {
            self.level
        } else {
            self.level.min(LevelFilter::WARN)
        };
        format!("birthday={},birthday_core={}", self.level, core).to_lowercase()
    }
}

/// Install the file subscriber described by `settings`.
///
/// `RUST_LOG` takes precedence over the configured level. Returns the log path.
pub fn init_logging(settings: &LogSettings) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(&settings.log_dir)?;
    let log_path = settings.log_path();

    let rotation = settings.rotation.apply(&log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directives()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), level = %settings.level, "Logging initialized");
    match rotation {
        Ok(RotationOutcome::Trimmed { dropped_bytes }) => {
            tracing::info!(dropped_bytes, "Rotated oversized log")
        }
        Ok(RotationOutcome::Untouched) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to rotate log file"),
    }

    Ok(log_path)
}
