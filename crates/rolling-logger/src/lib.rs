//! Rolling Logger
//!
//! File logger for Tauri apps built on `tracing-subscriber`:
//! - writes `<app>.log` in the app log dir, rolling to `<app>.1.log` ... when it grows too large
//! - mirrors every line to stderr
//!
//! `log` records are captured too (tracing-subscriber installs the log bridge).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::prelude::*;

/// Size at which the active log file is rolled
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;
/// Rolled files kept besides the active one
pub const DEFAULT_MAX_FILES: usize = 3;

/// Size-capped log file that shifts `<app>.N.log` up on rollover.
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.app_name))
    }

    fn rolled_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.app_name, index))
    }

    fn roll(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files > 0 {
            let oldest = self.rolled_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files).rev() {
                let from = self.rolled_path(index);
                if from.exists() {
                    fs::rename(&from, self.rolled_path(index + 1))?;
                }
            }
            fs::rename(self.active_path(), self.rolled_path(1))?;
        }
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.active_path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.roll()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber. Call once, early in app setup.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    let file = RollingFile::open(log_dir.as_ref(), app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_writer(Mutex::new(file));
    let stderr_layer = fmt::layer().with_timer(LocalTime).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    tracing::info!("{} logging to {}", app_name, log_dir.as_ref().display());
    Ok(())
}

pub fn info(message: &str) {
    tracing::info!("{}", message);
}

pub fn error(message: &str) {
    tracing::error!("{}", message);
}
