//! File logging for the terminal app.
//!
//! stdout belongs to the UI, so all `tracing` output goes to a log file in the
//! data directory. At startup a log past the size cap is moved aside to a
//! single `.1` backup and a fresh file is started.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "covid-tracker.log";
/// 5 MB
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// The active log and its one backup.
#[derive(Debug, Clone)]
struct LogFile {
    path: PathBuf,
    max_size: u64,
}

impl LogFile {
    fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LOG_FILE_NAME),
            max_size: MAX_LOG_SIZE,
        }
    }

    fn backup_path(&self) -> PathBuf {
        self.path.with_extension("log.1")
    }

    /// Move the log to its backup once it exceeds `max_size`, replacing any
    /// older backup. Returns whether a rotation happened.
    fn rotate(&self) -> io::Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() > self.max_size => {}
            Ok(_) => return Ok(false),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        }
        fs::rename(&self.path, self.backup_path())?;
        Ok(true)
    }

    fn open_append(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

/// Hands the subscriber a handle to the shared log file for each event.
#[derive(Clone)]
struct SharedFile(Arc<Mutex<File>>);

impl Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/covid-tracker.log`. A log over 5MB is
/// moved to `covid-tracker.log.1` first. `RUST_LOG` overrides `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log = LogFile::in_dir(data_dir);
    if let Err(e) = log.rotate() {
        eprintln!("Warning: Failed to rotate log file: {e}");
    }
    let writer = SharedFile(Arc::new(Mutex::new(log.open_append()?)));

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("covid_tracker={level},covid_tracker_core=warn"))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    tracing::info!(log_path = %log.path.display(), "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_in(dir: &Path, max_size: u64) -> LogFile {
        LogFile {
            path: dir.join(LOG_FILE_NAME),
            max_size,
        }
    }

    #[test]
    fn test_backup_name() {
        let log = log_in(Path::new("/data"), 1);
        assert_eq!(log.backup_path(), Path::new("/data/covid-tracker.log.1"));
    }

    #[test]
    fn test_small_log_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path(), 1024);
        fs::write(&log.path, "line one\nline two\n").unwrap();

        assert!(!log.rotate().unwrap());
        assert_eq!(fs::read_to_string(&log.path).unwrap(), "line one\nline two\n");
        assert!(!log.backup_path().exists());
    }

    #[test]
    fn test_oversized_log_moves_to_backup() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path(), 16);
        fs::write(log.backup_path(), "stale backup\n").unwrap();
        fs::write(&log.path, "0123456789abcdefXYZ\n").unwrap();

        assert!(log.rotate().unwrap());
        assert!(!log.path.exists());
        assert_eq!(
            fs::read_to_string(log.backup_path()).unwrap(),
            "0123456789abcdefXYZ\n"
        );
    }

    #[test]
    fn test_missing_log_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!log_in(dir.path(), 1).rotate().unwrap());
    }

    #[test]
    fn test_writes_land_in_fresh_file_after_rotation() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path(), 4);
        fs::write(&log.path, "old entries\n").unwrap();

        log.rotate().unwrap();
        let mut shared = SharedFile(Arc::new(Mutex::new(log.open_append().unwrap())));
        shared.write_all(b"new\n").unwrap();
        shared.flush().unwrap();

        assert_eq!(fs::read_to_string(&log.path).unwrap(), "new\n");
    }
}
