use std::fs::{self, OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use chrono::{Duration, Local, NaiveDate};

const LOG_PREFIX: &str = "export-";
const LOG_RETENTION_DAYS: i64 = 7;

lazy_static::lazy_static! {
    static ref LOG_STATE: Mutex<LogState> = Mutex::new(LogState::default());
}

#[derive(Default)]
struct LogState {
    file: Option<PathBuf>,
    verbose: bool,
}

/// Start logging to today's file under the user's cache directory. Runs on
/// the same day append to one file, and files older than a week are removed.
///
/// Failing to create the directory is reported to the caller, who may carry
/// on without a log file.
pub fn init_logging(verbose: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("github-project-csv")
        .join("logs");

    create_dir_all(&log_dir)?;

    let today = Local::now().date_naive();
    let removed = prune_logs(&log_dir, today, LOG_RETENTION_DAYS);
    let log_file = log_dir.join(format!("{}{}.log", LOG_PREFIX, today.format("%Y%m%d")));

    if let Ok(mut state) = LOG_STATE.lock() {
        state.file = Some(log_file.clone());
        state.verbose = verbose;
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));
    if removed > 0 {
        log_debug(&format!("Removed {} old log files", removed));
    }

    Ok(log_file)
}

/// Mirror log lines to stderr without a log file.
pub fn set_verbose(verbose: bool) {
    if let Ok(mut state) = LOG_STATE.lock() {
        state.verbose = verbose;
    }
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

fn log_with_level(level: &str, message: &str) {
    let Ok(state) = LOG_STATE.lock() else {
        return;
    };

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

    if let Some(log_file) = state.file.as_ref() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }

    // stdout carries the CSV, so verbose output goes to stderr only
    if state.verbose {
        eprintln!("[{}] {} - {}", timestamp, level, message);
    }
}

/// Delete log files in `dir` dated more than `keep_days` before `today`.
/// The date is read from the file name, so unrelated files are left alone.
fn prune_logs(dir: &Path, today: NaiveDate, keep_days: i64) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    let cutoff = today - Duration::days(keep_days);

    entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            log_file_date(&name.to_string_lossy()).is_some_and(|date| date < cutoff)
        })
        .filter(|entry| fs::remove_file(entry.path()).is_ok())
        .count()
}

/// Date of a log file named `export-YYYYMMDD.log`, or of the older per-run
/// `export-YYYYMMDD-HHMMSS.log`.
fn log_file_date(name: &str) -> Option<NaiveDate> {
    let stem = name.strip_prefix(LOG_PREFIX)?.strip_suffix(".log")?;
    let day = stem.get(..8)?;
    NaiveDate::parse_from_str(day, "%Y%m%d").ok()
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_STATE.lock().ok().and_then(|state| state.file.clone())
}
