// src/log.rs
//
// Append-only debug log at LOG_FILE, shared by the GUI worker threads and
// the CLI. Lines are stamped with time since the first log call.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::config::consts::LOG_FILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

static WRITER: Mutex<()> = Mutex::new(());
static EPOCH: OnceLock<Instant> = OnceLock::new();
static DIR_OK: OnceLock<bool> = OnceLock::new();
static ECHO: AtomicBool = AtomicBool::new(false);

/// `hh:mm:ss.mmm`
fn stamp(since: Duration) -> String {
    let secs = since.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        secs / 60 % 60,
        secs % 60,
        since.subsec_millis()
    )
}

fn log_dir_ready() -> bool {
    *DIR_OK.get_or_init(|| match Path::new(LOG_FILE).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).is_ok(),
        _ => true,
    })
}

/// Mirror every log line to stderr (CLI `--verbose`).
pub fn set_echo(on: bool) {
    ECHO.store(on, Ordering::Relaxed);
}

pub fn write_log(level: Level, msg: &str) {
    let epoch = *EPOCH.get_or_init(Instant::now);
    let line = format!("[{}][{}] {msg}\n", stamp(epoch.elapsed()), level.tag());

    if ECHO.load(Ordering::Relaxed) {
        eprint!("{line}");
    }
    if !log_dir_ready() {
        return;
    }

    // logging never fails the caller
    let Ok(_guard) = WRITER.lock() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
