use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Append-only, per-run log sink. Opens `log_<timestamp>.txt` under the
/// configured logs directory on construction and mirrors every entry to
/// stdout, matching the original's `utils::Logger`.
pub struct Logger {
    file: Mutex<File>,
}

impl Logger {
    pub fn new(logs_path: &Path) -> io::Result<Logger> {
        if !logs_path.exists() {
            fs::create_dir_all(logs_path)?;
        }

        let filename = format!("log_{}.txt", Local::now().format(TIMESTAMP_FORMAT));
        let file = File::create(logs_path.join(filename))?;

        Ok(Logger { file: Mutex::new(file) })
    }

    /// Writes `[<timestamp>] <message>` to both stdout and the log file.
    pub fn log(&self, message: impl Display) {
        let entry = format!("[{}] {}", Local::now().format(TIMESTAMP_FORMAT), message);

        println!("{entry}");

        let mut file = self.file.lock().expect("log file mutex poisoned");
        let _ = writeln!(file, "{entry}");
    }
}
