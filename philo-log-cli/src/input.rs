//! Log acquisition
//!
//! Collects the raw simulator output as a list of lines, from stdin or a
//! file, and optionally keeps a copy on disk.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Read every line from stdin until EOF
pub fn read_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let lines = stdin
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read simulation output from stdin")?;
    log::debug!("Read {} lines from stdin", lines.len());
    Ok(lines)
}

/// Read every line of a log file
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file: {:?}", path))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    log::debug!("Read {} lines from {:?}", lines.len(), path);
    Ok(lines)
}

/// File name of a saved log: `philo_output_<first 8 chars of the uid>`
pub fn saved_log_name(uid: &str) -> String {
    let prefix: String = uid.chars().take(8).collect();
    format!("philo_output_{}", prefix)
}

/// Write the raw lines to `dir`, returning the path of the new file
pub fn save_raw_log(lines: &[String], dir: &Path, uid: &str) -> Result<PathBuf> {
    let path = dir.join(saved_log_name(uid));
    let mut file = fs::File::create(&path)
        .with_context(|| format!("Failed to create log file: {:?}", path))?;
    for line in lines {
        writeln!(file, "{}", line).with_context(|| format!("Failed to write {:?}", path))?;
    }
    log::debug!("Wrote {} lines to {:?}", lines.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_log_name() {
        assert_eq!(
            saved_log_name("1b4e28ba-2fa1-11d2-883f-0016d3cca427"),
            "philo_output_1b4e28ba"
        );
    }

    #[test]
    fn test_save_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let lines = vec!["0 1 is thinking".to_string(), "3 1 is eating".to_string()];

        let path = save_raw_log(&lines, dir.path(), "abcdef0123456789").unwrap();
        assert!(path.ends_with("philo_output_abcdef01"));
        assert_eq!(read_file(&path).unwrap(), lines);
    }
}
