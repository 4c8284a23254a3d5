//! Append-only JSON-lines writer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

use crate::config::SessionConfig;
use crate::record::{JournalLine, JournalRecord};

/// Optional journal sink. A disabled journal accepts and drops every record.
#[derive(Debug)]
pub struct Journal {
    file: Option<BufWriter<File>>,
    lines: u64,
}

impl Journal {
    /// Open the configured journal file in append mode (or a disabled journal).
    pub fn open(config: &SessionConfig) -> Result<Self> {
        let Some(path) = config.log_path.as_ref() else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self {
            file: Some(BufWriter::new(file)),
            lines: 0,
        })
    }

    pub fn disabled() -> Self {
        Self {
            file: None,
            lines: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Lines written since the journal was opened.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Stamp and append one record, flushing so the file can be tailed.
    pub fn write(&mut self, record: JournalRecord) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        serde_json::to_writer(&mut *file, &JournalLine::now(record))
            .context("encode journal line")?;
        file.write_all(b"\n")?;
        file.flush().context("flush journal")?;
        self.lines += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn disabled_journal_drops_records() {
        let mut j = Journal::disabled();
        assert!(!j.is_enabled());
        j.write(JournalRecord::reset(1)).unwrap();
        assert_eq!(j.lines(), 0);
    }

    #[test]
    fn appends_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.jsonl");
        let config = SessionConfig {
            log_path: Some(path.clone()),
            ..SessionConfig::default()
        };

        let mut j = Journal::open(&config).unwrap();
        j.write(JournalRecord::session(0)).unwrap();
        j.write(JournalRecord::reset(1)).unwrap();
        drop(j);

        // Reopening appends instead of truncating.
        let mut j = Journal::open(&config).unwrap();
        j.write(JournalRecord::reset(2)).unwrap();
        assert_eq!(j.lines(), 1);
        drop(j);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<JournalLine> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].record, JournalRecord::reset(2));
    }

    #[test]
    fn each_write_reaches_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tail.jsonl");
        let config = SessionConfig {
            log_path: Some(path.clone()),
            ..SessionConfig::default()
        };

        let mut j = Journal::open(&config).unwrap();
        j.write(JournalRecord::session(0)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);

        j.write(JournalRecord::reset(1)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn open_reports_bad_paths() {
        let dir = TempDir::new().unwrap();
        let config = SessionConfig {
            log_path: Some(dir.path().join("missing").join("game.jsonl")),
            ..SessionConfig::default()
        };
        let err = Journal::open(&config).unwrap_err();
        assert!(err.to_string().contains("open journal"));
    }
}
