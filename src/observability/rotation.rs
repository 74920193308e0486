//! Size-rotated append-only file.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Appends lines to a file, moving it aside once it grows past a limit.
///
/// Backups sit next to the file as `<file name>.<UTC timestamp>`, so sorting
/// them by name sorts them by age. Only the newest `max_backups` survive a
/// rotation.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    /// The file is opened lazily on the first write.
    #[must_use]
    pub const fn new(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be rotated, opened or written, or when a
    /// previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.as_mut() {
            Some(file) => file,
            None => guard.insert(OpenOptions::new().create(true).append(true).open(&self.path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6fZ");
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));
        fs::rename(&self.path, PathBuf::from(backup))?;

        self.prune_backups()
    }

    /// Backups of this file, oldest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let Some(dir) = self.path.parent() else {
            return Ok(vec![]);
        };
        let Some(prefix) = self.path.file_name().and_then(|n| n.to_str()).map(|n| format!("{n}.")) else {
            return Ok(vec![]);
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.max_backups);
        for old in &backups[..excess] {
            // a backup that is already gone is fine
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_below_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingWriter::new(dir.path().join("spans.jsonl"), 1024, 2);

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "one\ntwo\n");
        assert!(writer.backups().unwrap().is_empty());
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingWriter::new(dir.path().join("spans.jsonl"), 10, 1);

        for i in 1..=5 {
            writer.write_line(&format!("line {i}")).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "line 5\n");
    }

    #[test]
    fn unrelated_files_are_not_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.log"), "x").unwrap();
        fs::write(dir.path().join("spans.jsonl.20260101T000000.000000Z"), "x").unwrap();

        let writer = RotatingWriter::new(dir.path().join("spans.jsonl"), 10, 1);
        assert_eq!(writer.backups().unwrap().len(), 1);
    }
}
