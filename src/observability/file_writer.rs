//! Append-only line writer with numbered size-based rotation.
//!
//! When the live file grows past the policy limit it is shifted to `<file>.1`,
//! existing backups move up by one (`.1` → `.2`, ...), and the oldest backup
//! beyond the retention count is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Limits applied before each write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            backups: 3,
        }
    }
}

/// Thread-safe rotating writer. The file is opened lazily on the first write.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, or writing fails, or if the lock
    /// was poisoned by a panicking writer.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.over_limit() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn over_limit(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.policy.backups))?;
        for index in (1..self.policy.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(dir: &Path, backups: usize) -> RotatingFile {
        RotatingFile::new(
            dir.join("trace.json"),
            RotationPolicy {
                max_bytes: 8,
                backups,
            },
        )
    }

    #[test]
    fn appends_lines_until_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = small(dir.path(), 2);
        writer.append_line("a").unwrap();
        writer.append_line("b").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("trace.json")).unwrap(), "a\nb\n");
    }

    #[test]
    fn rotation_shifts_backups_and_drops_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let writer = small(dir.path(), 2);
        for line in ["first-line", "second-line", "third-line", "fourth-line"] {
            writer.append_line(line).unwrap();
        }

        let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("trace.json"), "fourth-line\n");
        assert_eq!(read("trace.json.1"), "third-line\n");
        assert_eq!(read("trace.json.2"), "second-line\n");
        assert!(!dir.path().join("trace.json.3").exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let writer = small(dir.path(), 0);
        writer.append_line("overflowing").unwrap();
        writer.append_line("fresh").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("trace.json")).unwrap(), "fresh\n");
        assert!(!dir.path().join("trace.json.1").exists());
    }
}
