//! Plain-text transaction journal
//!
//! One append-only file per account type (`savings.txt`, `cheque.txt`,
//! `investment.txt`) inside a journal directory. Each completed operation
//! appends the formatted `JournalEntry` lines produced by the engine.

use crate::types::{AccountType, JournalEntry, LedgerError};
use std::collections::hash_map::{Entry, HashMap};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Journal files rooted at a directory
#[derive(Debug, Clone)]
pub struct Journal {
    dir: PathBuf,
}

impl Journal {
    /// Use `dir` as the journal directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "journal opened");
        Ok(Journal { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding entries for `account_type`
    pub fn file_path(&self, account_type: AccountType) -> PathBuf {
        self.dir.join(account_type.journal_file_name())
    }

    fn open_for_append(&self, account_type: AccountType) -> Result<File, LedgerError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_path(account_type))?;
        Ok(file)
    }

    /// Append one entry to its account type's file
    pub fn append(&self, entry: &JournalEntry) -> Result<(), LedgerError> {
        self.append_all([entry])
    }

    /// Append a batch of entries in order
    ///
    /// Every target file is opened before the first line is written, so a
    /// file that cannot be opened leaves all of them untouched.
    pub fn append_all<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a JournalEntry>,
    ) -> Result<(), LedgerError> {
        let entries: Vec<&JournalEntry> = entries.into_iter().collect();

        let mut files = HashMap::new();
        for entry in &entries {
            if let Entry::Vacant(slot) = files.entry(entry.account_type) {
                slot.insert(self.open_for_append(entry.account_type)?);
            }
        }

        for entry in entries {
            if let Some(file) = files.get_mut(&entry.account_type) {
                writeln!(file, "{}", entry)?;
            }
        }
        Ok(())
    }

    /// Every line recorded for `account_type`, oldest first
    ///
    /// A journal file that does not exist yet reads as empty.
    pub fn read(&self, account_type: AccountType) -> Result<Vec<String>, LedgerError> {
        let file = match File::open(self.file_path(account_type)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        Ok(lines)
    }
}
