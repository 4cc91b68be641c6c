//! Local export directory for pitch logs.
//!
//! Each export is a single CSV file named for the opponent and the minute
//! it was taken. Exports never replace each other; a second one in the same
//! minute gets a numeric suffix:
//!
//! ```text
//! <root>/
//!   pitch_data_vs_case-western_2025-04-12_14-05.csv
//!   pitch_data_vs_case-western_2025-04-12_14-05-2.csv
//!   pitch_data_vs_practice_2025-04-13_09-30.csv
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use jiff::civil::DateTime;

use crate::export::{render_csv, suggested_filename};
use crate::session::Session;

/// Errors that can occur while writing an export.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-based storage for CSV exports.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default export root: `~/.pitchlog/exports/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".pitchlog").join("exports"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the session's pitch log as CSV and returns the file path.
    ///
    /// The file is written beside its final name and renamed into place, so
    /// a failed write never leaves a partial export. The session is only
    /// read; clearing it after a good export is up to the caller.
    pub fn write_export(&self, session: &Session, at: DateTime) -> Result<PathBuf> {
        let csv = render_csv(&session.export_records())?;
        let path = self.unused_path(&suggested_filename(session.opponent(), at))?;
        let partial = path.with_extension("csv.partial");

        fs::write(&partial, csv)?;
        if let Err(e) = fs::rename(&partial, &path) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }

        tracing::info!(path = %path.display(), pitches = session.pitches().len(), "exported pitch log");
        Ok(path)
    }

    /// `name` under the root, or `<stem>-2.csv`, `<stem>-3.csv`, ... if taken.
    fn unused_path(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if !path.try_exists()? {
            return Ok(path);
        }

        let stem = name.strip_suffix(".csv").unwrap_or(name);
        let mut n = 2u32;
        loop {
            let candidate = self.root.join(format!("{stem}-{n}.csv"));
            if !candidate.try_exists()? {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    /// Lists exported CSV files, oldest name first.
    pub fn list_exports(&self) -> Result<Vec<PathBuf>> {
        let mut exports = Vec::new();
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(exports),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
                exports.push(path);
            }
        }
        exports.sort();
        Ok(exports)
    }
}
