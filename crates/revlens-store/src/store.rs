use std::collections::{HashMap, HashSet};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use revlens_core::{AnalyzedReview, AppConfig};

use crate::error::{StoreError, StoreReadFailure};
use crate::records::{analyzed_from_row, row_key, StoreRecord};
use crate::table::{RecordKind, Table};

/// Outcome of an append: rows written and rows skipped as duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendSummary {
    pub saved: usize,
    pub skipped: usize,
}

/// Append a newline if the file's last byte is not one, so the next record
/// starts on its own line.
fn terminate_last_line(file: &mut File, len: u64) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok(())
}

/// Handle on the two CSV tables. Cheap to clone; holds only paths.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    collected_path: PathBuf,
    analyzed_path: PathBuf,
}

impl ReviewStore {
    #[must_use]
    pub fn new(collected_path: impl Into<PathBuf>, analyzed_path: impl Into<PathBuf>) -> Self {
        Self {
            collected_path: collected_path.into(),
            analyzed_path: analyzed_path.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.collected_path(), config.analyzed_path())
    }

    /// Both tables under one directory, using the standard file names.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(revlens_core::app_config::COLLECTED_FILE_NAME),
            dir.join(revlens_core::app_config::ANALYZED_FILE_NAME),
        )
    }

    #[must_use]
    pub fn path(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Raw => &self.collected_path,
            RecordKind::Analyzed => &self.analyzed_path,
        }
    }

    #[must_use]
    pub fn exists(&self, kind: RecordKind) -> bool {
        self.path(kind).exists()
    }

    /// Create the backing file with its header if absent. Never truncates.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory or file cannot be created.
    pub fn ensure_store(&self, kind: RecordKind) -> Result<(), StoreError> {
        let path = self.path(kind);
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path);
        let file = match file {
            Ok(f) => f,
            // Lost a creation race; the other writer owns the header.
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(kind.header())?;
        writer.flush().map_err(|e| StoreError::io(path, e))?;
        tracing::debug!(table = kind.label(), path = %path.display(), "created store file");
        Ok(())
    }

    /// Identity keys currently present in the table.
    ///
    /// A missing or empty file yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreReadFailure`] if the file exists but cannot be parsed
    /// or lacks the key columns.
    pub fn load_existing_keys(&self, kind: RecordKind) -> Result<HashSet<String>, StoreReadFailure> {
        let path = self.path(kind);
        let table = match Table::read(path) {
            Ok(t) => t,
            Err(StoreError::NotFound { .. }) => return Ok(HashSet::new()),
            Err(e) => return Err(StoreReadFailure::new(path, e)),
        };
        if table.columns().is_empty() {
            return Ok(HashSet::new());
        }

        let missing = table.missing_columns(kind.key_columns());
        if !missing.is_empty() {
            return Err(StoreReadFailure::new(
                path,
                format!("missing key columns: {}", missing.join(", ")),
            ));
        }

        Ok(table
            .rows()
            .iter()
            .map(|row| row_key(&table, row, kind))
            .collect())
    }

    /// [`Self::load_existing_keys`] with read failures collapsed to an empty set.
    #[must_use]
    pub fn existing_keys(&self, kind: RecordKind) -> HashSet<String> {
        self.load_existing_keys(kind).unwrap_or_else(|failure| {
            tracing::warn!(
                table = kind.label(),
                error = %failure,
                "store read failed; deduplicating against an empty key set"
            );
            HashSet::new()
        })
    }

    /// Append rows whose identity key is not yet stored.
    ///
    /// Keys are also tracked within `rows`, so a batch carrying the same key
    /// twice writes it once. The header is written only if the file is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be created or written.
    pub fn append_new<R: StoreRecord>(&self, rows: &[R]) -> Result<AppendSummary, StoreError> {
        let kind = R::KIND;
        self.ensure_store(kind)?;
        let mut seen = self.existing_keys(kind);

        let mut summary = AppendSummary::default();
        let mut pending = Vec::new();
        for row in rows {
            let key = row.identity_key();
            if seen.insert(key) {
                pending.push(row.to_row());
                summary.saved += 1;
            } else {
                tracing::debug!(table = kind.label(), key = %row.identity_key(), "skipping duplicate row");
                summary.skipped += 1;
            }
        }

        if pending.is_empty() {
            return Ok(summary);
        }

        let path = self.path(kind);
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .map_err(|e| StoreError::io(path, e))?;
        let len = file.metadata().map_err(|e| StoreError::io(path, e))?.len();
        let was_empty = len == 0;
        if !was_empty {
            terminate_last_line(&mut file, len).map_err(|e| StoreError::io(path, e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if was_empty {
            writer.write_record(kind.header())?;
        }
        for record in &pending {
            writer.write_record(record)?;
        }
        writer.flush().map_err(|e| StoreError::io(path, e))?;

        tracing::info!(
            table = kind.label(),
            saved = summary.saved,
            skipped = summary.skipped,
            "appended rows"
        );
        Ok(summary)
    }

    /// Read a whole table with normalized column names.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the file does not exist, or a CSV
    /// error if it cannot be parsed.
    pub fn read_table(&self, kind: RecordKind) -> Result<Table, StoreError> {
        Table::read(self.path(kind))
    }

    /// Every analyzed row in file order.
    ///
    /// A missing file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Malformed`] if a row carries an unknown sentiment
    /// label, or a CSV error if the file cannot be parsed.
    pub fn load_analyzed(&self) -> Result<Vec<AnalyzedReview>, StoreError> {
        let path = self.path(RecordKind::Analyzed);
        let table = match Table::read(path) {
            Ok(t) => t,
            Err(StoreError::NotFound { .. }) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        table
            .rows()
            .iter()
            .map(|row| {
                analyzed_from_row(&table, row).map_err(|reason| StoreError::Malformed {
                    path: path.display().to_string(),
                    reason,
                })
            })
            .collect()
    }

    /// Products in the collected table ranked by row count, most frequent
    /// first. Ties keep first-seen order. Blank product cells are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreReadFailure`] if the file exists but cannot be parsed.
    pub fn product_frequencies(&self) -> Result<Vec<(String, usize)>, StoreReadFailure> {
        let path = self.path(RecordKind::Raw);
        let table = match Table::read(path) {
            Ok(t) => t,
            Err(StoreError::NotFound { .. }) => return Ok(Vec::new()),
            Err(e) => return Err(StoreReadFailure::new(path, e)),
        };

        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for row in table.rows() {
            let product = table.value(row, "product");
            if product.is_empty() {
                continue;
            }
            let count = counts.entry(product.to_string()).or_insert(0);
            if *count == 0 {
                order.push(product.to_string());
            }
            *count += 1;
        }

        let mut ranked: Vec<(String, usize)> = order
            .into_iter()
            .map(|p| {
                let n = counts.get(&p).copied().unwrap_or(0);
                (p, n)
            })
            .collect();
        // Stable sort keeps first-seen order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(ranked)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
