use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::StoreError;

/// Which of the two persisted tables an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Raw,
    Analyzed,
}

const RAW_HEADER: &[&str] = &["Product", "Site", "URL", "Review"];

const ANALYZED_HEADER: &[&str] = &[
    "product",
    "review",
    "sentiment",
    "pros",
    "cons",
    "improvements",
    "verdict",
];

impl RecordKind {
    /// Column header written when the backing file is created.
    #[must_use]
    pub fn header(self) -> &'static [&'static str] {
        match self {
            RecordKind::Raw => RAW_HEADER,
            RecordKind::Analyzed => ANALYZED_HEADER,
        }
    }

    /// Normalized column names that make up the identity key.
    #[must_use]
    pub fn key_columns(self) -> &'static [&'static str] {
        match self {
            RecordKind::Raw => &["url"],
            RecordKind::Analyzed => &["product", "review"],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Raw => "collected",
            RecordKind::Analyzed => "analyzed",
        }
    }
}

/// Trim and lowercase a column name.
#[must_use]
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A whole table read into memory with normalized column names.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Read a CSV file with a header row.
    ///
    /// A zero-byte file yields an empty table with no columns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the file is absent, or an I/O or
    /// CSV error if it cannot be parsed.
    pub fn read(path: &Path) -> Result<Self, StoreError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    path: path.display().to_string(),
                });
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let mut reader = csv::Reader::from_reader(file);
        let columns = reader
            .headers()?
            .iter()
            .map(normalize_column)
            .collect::<Vec<_>>();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a normalized column name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Normalized names from `required` that the table lacks, in the given order.
    #[must_use]
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| (*name).to_string())
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Value of `column` in `row`, or `""` when the column is absent.
    #[must_use]
    pub fn value<'a>(&self, row: &'a StringRecord, column: &str) -> &'a str {
        self.column_index(column)
            .and_then(|idx| row.get(idx))
            .unwrap_or("")
    }
}
