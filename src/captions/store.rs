//! CSV codec for the caption sidecar
//!
//! The file is meant to be opened in a spreadsheet editor, so it is written as
//! UTF-8 with a byte-order mark and read back tolerating one.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AlbumError, Result};

/// UTF-8 byte-order mark
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column names, in file order
pub const HEADER: [&str; 3] = ["filename", "title", "note"];

/// Caption for one image. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionRecord {
    pub title: String,
    pub note: String,
}

/// One line of captions.csv, in column order
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionRow {
    pub filename: String,
    pub title: String,
    pub note: String,
}

impl CaptionRow {
    pub fn new(filename: impl Into<String>, record: CaptionRecord) -> Self {
        CaptionRow {
            filename: filename.into(),
            title: record.title,
            note: record.note,
        }
    }
}

/// Captions keyed by exact filename
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionStore {
    records: HashMap<String, CaptionRecord>,
}

impl CaptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load captions from a CSV file.
    ///
    /// A missing file is an empty store. Every field is trimmed, rows without
    /// a filename are skipped, and a filename that appears twice keeps the
    /// later row.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No caption store at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(err) => return Err(AlbumError::io(path, err)),
        };

        let store = Self::from_csv(&bytes).map_err(|err| AlbumError::csv(path, err))?;

        info!("Loaded {} captions from {}", store.len(), path.display());

        Ok(store)
    }

    /// Parse CSV bytes (with or without a leading BOM).
    ///
    /// Columns are looked up by header name. Rows shorter than the header
    /// are padded with empty fields, and a repeated column name resolves to
    /// its last occurrence.
    pub fn from_csv(bytes: &[u8]) -> std::result::Result<Self, csv::Error> {
        let data = bytes.strip_prefix(BOM).unwrap_or(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| header.trim() == name)
                .map(|(i, _)| i)
                .last()
        };
        let filename_col = column(HEADER[0]);
        let title_col = column(HEADER[1]);
        let note_col = column(HEADER[2]);

        let field = |record: &csv::StringRecord, col: Option<usize>| -> String {
            col.and_then(|i| record.get(i))
                .unwrap_or("")
                .trim()
                .to_string()
        };

        let mut store = Self::new();
        for record in reader.records() {
            let record = record?;
            let filename = field(&record, filename_col);
            if filename.is_empty() {
                continue;
            }

            store.insert(
                filename,
                CaptionRecord {
                    title: field(&record, title_col),
                    note: field(&record, note_col),
                },
            );
        }

        Ok(store)
    }

    pub fn insert(&mut self, filename: impl Into<String>, record: CaptionRecord) {
        self.records.insert(filename.into(), record);
    }

    pub fn get(&self, filename: &str) -> Option<&CaptionRecord> {
        self.records.get(filename)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.records.contains_key(filename)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

/// Write rows to a CSV file in the given order, replacing it.
///
/// Parent directories are created. The header is written even when there
/// are no rows.
pub fn write_rows(path: &Path, rows: &[CaptionRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| AlbumError::io(parent, err))?;
    }

    let bytes = to_csv(rows).map_err(|err| AlbumError::csv(path, err))?;
    fs::write(path, bytes).map_err(|err| AlbumError::io(path, err))?;

    debug!("Wrote {} caption rows to {}", rows.len(), path.display());

    Ok(())
}

/// Serialize rows as BOM + header + records
pub fn to_csv(rows: &[CaptionRow]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut buffer = Vec::with_capacity(BOM.len() + rows.len() * 32);
    buffer.write_all(BOM)?;

    // Header is written by hand so an empty album still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(buffer);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
