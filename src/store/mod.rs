//! The data store: `map/data.csv`
//!
//! A persistent, append-only table of app records, one row per unique
//! (PackageName, LauncherActivity) pair. The importer is the only writer;
//! the emitters and deployer read it. The key invariant is enforced at
//! import time only.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;

use crate::error::{Error, Result};

/// Header of the data store, in column order.
pub const STORE_HEADER: [&str; 4] = ["AppName", "PackageName", "LauncherActivity", "IconName"];

/// Header of an import source table.
pub const SOURCE_HEADER: [&str; 3] = ["AppName", "PackageName", "LauncherActivity"];

/// One fully-populated data store row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub app_name: String,
    pub package_name: String,
    pub launcher_activity: String,
    pub icon_name: String,
}

impl Record {
    /// The dedup key: `PackageName|LauncherActivity`.
    pub fn key(&self) -> String {
        row_key(&self.package_name, &self.launcher_activity)
    }
}

/// The dedup key for raw row fields.
pub fn row_key(package_name: &str, launcher_activity: &str) -> String {
    format!("{package_name}|{launcher_activity}")
}

/// Read every row of a CSV file as raw fields, header included. The reader
/// is flexible on purpose: column-count problems are our validation's job,
/// with 1-based row numbers for the user.
pub fn read_raw(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Index the existing data store by key, skipping the header row. Only rows
/// with at least 3 fields are indexed; anything shorter cannot carry a key.
/// Returns an empty map if the store file does not exist.
pub fn existing_index(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    if !path.is_file() {
        return Ok(HashMap::new());
    }

    let rows = read_raw(path)?;
    let mut index = HashMap::new();
    for row in rows.into_iter().skip(1) {
        if row.len() >= 3 {
            index.insert(row_key(&row[1], &row[2]), row);
        }
    }
    Ok(index)
}

/// Load and validate the full store for generation: the store must exist,
/// be non-empty, carry a 4-column header, and every data row must have
/// exactly 4 fields. IconName completeness is checked by the caller, which
/// owns the row-number reporting.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.is_file() {
        return Err(Error::DataStoreMissing);
    }

    let rows = read_raw(path)?;
    if rows.is_empty() {
        return Err(Error::DataStoreEmpty);
    }

    let header = &rows[0];
    if header.len() != STORE_HEADER.len() {
        return Err(Error::InvalidDataHeader {
            fields: header.len(),
        });
    }

    let mut records = Vec::with_capacity(rows.len() - 1);
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != STORE_HEADER.len() {
            return Err(Error::MalformedRow {
                row: i + 1,
                fields: row.len(),
                expected: STORE_HEADER.len(),
            });
        }
        records.push(Record {
            app_name: row[0].clone(),
            package_name: row[1].clone(),
            launcher_activity: row[2].clone(),
            icon_name: row[3].clone(),
        });
    }
    Ok(records)
}

/// Open the store for appending, creating it (and `map/`) with the
/// 4-column header on first use.
pub fn open_appender(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    let fresh = !path.is_file();
    if fresh {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if fresh {
        writer.write_record(STORE_HEADER)?;
    }
    Ok(writer)
}
