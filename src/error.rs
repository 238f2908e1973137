//! Error taxonomy for iconsmith
//!
//! Every failure the tool can report is a variant here. Library code
//! returns these instead of terminating the process; the CLI dispatcher
//! maps each kind to a distinct non-zero exit code and a localized
//! message.

use std::path::PathBuf;
use thiserror::Error;

use crate::messages::Catalog;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no CSV file found in the input directory")]
    NoInputFile,

    #[error("{count} CSV files found in the input directory, expected exactly one")]
    MultipleInputFiles { count: usize },

    #[error("the input CSV is empty")]
    EmptyInput,

    #[error("input CSV header mismatch (expected {expected:?}, got {actual:?})")]
    InvalidHeader {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("row {row} has {fields} fields, expected {expected}")]
    MalformedRow {
        row: usize,
        fields: usize,
        expected: usize,
    },

    #[error("the data store does not exist")]
    DataStoreMissing,

    #[error("the data store is empty")]
    DataStoreEmpty,

    #[error("the data store header has {fields} columns, expected 4")]
    InvalidDataHeader { fields: usize },

    #[error("row {row} ({app_name}) has an empty IconName")]
    IconNameMissing { row: usize, app_name: String },

    #[error("target directory does not exist: {path}")]
    TargetDirMissing { path: PathBuf },

    #[error("missing directories: {paths:?}")]
    MissingSubdirectories { paths: Vec<PathBuf> },

    #[error("missing output files: {files:?}")]
    MissingArtifacts { files: Vec<String> },

    #[error("config file does not exist: {path}")]
    ConfigMissing { path: PathBuf },

    #[error("config file is not valid JSON: {0}")]
    ConfigMalformed(#[from] serde_json::Error),

    #[error("config field `target_dir` is missing or empty")]
    ConfigFieldMissing,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Process exit code for this error kind. Codes are stable so scripts
    /// can tell validation failures apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoInputFile => 10,
            Error::MultipleInputFiles { .. } => 11,
            Error::EmptyInput => 12,
            Error::InvalidHeader { .. } => 13,
            Error::MalformedRow { .. } => 14,
            Error::DataStoreMissing => 20,
            Error::DataStoreEmpty => 21,
            Error::InvalidDataHeader { .. } => 22,
            Error::IconNameMissing { .. } => 23,
            Error::TargetDirMissing { .. } => 30,
            Error::MissingSubdirectories { .. } => 31,
            Error::MissingArtifacts { .. } => 32,
            Error::ConfigMissing { .. } => 40,
            Error::ConfigMalformed(_) => 41,
            Error::ConfigFieldMissing => 42,
            Error::Io(_) => 70,
            Error::Csv(_) => 71,
        }
    }

    /// Render the user-facing message through the catalog. Multi-line for
    /// the variants that list several paths or show expected vs. actual.
    pub fn localized(&self, msg: &Catalog) -> String {
        match self {
            Error::NoInputFile => msg.text("add.no_csv"),
            Error::MultipleInputFiles { count } => {
                msg.format("add.multiple_csv", &[("count", count.to_string())])
            }
            Error::EmptyInput => msg.text("add.empty_input"),
            Error::InvalidHeader { expected, actual } => {
                let mut out = msg.text("add.wrong_header");
                out.push('\n');
                out.push_str(
                    &msg.format("add.expected_header", &[("header", expected.join(","))]),
                );
                out.push('\n');
                out.push_str(&msg.format("add.actual_header", &[("header", actual.join(","))]));
                out
            }
            Error::MalformedRow {
                row,
                fields,
                expected,
            } => msg.format(
                "row.wrong_fields",
                &[
                    ("row", row.to_string()),
                    ("fields", fields.to_string()),
                    ("expected", expected.to_string()),
                ],
            ),
            Error::DataStoreMissing => msg.text("gen.store_missing"),
            Error::DataStoreEmpty => msg.text("gen.store_empty"),
            Error::InvalidDataHeader { fields } => {
                msg.format("gen.bad_header", &[("fields", fields.to_string())])
            }
            Error::IconNameMissing { row, app_name } => {
                let mut out = msg.format(
                    "gen.iconname_empty",
                    &[("row", row.to_string()), ("app", app_name.clone())],
                );
                out.push('\n');
                out.push_str(&msg.text("gen.fill_iconname"));
                out
            }
            Error::TargetDirMissing { path } => {
                msg.format("copy.target_missing", &[("path", path.display().to_string())])
            }
            Error::MissingSubdirectories { paths } => {
                let mut out = msg.text("copy.dirs_missing");
                for p in paths {
                    out.push('\n');
                    out.push_str(&format!("  {}", p.display()));
                }
                out
            }
            Error::MissingArtifacts { files } => {
                let mut out = msg.text("copy.files_missing");
                for f in files {
                    out.push('\n');
                    out.push_str(&format!("  {f}"));
                }
                out
            }
            Error::ConfigMissing { path } => {
                msg.format("config.missing", &[("path", path.display().to_string())])
            }
            Error::ConfigMalformed(e) => {
                msg.format("config.malformed", &[("error", e.to_string())])
            }
            Error::ConfigFieldMissing => msg.text("config.field_missing"),
            Error::Io(e) => msg.format("error.io", &[("error", e.to_string())]),
            Error::Csv(e) => msg.format("error.csv", &[("error", e.to_string())]),
        }
    }
}
