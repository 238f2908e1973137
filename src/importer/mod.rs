//! The importer: merge one input CSV into the data store
//!
//! Locates exactly one `*.csv` under `input/`, validates its shape, and
//! appends only rows whose key is not already in the store. Appended rows
//! get an empty IconName for the user to fill in by hand. The batch is
//! fully validated before anything is written.

use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::messages::Catalog;
use crate::store::{self, SOURCE_HEADER};
use crate::workspace::Workspace;

/// What an import run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Rows appended to the store. Zero means the store was left untouched.
    pub appended: usize,
}

pub struct Importer<'a> {
    ws: &'a Workspace,
    msg: &'a Catalog,
}

impl<'a> Importer<'a> {
    pub fn new(ws: &'a Workspace, msg: &'a Catalog) -> Self {
        Self { ws, msg }
    }

    pub fn run(&self) -> Result<ImportOutcome> {
        println!("{}", self.msg.text("add.start"));

        let input = self.find_input_csv()?;
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("{}", self.msg.format("add.found_input", &[("name", name)]));

        let rows = store::read_raw(&input)?;
        if rows.is_empty() {
            return Err(Error::EmptyInput);
        }

        let header = &rows[0];
        if *header != SOURCE_HEADER {
            return Err(Error::InvalidHeader {
                expected: SOURCE_HEADER.iter().map(|s| s.to_string()).collect(),
                actual: header.clone(),
            });
        }
        println!("{}", self.msg.text("add.header_ok"));

        let data_rows = &rows[1..];
        for (i, row) in data_rows.iter().enumerate() {
            if row.len() != SOURCE_HEADER.len() {
                // Header counts as row 1.
                return Err(Error::MalformedRow {
                    row: i + 2,
                    fields: row.len(),
                    expected: SOURCE_HEADER.len(),
                });
            }
        }
        println!(
            "{}",
            self.msg
                .format("add.rows_ok", &[("count", data_rows.len().to_string())])
        );

        let data_csv = self.ws.data_csv();
        let existing = if data_csv.is_file() {
            let index = store::existing_index(&data_csv)?;
            println!(
                "{}",
                self.msg
                    .format("add.existing_records", &[("count", index.len().to_string())])
            );
            index
        } else {
            println!("{}", self.msg.text("add.store_missing"));
            Default::default()
        };

        // New means "key absent from the pre-existing store". Duplicate keys
        // within one source table are all treated as new; see DESIGN.md.
        let new_rows: Vec<&Vec<String>> = data_rows
            .iter()
            .filter(|row| !existing.contains_key(&store::row_key(&row[1], &row[2])))
            .collect();

        if new_rows.is_empty() {
            println!("{}", self.msg.text("add.no_new_data").yellow());
            return Ok(ImportOutcome { appended: 0 });
        }
        println!(
            "{}",
            self.msg
                .format("add.new_rows", &[("count", new_rows.len().to_string())])
        );

        let mut writer = store::open_appender(&data_csv)?;
        for row in &new_rows {
            writer.write_record([&row[0], &row[1], &row[2], &String::new()])?;
            println!("  + {}", row[0]);
        }
        writer.flush().map_err(Error::Io)?;
        info!("appended {} rows to {}", new_rows.len(), data_csv.display());

        println!(
            "{}",
            self.msg
                .format("add.success", &[("count", new_rows.len().to_string())])
                .green()
        );
        println!("{}", self.msg.text("add.fill_iconname"));

        Ok(ImportOutcome {
            appended: new_rows.len(),
        })
    }

    /// Exactly one `.csv` file must sit in the input directory.
    fn find_input_csv(&self) -> Result<PathBuf> {
        let input_dir = self.ws.input_dir();
        let mut csvs: Vec<PathBuf> = Vec::new();

        if input_dir.is_dir() {
            for entry in std::fs::read_dir(&input_dir)? {
                let path = entry?.path();
                let is_csv = path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
                if is_csv {
                    csvs.push(path);
                }
            }
        }
        debug!("found {} csv file(s) in {}", csvs.len(), input_dir.display());

        match csvs.len() {
            0 => Err(Error::NoInputFile),
            1 => Ok(csvs.remove(0)),
            count => Err(Error::MultipleInputFiles { count }),
        }
    }
}
