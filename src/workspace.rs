//! Install-root path layout
//!
//! Every run operates relative to one root directory: `input/` holds the
//! CSV dropped by the user, `map/data.csv` is the data store, `output/`
//! receives the generated artifacts, `templates/` may override the two
//! templated emitters, `config/config.json` names the deploy target, and
//! `locales/` holds message catalogs.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.join("input")
    }

    pub fn map_dir(&self) -> PathBuf {
        self.root.join("map")
    }

    pub fn data_csv(&self) -> PathBuf {
        self.map_dir().join("data.csv")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("output")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config").join("config.json")
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.root.join("locales")
    }
}
