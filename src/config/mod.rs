//! Deploy configuration: `config/config.json`
//!
//! Read only when `copy` is invoked without an explicit target. A single
//! field names the Android project root to deploy into.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    target_dir: Option<String>,
}

/// The parsed deploy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub target_dir: PathBuf,
}

impl DeployConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigMissing {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;
        let raw: RawConfig = serde_json::from_str(&text)?;

        match raw.target_dir {
            Some(dir) if !dir.trim().is_empty() => Ok(Self {
                target_dir: PathBuf::from(dir),
            }),
            _ => Err(Error::ConfigFieldMissing),
        }
    }
}
