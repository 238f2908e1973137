//! Deployment into an Android project tree
//!
//! Copies the five generated artifacts into `app/src/main/res/xml` and
//! `app/src/main/assets` of the target project. All checks run before the
//! first copy, and every missing path is reported together rather than
//! one at a time.

use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::emit::ARTIFACT_FILES;
use crate::error::{Error, Result};
use crate::messages::Catalog;
use crate::workspace::Workspace;

const XML_SUBDIR: &[&str] = &["app", "src", "main", "res", "xml"];
const ASSETS_SUBDIR: &[&str] = &["app", "src", "main", "assets"];

pub struct Deployer<'a> {
    ws: &'a Workspace,
    msg: &'a Catalog,
}

impl<'a> Deployer<'a> {
    pub fn new(ws: &'a Workspace, msg: &'a Catalog) -> Self {
        Self { ws, msg }
    }

    pub fn run(&self, target: &Path) -> Result<()> {
        if !target.is_dir() {
            return Err(Error::TargetDirMissing {
                path: target.to_path_buf(),
            });
        }

        let xml_dir = join_all(target, XML_SUBDIR);
        let assets_dir = join_all(target, ASSETS_SUBDIR);

        let missing: Vec<PathBuf> = [&xml_dir, &assets_dir]
            .into_iter()
            .filter(|d| !d.is_dir())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingSubdirectories { paths: missing });
        }

        let source_dir = self.ws.output_dir();
        let missing_files: Vec<String> = ARTIFACT_FILES
            .iter()
            .filter(|name| !source_dir.join(name).is_file())
            .map(|name| name.to_string())
            .collect();
        if !missing_files.is_empty() {
            return Err(Error::MissingArtifacts {
                files: missing_files,
            });
        }

        println!("{}", self.msg.text("copy.start"));
        for name in ARTIFACT_FILES {
            let src = source_dir.join(name);
            for dst_dir in [&xml_dir, &assets_dir] {
                let dst = dst_dir.join(name);
                std::fs::copy(&src, &dst)?;
                info!("copied {} -> {}", src.display(), dst.display());
                println!(
                    "{}",
                    self.msg
                        .format("copy.done_one", &[("path", dst.display().to_string())])
                );
            }
        }
        println!("{}", self.msg.text("copy.success").green());
        Ok(())
    }
}

fn join_all(base: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base.to_path_buf(), |p, part| p.join(part))
}
