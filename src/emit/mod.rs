//! Artifact generation
//!
//! Validates the data store, then runs all five emitters into `output/`.
//! Each emitter is a pure function from the record list (plus template
//! text for two of them) to the file contents, so identical store content
//! always produces byte-identical artifacts.

pub mod appfilter;
pub mod appmap;
pub mod drawable;
pub mod icon_pack;
pub mod theme_resources;

use colored::Colorize;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};
use crate::messages::Catalog;
use crate::store::{self, Record};
use crate::workspace::Workspace;

/// The five artifacts, in generation order.
pub const ARTIFACT_FILES: [&str; 5] = [
    "appfilter.xml",
    "appmap.xml",
    "drawable.xml",
    "icon_pack.xml",
    "theme_resources.xml",
];

pub struct Generator<'a> {
    ws: &'a Workspace,
    msg: &'a Catalog,
}

impl<'a> Generator<'a> {
    pub fn new(ws: &'a Workspace, msg: &'a Catalog) -> Self {
        Self { ws, msg }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", self.msg.text("gen.start"));

        let records = store::load_records(&self.ws.data_csv())?;
        println!(
            "{}",
            self.msg
                .format("gen.rows", &[("count", records.len().to_string())])
        );

        validate_icon_names(&records)?;
        println!("{}", self.msg.text("gen.iconname_ok"));

        let output_dir = self.ws.output_dir();
        std::fs::create_dir_all(&output_dir)?;

        self.write_artifact(&output_dir, "appfilter.xml", appfilter::render(&records))?;
        self.write_artifact(&output_dir, "appmap.xml", appmap::render(&records))?;
        self.write_artifact(&output_dir, "drawable.xml", drawable::render(&records))?;

        let template = self.load_template("icon_pack_template.xml", icon_pack::DEFAULT_TEMPLATE)?;
        self.write_artifact(&output_dir, "icon_pack.xml", icon_pack::render(&template, &records))?;

        let template =
            self.load_template("theme_resources_template.xml", theme_resources::DEFAULT_TEMPLATE)?;
        self.write_artifact(
            &output_dir,
            "theme_resources.xml",
            theme_resources::render(&template, &records),
        )?;

        println!("{}", self.msg.text("gen.success").green());
        Ok(())
    }

    fn write_artifact(&self, output_dir: &Path, name: &str, contents: String) -> Result<()> {
        std::fs::write(output_dir.join(name), contents)?;
        info!("wrote {}", output_dir.join(name).display());
        println!(
            "{}",
            self.msg.format("gen.wrote", &[("name", name.to_string())])
        );
        Ok(())
    }

    /// Read an override template from `templates/`, or fall back to the
    /// built-in default with a warning.
    fn load_template(&self, name: &str, default: &str) -> Result<String> {
        let path = self.ws.templates_dir().join(name);
        if path.is_file() {
            Ok(std::fs::read_to_string(&path)?)
        } else {
            println!(
                "{}",
                self.msg
                    .format("gen.template_missing", &[("name", name.to_string())])
                    .yellow()
            );
            Ok(default.to_string())
        }
    }
}

/// Every record must carry an icon name; the row number (header is row 1)
/// and app name are reported so the user can fill the gap.
fn validate_icon_names(records: &[Record]) -> Result<()> {
    for (i, r) in records.iter().enumerate() {
        if r.icon_name.trim().is_empty() {
            return Err(Error::IconNameMissing {
                row: i + 2,
                app_name: r.app_name.clone(),
            });
        }
    }
    Ok(())
}
