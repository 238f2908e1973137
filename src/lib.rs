//! iconsmith - Build Android icon-pack resource XMLs from a CSV app map
//!
//! This library turns a table of app identities (app name, package name,
//! launcher activity, icon name) into the static resource files an
//! icon-pack project consumes.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! 1. **Import** - Merge new rows from an input CSV into the data store
//! 2. **Generation** - Emit the five XML artifacts from the data store
//! 3. **Deployment** - Copy the artifacts into an Android project tree
//!
//! All user-facing text is looked up in a [`messages::Catalog`] selected by
//! system language; components take the catalog at construction instead of
//! touching global state.

pub mod config;
pub mod deploy;
pub mod emit;
pub mod error;
pub mod importer;
pub mod messages;
pub mod store;
pub mod workspace;

pub use config::DeployConfig;
pub use deploy::Deployer;
pub use emit::{Generator, ARTIFACT_FILES};
pub use error::{Error, Result};
pub use importer::{ImportOutcome, Importer};
pub use messages::{Catalog, Locale};
pub use store::Record;
pub use workspace::Workspace;
