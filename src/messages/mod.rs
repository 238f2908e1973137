//! Message catalog with locale selection
//!
//! User-facing strings live in a key → template catalog so output stays
//! consistent and translatable. A complete built-in English set always
//! backs the catalog; a JSON file under `<root>/locales/` (e.g.
//! `zh_CN.json`) overrides individual keys for the detected language.
//! Templates use named `{placeholder}` substitution.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Supported locales. [`Locale::EnUs`] is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    ZhCn,
}

impl Locale {
    /// Canonical tag used for catalog file names.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::ZhCn => "zh_CN",
        }
    }
}

/// Detect the locale from the environment (`LC_ALL`, then `LANG`).
pub fn detect_locale() -> Locale {
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            let lower = value.to_lowercase();
            if lower.contains("zh") || lower.contains("chinese") {
                return Locale::ZhCn;
            }
            if !lower.is_empty() {
                break;
            }
        }
    }
    Locale::EnUs
}

/// Built-in English templates. This set is complete: the tool stays usable
/// with no `locales/` directory at all.
const CATALOG_EN: &[(&str, &str)] = &[
    ("add.start", "Importing app rows from the input directory..."),
    ("add.no_csv", "Error: no CSV file found in the input directory"),
    (
        "add.multiple_csv",
        "Error: {count} CSV files found in the input directory, expected exactly one",
    ),
    ("add.found_input", "Found input file: {name}"),
    ("add.empty_input", "Error: the input CSV is empty"),
    ("add.wrong_header", "Error: the input CSV header does not match"),
    ("add.expected_header", "  expected: {header}"),
    ("add.actual_header", "  actual:   {header}"),
    ("add.header_ok", "Input CSV format looks good"),
    (
        "row.wrong_fields",
        "Error: row {row} has {fields} fields, expected {expected}",
    ),
    ("add.rows_ok", "{count} data rows validated"),
    ("add.existing_records", "Data store holds {count} existing records"),
    (
        "add.store_missing",
        "Data store does not exist yet, it will be created",
    ),
    ("add.no_new_data", "No new data, nothing to import"),
    ("add.new_rows", "{count} new rows to import"),
    ("add.success", "Imported {count} new rows into the data store"),
    (
        "add.fill_iconname",
        "Fill in the IconName column in map/data.csv before generating",
    ),
    ("gen.start", "Generating icon-pack resources..."),
    (
        "gen.store_missing",
        "Error: data store map/data.csv does not exist, run `add` first",
    ),
    ("gen.store_empty", "Error: the data store is empty"),
    (
        "gen.bad_header",
        "Error: the data store header has {fields} columns, expected 4",
    ),
    ("gen.rows", "{count} records loaded from the data store"),
    (
        "gen.iconname_empty",
        "Error: row {row} has an empty IconName (app: {app})",
    ),
    (
        "gen.fill_iconname",
        "Fill in the IconName for every record, then re-run generate",
    ),
    ("gen.iconname_ok", "Every record has an IconName"),
    (
        "gen.template_missing",
        "Warning: template {name} not found, using the built-in default",
    ),
    ("gen.wrote", "Generated {name}"),
    ("gen.success", "All five resource files generated into output/"),
    (
        "copy.read_config",
        "No target given, reading it from config/config.json",
    ),
    ("copy.start", "Copying resource files into the project tree..."),
    (
        "copy.target_missing",
        "Error: target directory does not exist: {path}",
    ),
    ("copy.dirs_missing", "Error: the following directories do not exist:"),
    (
        "copy.files_missing",
        "Error: the following output files do not exist:",
    ),
    ("copy.done_one", "Copied to {path}"),
    ("copy.success", "All resource files copied"),
    ("config.missing", "Error: config file does not exist: {path}"),
    ("config.malformed", "Error: config file is not valid JSON: {error}"),
    (
        "config.field_missing",
        "Error: config field `target_dir` is missing or empty",
    ),
    ("error.io", "I/O error: {error}"),
    ("error.csv", "CSV error: {error}"),
];

/// A loaded message catalog. Constructed once in `main` and passed by
/// reference into each component.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    overrides: HashMap<String, String>,
}

impl Catalog {
    /// The built-in English catalog with no file overrides.
    pub fn builtin() -> Self {
        Self {
            locale: Locale::EnUs,
            overrides: HashMap::new(),
        }
    }

    /// Load the catalog for `locale` from `locale_dir`, falling back to
    /// `en_US.json` and then to the built-in set. A missing or unparsable
    /// file is a warning, never an error.
    pub fn load(locale_dir: &Path, locale: Locale) -> Self {
        let mut catalog = Self {
            locale,
            overrides: HashMap::new(),
        };

        for tag in [locale.tag(), Locale::EnUs.tag()] {
            let path = locale_dir.join(format!("{tag}.json"));
            if !path.is_file() {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(text) => match serde_json::from_str::<HashMap<String, String>>(&text) {
                    Ok(map) => {
                        debug!("loaded {} messages from {}", map.len(), path.display());
                        catalog.overrides = map;
                        return catalog;
                    }
                    Err(e) => {
                        warn!("ignoring malformed catalog {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("failed to read catalog {}: {}", path.display(), e);
                }
            }
        }

        catalog
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a template: file override first, then built-in English,
    /// then the key itself.
    fn template(&self, key: &str) -> String {
        if let Some(t) = self.overrides.get(key) {
            return t.clone();
        }
        CATALOG_EN
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, t)| (*t).to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// A message with no placeholders.
    pub fn text(&self, key: &str) -> String {
        self.template(key)
    }

    /// A message with named `{placeholder}` arguments substituted in order.
    pub fn format(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut out = self.template(key);
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}
