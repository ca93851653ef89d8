// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub catalog: CatalogOptions,
    pub print: PrintOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Loaded once at startup and by "Load default".
    pub default_path: PathBuf,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self { default_path: PathBuf::from(DEFAULT_CATALOG_FILE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    pub template_path: PathBuf,
    pub out_path: PathBuf,
    /// Caption in front of the sale price on every label.
    pub price_label: String,
    /// Hand the written document to the system opener.
    pub open_after_write: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_OUT_FILE),
            price_label: s!(DEFAULT_PRICE_LABEL),
            open_after_write: true,
        }
    }
}

impl PrintOptions {
    /// Parse GUI/CLI text into the output path. Blank keeps the current one;
    /// a trailing separator means "directory", and the default file name is appended.
    pub fn set_out_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() { return; }
        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path = PathBuf::from(s).join(DEFAULT_OUT_FILE);
        } else {
            self.out_path = PathBuf::from(s);
        }
    }
}
