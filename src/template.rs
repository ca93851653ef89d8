// src/template.rs
//
// Print page wrapper. An external template must contain TEMPLATE_PLACEHOLDER;
// the generated label boxes replace it. The built-in page is used whenever
// the external one is missing or unusable.

use std::{fs, path::{Path, PathBuf}};

use crate::config::consts::TEMPLATE_PLACEHOLDER;
use crate::error::TemplateError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Builtin,
}

#[derive(Clone, Debug)]
pub struct Template {
    html: String,
    pub source: TemplateSource,
}

impl Template {
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let html = fs::read_to_string(path)
            .map_err(|source| TemplateError::Io { path: path.to_path_buf(), source })?;
        Self::from_html(html, path)
    }

    pub fn from_html(html: String, path: &Path) -> Result<Self, TemplateError> {
        if !html.contains(TEMPLATE_PLACEHOLDER) {
            return Err(TemplateError::NoPlaceholder { path: path.to_path_buf() });
        }
        Ok(Self { html, source: TemplateSource::File(path.to_path_buf()) })
    }

    pub fn builtin() -> Self {
        Self { html: s!(BUILTIN_TEMPLATE), source: TemplateSource::Builtin }
    }

    /// External template if usable; otherwise the built-in page.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(t) => {
                logd!("Template: using {}", path.display());
                t
            }
            Err(e) => {
                logw!("Template: {e}; falling back to built-in template");
                Self::builtin()
            }
        }
    }

    pub fn is_builtin(&self) -> bool { self.source == TemplateSource::Builtin }

    /// Replace the first placeholder with `markup`.
    pub fn inject(&self, markup: &str) -> String {
        self.html.replacen(TEMPLATE_PLACEHOLDER, markup, 1)
    }
}

/// A4, 2 × 4 grid of 9.4 cm × 5.6 cm boxes, eight per page.
const BUILTIN_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Product Labels</title>
  <style>
    @page { size: A4; margin: 0; }
    body {
      margin: 0;
      padding: 2mm;
      box-sizing: border-box;
      display: grid;
      grid-template-columns: 9.4cm 9.4cm;
      grid-auto-rows: 5.6cm;
      gap: 2mm;
      justify-content: center;
      align-content: start;
      font-family: Arial, sans-serif;
    }
    .product-box {
      width: 9.2cm;
      height: 5.6cm;
      border: 5px solid #000;
      padding: 2mm;
      box-sizing: border-box;
      display: flex;
      flex-direction: column;
      justify-content: space-between;
      page-break-inside: avoid;
    }
    .product-box.blank { border-color: transparent; }
    .product-discount { display: flex; align-items: center; justify-content: center; }
    .discount-line { display: flex; align-items: flex-end; justify-content: center; position: relative; }
    .currency { font-size: 3rem; margin-bottom: 1.5rem; }
    .discount-amount { font-weight: bold; margin: 0 10px; }
    .off { font-size: 1.8rem; position: absolute; bottom: 1.5rem; right: -1.5rem; }
    .product-name, .product-name-sm {
      font-weight: bold;
      text-align: center;
      flex-grow: 1;
      display: flex;
      align-items: center;
      justify-content: center;
    }
    .product-name { font-size: 13pt; }
    .product-name-sm { font-size: 10pt; }
    .price-line { width: 100%; display: flex; align-items: center; justify-content: center; margin: 2px 0 3px; }
    .price-divider { border-left: 2px solid #000; height: 1.5em; margin: 0 10px; }
    .mrp-price { text-decoration: line-through; color: #000; }
    .sale-price { font-weight: bold; color: #000; }
  </style>
</head>
<body>
<!-- Product boxes will be dynamically inserted here -->
</body>
</html>
"#;
