// src/store.rs
//
// File → Catalog. Picks the parser by extension and runs loads either
// inline (CLI, tests) or on a worker thread (GUI).

use std::{fs, path::{Path, PathBuf}, sync::mpsc::Sender, thread};

use crate::catalog::Catalog;
use crate::config::consts::{DEFAULT_LOADED_MESSAGE, DEFAULT_LOAD_FAILED_MESSAGE};
use crate::csv::parse_catalog;
use crate::error::LoadError;
use crate::sheet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Spreadsheet,
}

impl SourceKind {
    /// Case-insensitive extension match; anything else is unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(SourceKind::Csv),
            "xlsx" | "xls" | "xlsm" | "ods" => Some(SourceKind::Spreadsheet),
            _ => None,
        }
    }
}

/// Why a load was started. Startup failures stay in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOrigin {
    Startup,
    DefaultButton,
    UserFile,
}

impl LoadOrigin {
    pub fn is_silent(self) -> bool { matches!(self, LoadOrigin::Startup) }

    /// Alert to show after a successful load, if any.
    pub fn success_notice(self) -> Option<&'static str> {
        match self {
            LoadOrigin::DefaultButton => Some(DEFAULT_LOADED_MESSAGE),
            LoadOrigin::Startup | LoadOrigin::UserFile => None,
        }
    }

    /// Alert to show after a failed load; `None` keeps it in the log only.
    pub fn failure_notice(self, err: &LoadError) -> Option<String> {
        match self {
            LoadOrigin::Startup => None,
            LoadOrigin::DefaultButton => Some(s!(DEFAULT_LOAD_FAILED_MESSAGE)),
            LoadOrigin::UserFile => Some(err.to_string()),
        }
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let kind = SourceKind::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedExtension { path: path.to_path_buf() })?;

    let catalog = match kind {
        SourceKind::Csv => {
            let text = fs::read(path)
                .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
            parse_catalog(&String::from_utf8_lossy(&text))
        }
        SourceKind::Spreadsheet => sheet::read_path(path)?,
    };

    logf!("Load: {} → {} item(s)", path.display(), catalog.len());
    Ok(catalog)
}

/// In-memory variant for dropped files; `name` only selects the parser.
pub fn load_catalog_bytes(name: &str, bytes: &[u8]) -> Result<Catalog, LoadError> {
    let path = PathBuf::from(name);
    match SourceKind::from_path(&path) {
        Some(SourceKind::Csv) => Ok(parse_catalog(&String::from_utf8_lossy(bytes))),
        Some(SourceKind::Spreadsheet) => sheet::read_bytes(bytes),
        None => Err(LoadError::UnsupportedExtension { path }),
    }
}

/// Result of a background load, tagged with the generation it was issued under.
pub struct LoadOutcome {
    pub generation: u64,
    pub origin: LoadOrigin,
    pub path: PathBuf,
    pub result: Result<Catalog, LoadError>,
}

/// Run `load_catalog` on a worker thread and send the outcome back.
/// `on_done` runs after sending (GUI: request a repaint).
pub fn spawn_load<F>(
    path: PathBuf,
    generation: u64,
    origin: LoadOrigin,
    tx: Sender<LoadOutcome>,
    on_done: F,
) where
    F: FnOnce() + Send + 'static,
{
    thread::spawn(move || {
        let result = load_catalog(&path);
        if tx.send(LoadOutcome { generation, origin, path, result }).is_err() {
            logd!("Load: receiver gone, dropping result for generation {}", generation);
        }
        on_done();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_picks_parser() {
        assert_eq!(SourceKind::from_path(Path::new("items.CSV")), Some(SourceKind::Csv));
        assert_eq!(SourceKind::from_path(Path::new("items.xls")), Some(SourceKind::Spreadsheet));
        assert_eq!(SourceKind::from_path(Path::new("items.txt")), None);
        assert_eq!(SourceKind::from_path(Path::new("items")), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load_catalog(Path::new("does/not/exist.pdf")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension { .. }));
        assert_eq!(err.to_string(), "Please select a valid CSV or Excel file");
    }

    #[test]
    fn notices_depend_on_who_asked() {
        let err = LoadError::UnsupportedExtension { path: PathBuf::from("x.pdf") };

        assert_eq!(LoadOrigin::Startup.success_notice(), None);
        assert_eq!(LoadOrigin::Startup.failure_notice(&err), None);
        assert_eq!(LoadOrigin::DefaultButton.success_notice(), Some(DEFAULT_LOADED_MESSAGE));
        assert_eq!(
            LoadOrigin::DefaultButton.failure_notice(&err).as_deref(),
            Some(DEFAULT_LOAD_FAILED_MESSAGE)
        );
        assert_eq!(LoadOrigin::UserFile.success_notice(), None);
        assert_eq!(
            LoadOrigin::UserFile.failure_notice(&err).as_deref(),
            Some("Please select a valid CSV or Excel file")
        );
    }

    #[test]
    fn dropped_csv_bytes_parse() {
        let cat = load_catalog_bytes("drop.csv", b"ITEM_ID,MRP\n1,10\n,20\n").unwrap();
        assert_eq!(cat.len(), 1);
    }
}
