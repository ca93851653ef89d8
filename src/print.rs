// src/print.rs
//
// Hand a rendered document to the host print surface: write it to disk,
// then open it with the system opener (browser → print dialog).

use std::{fs, path::{Path, PathBuf}};

use crate::config::options::PrintOptions;

pub struct PrintReceipt {
    pub path: PathBuf,
    /// Set when the file was written but could not be opened.
    pub open_error: Option<String>,
}

impl PrintReceipt {
    pub fn status_line(&self) -> String {
        match &self.open_error {
            None => format!("Labels sent to print: {}", self.path.display()),
            Some(e) => format!("Labels written to {} ({e})", self.path.display()),
        }
    }
}

pub fn write_document(path: &Path, html: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, html)?;
    Ok(path.to_path_buf())
}

pub fn dispatch(html: &str, opts: &PrintOptions) -> Result<PrintReceipt, Box<dyn std::error::Error>> {
    let path = write_document(&opts.out_path, html)?;
    logf!("Print: wrote {} ({} bytes)", path.display(), html.len());

    let open_error = if opts.open_after_write {
        match fs::canonicalize(&path).map_err(|e| e.to_string()).and_then(|abs| open_in_system(&abs)) {
            Ok(()) => None,
            Err(e) => {
                loge!("Print: could not open {}: {}", path.display(), e);
                Some(e)
            }
        }
    } else {
        None
    };

    Ok(PrintReceipt { path, open_error })
}

fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Cross-platform "open with default application".
fn open_in_system(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err("Opening documents not supported on this platform".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_without_open_writes_file() {
        let dir = std::env::temp_dir().join("shelf_labels_print_test");
        let opts = PrintOptions {
            out_path: dir.join("nested").join("labels.html"),
            open_after_write: false,
            ..PrintOptions::default()
        };
        let receipt = dispatch("<html></html>", &opts).unwrap();
        assert!(receipt.open_error.is_none());
        assert_eq!(fs::read_to_string(&receipt.path).unwrap(), "<html></html>");
        let _ = fs::remove_dir_all(&dir);
    }
}
