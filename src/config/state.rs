// src/config/state.rs
use std::path::PathBuf;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Contents of the file path box
    pub file_path_text: String,
    pub last_loaded: Option<PathBuf>,

    /// Range print inputs (raw text, validated on click)
    pub range_from_text: String,
    pub range_to_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 760,
            file_path_text: s!(),
            last_loaded: None,
            range_from_text: s!(),
            range_to_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
