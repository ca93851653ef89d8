// src/error.rs
//
// Typed rejections. `Display` text is what the operator sees, so each
// variant reads as a complete user-facing message.

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::config::consts::MAX_SELECTED;

/// Input-format errors: no catalog change.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Please select a valid CSV or Excel file")]
    UnsupportedExtension { path: PathBuf },

    #[error("Could not read {}: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("Could not open spreadsheet: {0}")]
    Sheet(#[from] calamine::Error),

    #[error("Spreadsheet has no sheets")]
    NoSheets,
}

/// Range print validation, checked in declaration order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Please enter valid index numbers for both From Index and To Index")]
    NotANumber,
    #[error("Index numbers must be 1 or greater")]
    BelowOne,
    #[error("From Index must be less than or equal to To Index")]
    Reversed,
    #[error("No items data loaded. Please load a CSV/Excel file first.")]
    EmptyCatalog,
    #[error("Index numbers must be between 1 and {max} (total available items)")]
    OutOfBounds { max: usize },
    #[error("No items found in the range from index {from} to {to}")]
    NothingInRange { from: usize, to: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("This item is already selected")]
    Duplicate { item_id: String },
    #[error("You can select maximum {} items", MAX_SELECTED)]
    Full,
    #[error("No catalog item at position #{}", .index + 1)]
    NotInCatalog { index: usize },
    #[error("No selected item at position {index}")]
    NoSuchEntry { index: usize },
    #[error("No items selected to reset")]
    NothingToReset,
    #[error("Please select items first")]
    NothingSelected,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Invalid prices for item: {name}")]
    Invalid { index: usize, name: String },
    #[error("Expected {expected} price entries, got {got}")]
    Misaligned { expected: usize, got: usize },
}

/// Template resource errors; callers fall back to the built-in template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Could not read template {}: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: io::Error },
    #[error("Template {} has no label placeholder", .path.display())]
    NoPlaceholder { path: PathBuf },
}
