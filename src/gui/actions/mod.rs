// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod load;   // src/gui/actions/load.rs
mod print;  // src/gui/actions/print.rs

pub use load::{load_path, poll_loads, take_dropped_files};
pub use print::{confirm_pending, open_price_editor, print_range, submit_prices};
