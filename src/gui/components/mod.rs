// src/gui/components/mod.rs
pub mod catalog_table;
pub mod dialogs;
pub mod load_bar;
pub mod price_dialog;
pub mod range_bar;
pub mod selection_panel;
