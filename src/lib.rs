// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod catalog;
pub mod csv;
pub mod debounce;
pub mod error;
pub mod gui;
pub mod label;
pub mod price;
pub mod print;
pub mod selection;
pub mod session;
pub mod sheet;
pub mod store;
pub mod template;
