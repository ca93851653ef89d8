// src/core/mod.rs

pub mod html;

pub use html::{Element, Node};
