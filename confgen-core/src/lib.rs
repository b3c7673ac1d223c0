//! Core utilities and types for confgen.
//!
//! This crate provides the identifier helpers and file operations used
//! across the confgen crates.

mod file;
mod naming;

// File operations
pub use file::{File, WriteResult};
// Identifier helpers
pub use naming::{apply_prefix, capitalize, decapitalize};
