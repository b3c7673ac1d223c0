//! Shared code generation utilities for confgen.
//!
//! This crate provides the language-agnostic building blocks used by the
//! Rust generator (`confgen-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
